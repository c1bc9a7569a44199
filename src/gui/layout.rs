use std::{
    collections::HashMap,
    time::Duration,
};

use eframe::egui::{
    Rect,
    Ui,
};

use super::{
    actions::ActionQueue,
    theme::Theme,
};
use crate::{
    observer::{
        Bounds,
        TargetId,
        REVEAL_OFFSET,
    },
    page::PageRuntime,
};

pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Where things were drawn this frame. Observed elements are kept in screen space to match
/// the viewport; section tops are kept in scroll-content space for anchor jumps.
#[derive(Default)]
pub struct LayoutMap {
    origin_top: f32,
    targets: HashMap<TargetId, Rect>,
    sections: HashMap<usize, f32>,
}

impl LayoutMap {
    /// Starts a new frame. `origin_top` is the screen y of the top of the scroll content.
    pub fn begin(&mut self, origin_top: f32) {
        self.origin_top = origin_top;
        self.targets.clear();
    }

    pub fn record(&mut self, id: TargetId, rect: Rect) {
        self.targets.insert(id, rect);
    }

    pub fn record_section(&mut self, index: usize, rect: Rect) {
        self.sections.insert(index, rect.top() - self.origin_top);
    }

    pub fn bounds(&self, id: TargetId) -> Option<Bounds> {
        self.targets.get(&id).copied().map(to_bounds)
    }

    pub fn section_top(&self, index: usize) -> Option<f32> {
        self.sections.get(&index).copied()
    }
}

/// Everything a section needs while drawing.
pub struct PageView<'a> {
    pub page: &'a PageRuntime,
    pub theme: &'a Theme,
    pub actions: &'a mut ActionQueue,
    pub layout: &'a mut LayoutMap,
    pub now: Duration,
}

/// Draws `add_contents` faded and slid according to the reveal state of `id`, and records
/// its rect. Total height is the same at every stage so nothing below jumps.
pub fn reveal<'a, R>(
    ui: &mut Ui,
    view: &mut PageView<'a>,
    id: TargetId,
    add_contents: impl FnOnce(&mut Ui, &mut PageView<'a>) -> R,
) -> R {
    let progress = view
        .page
        .observers()
        .presentation(id)
        .map_or(1.0, |presentation| presentation.reveal_progress(view.now));
    let offset = REVEAL_OFFSET * (1.0 - progress);

    let inner = ui.scope(|ui| {
        ui.multiply_opacity(progress);
        ui.add_space(offset);
        let result = add_contents(ui, view);
        ui.add_space(REVEAL_OFFSET - offset);
        result
    });

    view.layout.record(id, inner.response.rect);
    inner.inner
}
