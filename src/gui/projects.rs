use eframe::egui::{
    self,
    vec2,
    Align2,
    FontId,
    Sense,
    Ui,
};

use super::layout::{
    reveal,
    to_bounds,
    PageView,
};
use crate::{
    decor::card_tilt,
    page::PageEvent,
    projects::{
        CardPresentation,
        NO_RESULTS_MESSAGE,
    },
};

const CARD_SIZE: egui::Vec2 = vec2(300.0, 170.0);
// Degrees of tilt to pixels of shadow shift
const TILT_SHADOW: f32 = 0.6;

pub fn show(ui: &mut Ui, view: &mut PageView<'_>) {
    show_controls(ui, view);
    ui.add_space(16.0);
    show_cards(ui, view);
}

fn show_controls(ui: &mut Ui, view: &mut PageView<'_>) {
    let grid = view.page.projects();

    ui.horizontal_wrapped(|ui| {
        for (index, button) in grid.filter().buttons().iter().enumerate() {
            let response = ui.selectable_label(grid.filter().is_active(index), &button.label);
            if response.clicked() {
                view.actions.page(PageEvent::FilterClicked(index));
                if let Some(pos) = response.interact_pointer_pos() {
                    view.actions.page(PageEvent::ButtonClick {
                        button: to_bounds(response.rect),
                        x: pos.x,
                        y: pos.y,
                    });
                }
            }
        }
    });

    ui.horizontal(|ui| {
        let mut search = grid.search_input().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search projects...")
                .desired_width(320.0),
        );
        if response.changed() {
            view.actions.page(PageEvent::SearchInput(search));
        }
        if grid.shows_clear_button() && ui.small_button("✕").on_hover_text("Clear search").clicked() {
            view.actions.page(PageEvent::ClearSearch);
        }
    });
}

fn show_cards(ui: &mut Ui, view: &mut PageView<'_>) {
    let page = view.page;
    let grid = page.projects();
    let ctx = ui.ctx().clone();

    ui.horizontal_wrapped(|ui| {
        for (index, project) in grid.cards().iter().enumerate() {
            let presentation = grid.presentation(index);
            let shown = ctx.animate_bool(
                egui::Id::new(("project_card", index)),
                presentation != CardPresentation::Hidden,
            );
            if presentation == CardPresentation::Hidden {
                continue;
            }

            let id = page.targets().cards[index];
            reveal(ui, view, id, |ui, view| {
                ui.multiply_opacity(shown);
                let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::hover());

                let tilt = match response.hover_pos() {
                    Some(pos) => card_tilt(&to_bounds(rect), pos.x, pos.y),
                    None => Default::default(),
                };
                let card = rect.translate(vec2(0.0, -tilt.lift));
                let shadow = card.translate(
                    vec2(-tilt.rotate_y, tilt.rotate_x) * TILT_SHADOW + vec2(0.0, 4.0 + tilt.lift / 2.0),
                );

                let painter = ui.painter();
                painter.rect_filled(shadow, 12.0, view.theme.shadow(&ctx));
                painter.rect_filled(card, 12.0, view.theme.card(&ctx));

                let inner = card.shrink(16.0);
                painter.text(
                    inner.left_top(),
                    Align2::LEFT_TOP,
                    &project.title,
                    FontId::proportional(18.0),
                    view.theme.accent(&ctx),
                );
                let description = painter.layout(
                    project.description.clone(),
                    FontId::proportional(14.0),
                    ui.visuals().text_color(),
                    inner.width(),
                );
                painter.galley(inner.left_top() + vec2(0.0, 30.0), description, ui.visuals().text_color());

                let tags = project.tags.iter().map(|tag| format!("#{tag}")).collect::<Vec<_>>().join("  ");
                painter.text(
                    inner.left_bottom(),
                    Align2::LEFT_BOTTOM,
                    tags,
                    FontId::proportional(12.0),
                    view.theme.secondary(&ctx),
                );
            });
        }
    });

    if grid.shows_no_results() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(view.theme.muted(&ctx, NO_RESULTS_MESSAGE).size(16.0));
        });
    }
}
