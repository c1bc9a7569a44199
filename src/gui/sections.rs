use std::time::Duration;

use eframe::egui::{
    self,
    vec2,
    RichText,
    Sense,
    Ui,
};

use super::{
    contact,
    layout::{
        reveal,
        PageView,
    },
    projects,
};
use crate::{
    core::SectionInfo,
    decor::{
        skill_entry_at,
        SKILL_HOVER_LIFT,
    },
};

const SKILL_CHIP_FADE: Duration = Duration::from_millis(300);
const SKILL_FILL_SECONDS: f32 = 1.0;

/// Draws every section in order, each behind its staggered reveal.
pub fn show_all(ui: &mut Ui, view: &mut PageView<'_>) {
    let page = view.page;
    for (index, section) in page.content().sections.iter().enumerate() {
        let id = page.targets().sections[index];
        let inner = ui.scope(|ui| {
            reveal(ui, view, id, |ui, view| show_section(ui, view, index, section));
        });
        view.layout.record_section(index, inner.response.rect);
        ui.add_space(48.0);
    }
}

fn show_section(ui: &mut Ui, view: &mut PageView<'_>, index: usize, section: &SectionInfo) {
    let ctx = ui.ctx().clone();
    ui.label(view.theme.heading(&ctx, &section.title).size(30.0));
    ui.add_space(8.0);

    for paragraph in &section.body {
        ui.label(RichText::new(paragraph).size(16.0));
    }

    show_timeline(ui, view, index, section);

    match section.id.as_str() {
        "skills" => show_skills(ui, view),
        "projects" => projects::show(ui, view),
        "contact" => contact::show(ui, view),
        _ => {}
    }
}

fn show_timeline(ui: &mut Ui, view: &mut PageView<'_>, index: usize, section: &SectionInfo) {
    let page = view.page;
    let Some(items) = page.targets().timeline.get(index) else {
        return;
    };

    for (entry, id) in section.timeline.iter().zip(items) {
        reveal(ui, view, *id, |ui, view| {
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
                ui.painter().circle_filled(dot.center(), 5.0, view.theme.accent(ui.ctx()));
                ui.label(RichText::new(entry).size(16.0));
            });
        });
    }
}

fn show_skills(ui: &mut Ui, view: &mut PageView<'_>) {
    let page = view.page;
    let mut groups = page.targets().skill_groups.iter().copied();

    if !page.content().skills.is_empty() {
        if let Some(group) = groups.next() {
            reveal(ui, view, group, show_skill_bars);
        }
    }

    if !page.content().skill_tags.is_empty() {
        if let Some(group) = groups.next() {
            let started = page.observers().presentation(group).and_then(|p| p.revealed_at);
            reveal(ui, view, group, |ui, view| show_skill_chips(ui, view, started));
        }
    }
}

fn show_skill_bars(ui: &mut Ui, view: &mut PageView<'_>) {
    let page = view.page;
    let ctx = ui.ctx().clone();

    for (skill, id) in page.content().skills.iter().zip(&page.targets().skill_bars) {
        ui.horizontal(|ui| {
            ui.label(&skill.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(view.theme.muted(&ctx, &format!("{}%", skill.percent)));
            });
        });

        let (track, _) = ui.allocate_exact_size(vec2(ui.available_width(), 8.0), Sense::hover());
        view.layout.record(*id, track);

        let target = page
            .observers()
            .presentation(*id)
            .and_then(|presentation| presentation.fill_percent)
            .unwrap_or(0) as f32
            / 100.0;
        let fill = ctx.animate_value_with_time(egui::Id::new(("skill_fill", id.index())), target, SKILL_FILL_SECONDS);

        ui.painter().rect_filled(track, 4.0, view.theme.card(&ctx));
        let mut filled = track;
        filled.set_width(track.width() * fill);
        ui.painter().rect_filled(filled, 4.0, view.theme.accent(&ctx));
        ui.add_space(6.0);
    }
}

fn show_skill_chips(ui: &mut Ui, view: &mut PageView<'_>, started: Option<Duration>) {
    let page = view.page;
    let ctx = ui.ctx().clone();

    ui.horizontal_wrapped(|ui| {
        for (index, tag) in page.content().skill_tags.iter().enumerate() {
            let alpha = started.map_or(0.0, |started| {
                let begin = started + skill_entry_at(index);
                let age = view.now.saturating_sub(begin);
                (age.as_secs_f32() / SKILL_CHIP_FADE.as_secs_f32()).min(1.0)
            });

            let galley = ui.painter().layout_no_wrap(
                tag.clone(),
                egui::FontId::proportional(14.0),
                ui.visuals().text_color().gamma_multiply(alpha),
            );
            let (rect, response) =
                ui.allocate_exact_size(galley.size() + vec2(24.0, 12.0), Sense::hover());
            let lift = if response.hovered() { SKILL_HOVER_LIFT } else { 0.0 };
            let chip = rect.translate(vec2(0.0, -lift));

            ui.painter().rect_filled(chip, 14.0, view.theme.card(&ctx).gamma_multiply(alpha));
            ui.painter().rect_stroke(
                chip,
                14.0,
                egui::Stroke::new(1.0, view.theme.accent(&ctx).gamma_multiply(alpha)),
                egui::StrokeKind::Inside,
            );
            ui.painter().galley(chip.center() - galley.size() / 2.0, galley, ui.visuals().text_color());
        }
    });
}
