use eframe::egui::{
    self,
    pos2,
    vec2,
    Color32,
    Rect,
    Stroke,
    Ui,
    UiBuilder,
};

use super::layout::PageView;
use crate::{
    decor::{
        doodle_parallax,
        hero_parallax,
        orb_parallax,
        stat_float,
    },
    observer::PlayState,
};

const HERO_HEIGHT: f32 = 460.0;
const ORB_RADIUS: f32 = 120.0;
const DOODLE_SIZE: f32 = 36.0;

/// Typing headline over parallax orbs and doodles. `doodle_phase` holds each doodle's
/// rotation and only advances while that doodle is running.
pub fn show(ui: &mut Ui, view: &mut PageView<'_>, doodle_phase: &mut Vec<f32>, dt: f32) {
    let page = view.page;
    let theme = view.theme;
    let scroll = page.nav().scroll_offset();
    let (hero_rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), HERO_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(hero_rect);
    let ctx = ui.ctx().clone();

    for index in 0..page.content().orbs {
        let fraction = (index as f32 + 1.0) / (page.content().orbs as f32 + 1.0);
        let center = pos2(
            hero_rect.left() + hero_rect.width() * fraction,
            hero_rect.top() + 120.0 + 90.0 * (index % 2) as f32 + orb_parallax(scroll, index),
        );
        let color = if index % 2 == 0 { theme.accent(&ctx) } else { theme.secondary(&ctx) };
        painter.circle_filled(center, ORB_RADIUS, color.gamma_multiply(0.12));
    }

    let doodles = &page.targets().doodles;
    doodle_phase.resize(doodles.len(), 0.0);
    for (index, id) in doodles.iter().enumerate() {
        let running = page
            .observers()
            .presentation(*id)
            .is_some_and(|presentation| presentation.play_state == PlayState::Running);
        if running {
            doodle_phase[index] += dt;
        }

        let fraction = (index as f32 + 0.5) / doodles.len() as f32;
        let center = pos2(
            hero_rect.left() + hero_rect.width() * fraction,
            hero_rect.bottom() - 80.0 + doodle_parallax(scroll, index) + doodle_phase[index].sin() * 8.0,
        );
        let rect = Rect::from_center_size(center, vec2(DOODLE_SIZE, DOODLE_SIZE));
        draw_doodle(&painter, rect, doodle_phase[index], theme.secondary(&ctx));
        view.layout.record(*id, rect);
    }

    let content_rect = hero_rect.translate(vec2(0.0, hero_parallax(scroll))).shrink(32.0);
    ui.scope_builder(UiBuilder::new().max_rect(content_rect), |ui| {
        ui.set_clip_rect(hero_rect.intersect(ui.clip_rect()));
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(theme.muted(&ctx, "Hi, I'm").size(18.0));
            ui.label(theme.heading(&ctx, &page.content().owner).size(48.0));
            let typed = page.typing().map_or("", |typing| typing.text());
            ui.label(egui::RichText::new(format!("{typed}|")).size(26.0).color(theme.secondary(&ctx)));
            ui.add_space(12.0);
            ui.label(&page.content().tagline);
        });
    });
}

fn draw_doodle(painter: &egui::Painter, rect: Rect, phase: f32, color: Color32) {
    let stroke = Stroke::new(2.0, color.gamma_multiply(0.6));
    let r = rect.width() / 2.0;
    let points: Vec<_> = (0..5)
        .map(|i| {
            let angle = phase + i as f32 * std::f32::consts::TAU * 2.0 / 5.0;
            rect.center() + vec2(angle.cos(), angle.sin()) * r
        })
        .collect();
    painter.add(egui::Shape::closed_line(points, stroke));
}

/// Stat cards with counters that start when they scroll into view.
pub fn show_stats(ui: &mut Ui, view: &mut PageView<'_>) {
    let ctx = ui.ctx().clone();
    let page = view.page;
    let theme = view.theme;
    let t = view.now;

    ui.horizontal_wrapped(|ui| {
        for (index, stat) in page.content().stats.iter().enumerate() {
            let id = page.targets().stats[index];
            let label = page
                .observers()
                .presentation(id)
                .and_then(|presentation| presentation.counter.as_ref())
                .map_or_else(|| stat.display.clone(), |counter| counter.label());

            let (rect, _) = ui.allocate_exact_size(vec2(180.0, 110.0), egui::Sense::hover());
            view.layout.record(id, rect);

            let card = rect.translate(vec2(0.0, stat_float(t, index)));
            ui.painter().rect_filled(card, 12.0, theme.card(&ctx));
            ui.painter().text(
                card.center() - vec2(0.0, 14.0),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(32.0),
                theme.accent(&ctx),
            );
            ui.painter().text(
                card.center() + vec2(0.0, 24.0),
                egui::Align2::CENTER_CENTER,
                &stat.label,
                egui::FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
        }
    });
}
