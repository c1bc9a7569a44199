use std::f32::consts::TAU;

use eframe::egui::{
    self,
    emath::Rot2,
    epaint::TextShape,
    FontId,
    Sense,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    page::{
        PageEvent,
        PageRuntime,
    },
    preference::TOGGLE_SPIN,
};

/// Below this width the links collapse into the hamburger menu.
const MOBILE_WIDTH: f32 = 768.0;

pub struct Navbar;

impl Navbar {
    pub fn show(ctx: &egui::Context, page: &PageRuntime, theme: &Theme, actions: &mut ActionQueue) {
        let nav = page.nav();
        let mobile = ctx.screen_rect().width() <= MOBILE_WIDTH;

        let mut frame = egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(24, 12));
        if nav.is_scrolled() {
            frame = frame
                .fill(theme.card(ctx))
                .shadow(egui::Shadow { offset: [0, 2], blur: 12, spread: 0, color: theme.shadow(ctx) });
        }

        egui::TopBottomPanel::top("navbar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(theme.heading(ctx, &page.content().owner).size(20.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::theme_toggle(ui, page, theme, actions);

                    if mobile {
                        let glyph = if nav.is_menu_open() { "✕" } else { "☰" };
                        if ui.button(glyph).clicked() {
                            actions.page(PageEvent::ToggleMenu);
                        }
                    } else {
                        // right_to_left, so the last section is added first
                        for (index, section) in page.content().sections.iter().enumerate().rev() {
                            if ui.selectable_label(false, &section.title).clicked() {
                                actions.push(UiAction::JumpToSection(index));
                            }
                        }
                    }
                });
            });

            if mobile && nav.is_menu_open() {
                ui.separator();
                for (index, section) in page.content().sections.iter().enumerate() {
                    if ui.selectable_label(false, &section.title).clicked() {
                        actions.push(UiAction::JumpToSection(index));
                    }
                }
            }
        });
    }

    fn theme_toggle(ui: &mut egui::Ui, page: &PageRuntime, theme: &Theme, actions: &mut ActionQueue) {
        let switcher = page.theme();
        let (rect, response) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::click());
        let spin = ui.ctx().animate_bool_with_time(
            response.id,
            switcher.is_spinning(),
            TOGGLE_SPIN.as_secs_f32(),
        );

        if response.hovered() {
            ui.painter().circle_filled(rect.center(), 16.0, ui.visuals().widgets.hovered.bg_fill);
        }

        let color = theme.accent(ui.ctx());
        let galley =
            ui.painter().layout_no_wrap(switcher.icon().glyph().to_string(), FontId::proportional(18.0), color);
        let angle = spin * TAU;
        let pos = rect.center() - Rot2::from_angle(angle) * (galley.size() / 2.0);
        ui.painter().add(TextShape::new(pos, galley, color).with_angle(angle));

        if response.on_hover_text("Toggle theme").clicked() {
            actions.page(PageEvent::ThemeToggle);
        }
    }
}
