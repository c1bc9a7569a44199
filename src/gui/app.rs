use std::time::Duration;

use eframe::egui::{
    self,
    pos2,
    vec2,
    Id,
    LayerId,
    Order,
    Rect,
};
use tracing::debug;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    hero,
    layout::{
        to_bounds,
        LayoutMap,
        PageView,
    },
    navbar::Navbar,
    sections,
    theme::{
        apply_preference,
        set_theme,
        Theme,
    },
};
use crate::{
    animation::counter::FRAME_INTERVAL,
    contact::SystemMailHandoff,
    core::{
        Clock,
        SystemClock,
    },
    decor::{
        Ripple,
        TRAIL_REMOVE_AFTER_FADE,
    },
    page::{
        PageEvent,
        PageRuntime,
    },
};

const TRAIL_DOT_RADIUS: f32 = 4.0;

pub struct FolioApp {
    page: PageRuntime,
    clock: SystemClock,
    theme: Theme,
    actions: ActionQueue,
    layout: LayoutMap,
    handoff: SystemMailHandoff,
    scroll_to: Option<f32>,
    doodle_phase: Vec<f32>,
    last_frame: Duration,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: PageRuntime, clock: SystemClock) -> Self {
        let theme = Theme::folio();
        set_theme(&cc.egui_ctx, &theme);
        apply_preference(&cc.egui_ctx, page.theme().current());

        let last_frame = clock.now();
        Self {
            page,
            clock,
            theme,
            actions: ActionQueue::new(),
            layout: LayoutMap::default(),
            handoff: SystemMailHandoff,
            scroll_to: None,
            doodle_phase: Vec::new(),
            last_frame,
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, now: Duration) {
        let actions: Vec<_> = self.actions.drain().collect();
        for action in actions {
            match action {
                UiAction::Page(event) => {
                    let toggles_theme = event == PageEvent::ThemeToggle;
                    if let Some(offset) = self.page.handle(event, now) {
                        self.scroll_to = Some(offset);
                    }
                    if toggles_theme {
                        apply_preference(ctx, self.page.theme().current());
                    }
                }
                UiAction::JumpToSection(index) => match self.layout.section_top(index) {
                    Some(top) => {
                        self.scroll_to = self.page.handle(PageEvent::NavLink { section_top: top }, now);
                    }
                    None => debug!("Section {} has not been laid out yet", index),
                },
            }
        }
    }

    fn track_pointer(&mut self, ctx: &egui::Context) {
        let moved = ctx.input(|i| {
            if i.pointer.delta() == egui::Vec2::ZERO {
                None
            } else {
                i.pointer.hover_pos()
            }
        });
        if let Some(pos) = moved {
            self.actions.page(PageEvent::PointerMove {
                x: pos.x,
                y: pos.y,
                viewport_width: ctx.screen_rect().width(),
            });
        }
    }

    fn paint_decorations(&self, ctx: &egui::Context, now: Duration) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("decorations")));
        let accent = self.theme.accent(ctx);

        for dot in self.page.trail().dots() {
            let alpha = if dot.fading {
                // Fading dots shrink out over the removal delay
                ctx.animate_bool_with_time(
                    Id::new(("trail_dot", dot.id)),
                    false,
                    TRAIL_REMOVE_AFTER_FADE.as_secs_f32(),
                )
            } else {
                ctx.animate_bool_with_time(Id::new(("trail_dot", dot.id)), true, 0.0)
            };
            painter.circle_filled(pos2(dot.x, dot.y), TRAIL_DOT_RADIUS * alpha, accent.gamma_multiply(0.5 * alpha));
        }

        for ripple in self.page.ripples() {
            paint_ripple(&painter, ripple, now, ctx.style().visuals.widgets.active.fg_stroke.color);
        }
    }

    fn show_back_to_top(&mut self, ctx: &egui::Context) {
        if !self.page.nav().shows_back_to_top() {
            return;
        }
        egui::Area::new(Id::new("back_to_top"))
            .order(Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("↑").size(20.0))
                    .corner_radius(22.0)
                    .min_size(vec2(44.0, 44.0));
                if ui.add(button).on_hover_text("Back to top").clicked() {
                    self.actions.page(PageEvent::BackToTop);
                }
            });
    }

    /// Continuous effects need every frame; otherwise sleep until the next timer.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Duration) {
        let floating = !self.page.content().stats.is_empty();
        let trailing = !self.page.trail().is_empty() || !self.page.ripples().is_empty();
        if floating || trailing || self.page.observers().counters_running() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        } else if let Some(deadline) = self.page.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(now));
        }
    }
}

fn paint_ripple(painter: &egui::Painter, ripple: &Ripple, now: Duration, color: egui::Color32) {
    let progress = ripple.progress(now);
    let button = Rect::from_min_size(
        pos2(ripple.button.left, ripple.button.top),
        vec2(ripple.button.width, ripple.button.height),
    );
    let square = Rect::from_min_size(
        button.min + vec2(ripple.x, ripple.y),
        vec2(ripple.diameter, ripple.diameter),
    );
    // Scales from nothing to four times the square while fading out
    let radius = ripple.diameter / 2.0 * 4.0 * progress;
    painter
        .with_clip_rect(button)
        .circle_filled(square.center(), radius, color.gamma_multiply(0.5 * (1.0 - progress)));
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.clock.now();
        let dt = now.saturating_sub(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.page.tick(now, &mut self.handoff);
        self.track_pointer(ctx);

        Navbar::show(ctx, &self.page, &self.theme, &mut self.actions);

        let mut area = egui::ScrollArea::vertical().id_salt("page").auto_shrink([false, false]);
        if let Some(offset) = self.scroll_to.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                area.show(ui, |ui| {
                    self.layout.begin(ui.min_rect().top());
                    let mut view = PageView {
                        page: &self.page,
                        theme: &self.theme,
                        actions: &mut self.actions,
                        layout: &mut self.layout,
                        now,
                    };

                    hero::show(ui, &mut view, &mut self.doodle_phase, dt);
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(1000.0);
                        hero::show_stats(ui, &mut view);
                    });
                    ui.add_space(48.0);
                    ui.vertical(|ui| {
                        ui.set_max_width(1000.0);
                        sections::show_all(ui, &mut view);
                    });
                })
            })
            .inner;

        let offset = output.state.offset.y;
        if offset != self.page.nav().scroll_offset() {
            self.actions.page(PageEvent::Scroll { offset });
        }

        self.show_back_to_top(ctx);
        self.paint_decorations(ctx, now);
        self.apply_actions(ctx, now);

        let layout = &self.layout;
        self.page.check_visibility(to_bounds(output.inner_rect), now, |id| layout.bounds(id));

        self.schedule_repaint(ctx, now);
    }
}
