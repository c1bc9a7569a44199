use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::preference::ThemePreference;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::folio()
    }
}

impl Theme {
    pub fn folio() -> Self {
        Theme { dark: ThemeDetails::midnight(), light: ThemeDetails::daylight() }
    }

    /// Palette for whichever variant `ctx` is currently showing.
    pub fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).comment)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn secondary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).secondary
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn card(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }

    pub fn shadow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_darker
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    accent: Color32,
    secondary: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn midnight() -> Self {
        Self {
            background: Color32::from_rgb(15, 17, 26),
            foreground: Color32::from_rgb(226, 228, 240),
            selection: Color32::from_rgb(55, 48, 98),
            comment: Color32::from_rgb(140, 146, 176),
            red: Color32::from_rgb(248, 113, 113),
            orange: Color32::from_rgb(251, 146, 60),
            green: Color32::from_rgb(74, 222, 128),
            accent: Color32::from_rgb(167, 139, 250),
            secondary: Color32::from_rgb(34, 211, 238),
            background_darker: Color32::from_rgb(8, 9, 15),
            background_dark: Color32::from_rgb(20, 22, 34),
            background_light: Color32::from_rgb(30, 33, 50),
            background_lighter: Color32::from_rgb(44, 48, 70),
        }
    }

    fn daylight() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 255),
            foreground: Color32::from_rgb(30, 32, 48),
            selection: Color32::from_rgb(221, 214, 254),
            comment: Color32::from_rgb(100, 106, 130),
            red: Color32::from_rgb(220, 38, 38),
            orange: Color32::from_rgb(234, 88, 12),
            green: Color32::from_rgb(22, 163, 74),
            accent: Color32::from_rgb(124, 58, 237),
            secondary: Color32::from_rgb(8, 145, 178),
            background_darker: Color32::from_rgb(214, 216, 232),
            background_dark: Color32::from_rgb(238, 239, 248),
            background_light: Color32::from_rgb(255, 255, 255),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Switches the context to the registered variant for `preference`.
pub fn apply_preference(ctx: &egui::Context, preference: ThemePreference) {
    let (theme, stored) = if preference.is_dark() {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = stored);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_darker,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.background_darker, ..default.widgets.inactive.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.inactive.fg_stroke },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.hovered.fg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.accent,
                    weak_bg_fill: theme.accent,
                    bg_stroke: Stroke { color: theme.secondary, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: theme.background, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.secondary,
            faint_bg_color: theme.background_dark,
            extreme_bg_color: theme.background_dark,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_context_variant() {
        let ctx = egui::Context::default();
        let theme = Theme::folio();
        set_theme(&ctx, &theme);

        apply_preference(&ctx, ThemePreference::Dark);
        assert_eq!(theme.accent(&ctx), theme.dark.accent);
        apply_preference(&ctx, ThemePreference::Light);
        assert_eq!(theme.accent(&ctx), theme.light.accent);
    }
}
