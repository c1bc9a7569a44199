//! Light/dark theme preference, persisted under a single key.

use std::time::Duration;

use tracing::{
    info,
    warn,
};

use crate::persistence::PreferenceStore;

pub const THEME_KEY: &str = "theme";

/// How long the toggle control spins after a click.
pub const TOGGLE_SPIN: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Unrecognised values read as light, same as a missing key.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Icon shown on the toggle: the theme a click would switch to.
    pub fn icon(&self) -> ThemeIcon {
        match self {
            ThemePreference::Dark => ThemeIcon::Sun,
            ThemePreference::Light => ThemeIcon::Moon,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => "☀",
            ThemeIcon::Moon => "🌙",
        }
    }
}

pub struct ThemeSwitcher {
    store: Box<dyn PreferenceStore>,
    current: ThemePreference,
    spinning: bool,
}

impl ThemeSwitcher {
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let current = store.get(THEME_KEY).map(|v| ThemePreference::parse(&v)).unwrap_or_default();
        info!("Applying theme preference: {}", current.as_str());
        Self { store, current, spinning: false }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn icon(&self) -> ThemeIcon {
        self.current.icon()
    }

    pub fn stored(&self) -> Option<String> {
        self.store.get(THEME_KEY)
    }

    /// Flips the theme and writes it back. A failed write is logged; the page still switches.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        self.spinning = true;
        info!("Theme switched to {}", self.current.as_str());
        self.current
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn end_spin(&mut self) {
        self.spinning = false;
    }
}
