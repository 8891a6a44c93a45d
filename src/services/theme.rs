//! Theme propagation
//!
//! The context keeps a dark-mode flag that renderers read; a [`ThemeSink`]
//! gets told whenever the effective theme is (re)applied.

use crate::models::ThemeMode;

/// Receives the theme whenever the finance context applies it
pub trait ThemeSink {
    fn apply_theme(&mut self, theme: ThemeMode);
}

impl<F: FnMut(ThemeMode)> ThemeSink for F {
    fn apply_theme(&mut self, theme: ThemeMode) {
        self(theme)
    }
}
