//! Color palette and light/dark theme preferences.
//!
//! Both are persisted as plain strings in local storage and applied as
//! `data-palette` / `data-theme` attributes on the document root.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::config::{PALETTE_KEY, THEME_KEY};
use crate::state::toast::Notifier;
use crate::util::storage::KeyValueStore;
use crate::util::theme;

/// Color palette tuned for a kind of visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Human,
    Dog,
    Cat,
    Pet,
}

impl Palette {
    pub const ALL: [Palette; 4] = [Palette::Human, Palette::Dog, Palette::Cat, Palette::Pet];

    /// Value of the `data-palette` attribute and the stored preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Palette::Human => "human",
            Palette::Dog => "dog",
            Palette::Cat => "cat",
            Palette::Pet => "pet",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Palette::Human => "Human Friendly",
            Palette::Dog => "Dog Vision",
            Palette::Cat => "Cat Vision",
            Palette::Pet => "Pet Friendly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: it shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub palette: Palette,
    pub theme: Theme,
}

impl Preferences {
    /// Read stored preferences. Missing or unknown values fall back to defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let palette = store.get(PALETTE_KEY).and_then(|raw| Palette::parse(&raw)).unwrap_or_default();
        let theme = store.get(THEME_KEY).and_then(|raw| Theme::parse(&raw)).unwrap_or_default();
        Self { palette, theme }
    }

    /// Apply both attributes to the document.
    pub fn apply(self) {
        theme::apply_palette(self.palette);
        theme::apply_theme(self.theme);
    }

    pub fn change_palette(&mut self, palette: Palette, store: &dyn KeyValueStore, notifier: &dyn Notifier) {
        self.palette = palette;
        theme::apply_palette(palette);
        if let Err(e) = store.set(PALETTE_KEY, palette.as_str()) {
            leptos::logging::warn!("prefs: palette not saved: {e}");
        }
        notifier.notify(&format!("{} mode enabled! 🎨", palette.display_name()));
    }

    pub fn toggle_theme(&mut self, store: &dyn KeyValueStore, notifier: &dyn Notifier) {
        self.theme = self.theme.toggled();
        theme::apply_theme(self.theme);
        if let Err(e) = store.set(THEME_KEY, self.theme.as_str()) {
            leptos::logging::warn!("prefs: theme not saved: {e}");
        }
        let message = match self.theme {
            Theme::Dark => "Dark mode enabled!",
            Theme::Light => "Light mode enabled!",
        };
        notifier.notify(message);
    }
}
