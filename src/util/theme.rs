//! Palette and theme attributes on the `<html>` element.
//!
//! Requires a browser environment; outside `hydrate` builds every call is a
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::prefs::{Palette, Theme};

/// Set `data-palette` on the document root.
pub fn apply_palette(palette: Palette) {
    set_root_attribute("data-palette", palette.as_str());
}

/// Set `data-theme` on the document root.
pub fn apply_theme(theme: Theme) {
    set_root_attribute("data-theme", theme.as_str());
}

fn set_root_attribute(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute(name, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}
