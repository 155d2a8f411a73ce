//! Palette buttons and the light/dark toggle.

use leptos::prelude::*;

use crate::components::toast::toaster;
use crate::state::prefs::{Palette, Preferences};
use crate::state::toast::ToastState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn PaletteSwitcher() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_toggle_theme = move |_| {
        let notifier = toaster(toasts);
        prefs.update(|p| p.toggle_theme(&BrowserStorage, &notifier));
    };

    view! {
        <div class="palette-switcher">
            {Palette::ALL
                .into_iter()
                .map(|palette| {
                    let on_pick = move |_| {
                        let notifier = toaster(toasts);
                        prefs.update(|p| p.change_palette(palette, &BrowserStorage, &notifier));
                    };
                    view! {
                        <button
                            class:active=move || prefs.get().palette == palette
                            title=palette.display_name()
                            on:click=on_pick
                        >
                            {palette.display_name()}
                        </button>
                    }
                })
                .collect_view()}
            <button id="theme-toggle" class="theme-toggle" on:click=on_toggle_theme>
                {move || prefs.get().theme.toggle_icon()}
            </button>
        </div>
    }
}
