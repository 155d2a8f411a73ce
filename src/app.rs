//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::palette_switcher::PaletteSwitcher;
use crate::components::side_nav::SideNav;
use crate::components::toast::ToastHost;
use crate::pages::{booking::BookingPage, home::HomePage};
use crate::state::prefs::Preferences;
use crate::state::toast::ToastState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-palette="human" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast and preference contexts and restores the stored
/// palette/theme once the client has hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let prefs = RwSignal::new(Preferences::default());
    provide_context(toasts);
    provide_context(prefs);

    Effect::new(move || {
        let stored = Preferences::load(&BrowserStorage);
        stored.apply();
        prefs.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text="Paw Care"/>

        <Router>
            <SideNav/>
            <PaletteSwitcher/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("booking") view=BookingPage/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
