//! Hamburger toggle and slide-in side navigation.

use leptos::prelude::*;

use crate::state::nav::NavMenu;

const LINKS: &[(&str, &str)] = &[("/", "Home"), ("/booking", "Book a visit")];

#[component]
pub fn SideNav() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let is_open = move || menu.get().open;

    view! {
        <button
            class="menu-toggle"
            class:active=is_open
            aria-label="Toggle navigation"
            on:click=move |_| menu.update(NavMenu::toggle)
        >
            <span></span>
            <span></span>
            <span></span>
        </button>
        <nav class="side-nav" class:active=is_open>
            {LINKS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <a href=*href on:click=move |_| menu.update(NavMenu::close)>
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
