//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="hero">
                <h1>"Care for every paw"</h1>
                <p>"Grooming, visits and advice for dogs, cats and the people who love them."</p>
                <p>"Try a palette above to see the site the way your pet might."</p>
                <a href="/booking" class="btn-primary">"Book a visit"</a>
            </section>
        </main>
    }
}
