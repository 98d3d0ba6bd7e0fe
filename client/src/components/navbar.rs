//! Top navigation shared by the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "QuerySage"
            </A>
            <div class="navbar__links">
                <A href="/about" attr:class="navbar__link">
                    "About"
                </A>
                <A href="/contact" attr:class="navbar__link">
                    "Contact"
                </A>
            </div>
        </nav>
    }
}
