//! Static About and Contact pages.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <Navbar />
            <section class="info-page__content">
                <h1>"About QuerySage"</h1>
                <p>
                    "QuerySage watches your database server, previews the query log, and answers "
                    "questions about slow or repeated queries with an assistant that has read them."
                </p>
                <p>"Sign in to see live metrics, clean the query log, and explore query clusters."</p>
            </section>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <Navbar />
            <section class="info-page__content">
                <h1>"Contact"</h1>
                <p>"Questions or feedback? Reach the team at "<a href="mailto:team@querysage.dev">"team@querysage.dev"</a>"."</p>
            </section>
        </div>
    }
}
