//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    dashboard::DashboardPage,
    info::{AboutPage, ContactPage},
    landing::LandingPage,
    visualize::VisualizePage,
};
use crate::state::session::SessionStore;
use crate::util::guard::ProtectedView;
use crate::util::signal::mirror;
use crate::util::storage::BrowserStorage;

/// Session controller shared through context. It holds `Rc` state, so it is
/// stored locally and only reachable from the thread that created it.
pub type SessionContext = StoredValue<SessionStore<BrowserStorage>, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Restores the session from storage and provides it, together with a
/// mirrored `RwSignal<Session>`, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_store = SessionStore::restore(BrowserStorage);
    let session = mirror(&session_store.session());
    let session_context: SessionContext = StoredValue::new_local(session_store);

    provide_context(session_context);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/querysage.css"/>
        <Title text="QuerySage"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected target=ProtectedView::Dashboard><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("visualize")
                    view=|| view! { <Protected target=ProtectedView::Visualize><VisualizePage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
