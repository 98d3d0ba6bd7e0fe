//! Clustering plot view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ClientConfig;
use crate::util::guard::ProtectedView;

#[component]
pub fn VisualizePage() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    // Set once hydrated so every visit bypasses the browser image cache.
    let nonce = RwSignal::new(None::<u64>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let now_ms = js_sys::Date::now() as u64;
            nonce.set(Some(now_ms));
        }
    });

    let plot_src = move || config.clustering_plot_url(nonce.get());

    view! {
        <div class="visualize-page">
            <header class="toolbar">
                <span class="toolbar__title">"Query Clusters"</span>
                <A href=ProtectedView::Dashboard.path() attr:class="btn">
                    "Back to Dashboard"
                </A>
            </header>
            <figure class="visualize-page__plot">
                <img src=plot_src alt="Clustering of logged queries" />
            </figure>
        </div>
    }
}
