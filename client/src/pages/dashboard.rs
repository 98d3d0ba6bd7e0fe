//! Dashboard page: live metrics, CSV preview, optimisation actions and chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one set of controllers for its lifetime. Controllers hold
//! `Rc` state, so they live in a local `StoredValue`; the view reads their
//! stores through mirrored signals. Leaving the route stops metrics polling.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::components::chat_panel::ChatPanel;
use crate::components::csv_preview::CsvPreviewPanel;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::notice_banner::NoticeBanner;
use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::state::actions::{CleanupAction, Notice, OptimizeAction};
use crate::state::chat::{ChatSession, ChatState};
use crate::state::csv::CsvIngestor;
use crate::state::health::HealthProbe;
use crate::state::metrics::MetricsPoller;
use crate::state::session::SessionStore;
use crate::state::store::Store;
use crate::util::guard::{LANDING_PATH, ProtectedView};
use crate::util::signal::mirror;
use crate::util::task::spawn_task;

struct Controllers {
    poller: MetricsPoller<HttpBackend>,
    csv: CsvIngestor<HttpBackend>,
    chat: ChatSession<HttpBackend>,
    optimize: OptimizeAction<HttpBackend>,
    cleanup: CleanupAction<HttpBackend>,
    health: HealthProbe<HttpBackend>,
    notice: Store<Option<Notice>>,
}

impl Controllers {
    fn new(config: ClientConfig) -> Self {
        let backend = Rc::new(HttpBackend::new(config));
        let poller = MetricsPoller::new(Rc::clone(&backend));
        let csv = CsvIngestor::new(Rc::clone(&backend));
        let notice = Store::new(None);
        Self {
            chat: ChatSession::new(Rc::clone(&backend), ChatState::with_greeting()),
            optimize: OptimizeAction::new(Rc::clone(&backend), poller.clone(), notice.clone()),
            cleanup: CleanupAction::new(Rc::clone(&backend), csv.clone(), notice.clone()),
            health: HealthProbe::new(backend),
            poller,
            csv,
            notice,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let controllers = StoredValue::new_local(Controllers::new(ClientConfig::from_build_env()));

    let metrics = controllers.with_value(|c| mirror(&c.poller.snapshot()));
    let preview = controllers.with_value(|c| mirror(&c.csv.preview()));
    let chat = controllers.with_value(|c| mirror(&c.chat.state()));
    let health = controllers.with_value(|c| mirror(&c.health.status()));
    let notice = controllers.with_value(|c| mirror(&c.notice));
    let show_chat = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::metrics::METRICS_POLL_INTERVAL_MS;

        let ticks = Box::pin(gloo_timers::future::IntervalStream::new(METRICS_POLL_INTERVAL_MS));
        spawn_task(controllers.with_value(|c| c.poller.start(ticks)));
    }
    let initial_load = controllers.with_value(|c| c.csv.load_default());
    spawn_task(async move {
        initial_load.await;
    });
    spawn_task(controllers.with_value(|c| c.health.check()));

    on_cleanup(move || {
        controllers.try_with_value(|c| c.poller.stop());
    });

    let navigate_home = navigate.clone();
    let on_logout = move |_| {
        session.with_value(SessionStore::sign_out);
        navigate_home(LANDING_PATH, NavigateOptions::default());
    };
    let on_visualize = move |_| navigate(ProtectedView::Visualize.path(), NavigateOptions::default());
    let on_optimize = move |_| spawn_task(controllers.with_value(|c| c.optimize.run()));
    let on_cleanup_csv = move |_| spawn_task(controllers.with_value(|c| c.cleanup.run()));

    let on_upload = Callback::new(move |(file_name, contents): (String, String)| {
        controllers.with_value(|c| c.csv.ingest_upload(&file_name, &contents));
    });
    let on_send = Callback::new(move |text: String| match controllers.with_value(|c| c.chat.send(&text)) {
        Ok(exchange) => spawn_task(exchange),
        Err(err) => log::debug!("chat message not sent: {err}"),
    });
    let on_close_chat = Callback::new(move |()| show_chat.set(false));
    let on_dismiss = Callback::new(move |()| controllers.with_value(|c| c.notice.set(None)));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"QuerySage Dashboard"</span>
                <div class="toolbar__actions">
                    <button class="btn" on:click=on_optimize>
                        "Optimize Queries"
                    </button>
                    <button class="btn" on:click=on_cleanup_csv>
                        "Clean CSV"
                    </button>
                    <button class="btn" on:click=on_visualize>
                        "Visualize"
                    </button>
                    <button class="btn" on:click=move |_| show_chat.update(|open| *open = !*open)>
                        {move || if show_chat.get() { "Hide Chat" } else { "Chat" }}
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </header>
            <NoticeBanner notice=notice on_dismiss=on_dismiss />
            <main class="dashboard-page__body">
                <MetricsPanel snapshot=metrics health=health />
                <CsvPreviewPanel preview=preview on_upload=on_upload />
            </main>
            <Show when=move || show_chat.get()>
                <ChatPanel chat=chat on_send=on_send on_close=on_close_chat />
            </Show>
        </div>
    }
}
