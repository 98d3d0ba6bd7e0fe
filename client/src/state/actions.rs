//! One-shot backend jobs triggered from the dashboard.
//!
//! Neither action keeps a cooldown or dedupes concurrent runs; invoking one
//! twice issues two requests. Outcomes surface as a [`Notice`] the dashboard
//! shows until the next action replaces it.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::future::Future;
use std::rc::Rc;

use super::csv::CsvIngestor;
use super::metrics::MetricsPoller;
use super::store::Store;
use crate::net::api::Backend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible action outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Runs the query optimizer job, then refreshes metrics.
pub struct OptimizeAction<B> {
    backend: Rc<B>,
    poller: MetricsPoller<B>,
    notice: Store<Option<Notice>>,
}

impl<B: Backend + 'static> OptimizeAction<B> {
    pub fn new(backend: Rc<B>, poller: MetricsPoller<B>, notice: Store<Option<Notice>>) -> Self {
        Self { backend, poller, notice }
    }

    pub fn run(&self) -> impl Future<Output = ()> + use<B> {
        let backend = Rc::clone(&self.backend);
        let poller = self.poller.clone();
        let notice = self.notice.clone();
        async move {
            match backend.optimize_queries().await {
                Ok(()) => {
                    log::info!("query optimization finished");
                    notice.set(Some(Notice::success("Query optimization complete.")));
                    poller.refresh().await;
                }
                Err(err) => {
                    log::warn!("query optimization failed: {err}");
                    notice.set(Some(Notice::error(format!("Query optimization failed: {err}"))));
                }
            }
        }
    }
}

/// Runs the backend CSV cleanup job, then reloads the default preview.
pub struct CleanupAction<B> {
    backend: Rc<B>,
    ingestor: CsvIngestor<B>,
    notice: Store<Option<Notice>>,
}

impl<B: Backend + 'static> CleanupAction<B> {
    pub fn new(backend: Rc<B>, ingestor: CsvIngestor<B>, notice: Store<Option<Notice>>) -> Self {
        Self { backend, ingestor, notice }
    }

    pub fn run(&self) -> impl Future<Output = ()> + use<B> {
        let backend = Rc::clone(&self.backend);
        let ingestor = self.ingestor.clone();
        let notice = self.notice.clone();
        async move {
            match backend.csv_cleanup().await {
                Ok(()) => {
                    log::info!("csv cleanup finished");
                    notice.set(Some(Notice::success("CSV cleanup complete.")));
                    ingestor.load_default().await;
                }
                Err(err) => {
                    log::warn!("csv cleanup failed: {err}");
                    notice.set(Some(Notice::error(format!("CSV cleanup failed: {err}"))));
                }
            }
        }
    }
}
