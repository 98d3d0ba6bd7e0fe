//! Periodic backend health polling.
//!
//! DESIGN
//! ======
//! `start` returns the polling task; the caller decides where it runs
//! (`spawn_local` in the browser, a `LocalPool` in tests) and what drives the
//! ticks (a 5 s `IntervalStream` in the browser, a channel in tests).
//!
//! Ticks are not serialized against each other: each tick issues its own
//! fetch and every completed fetch is applied as it arrives, so with two
//! fetches outstanding the later *arrival* wins.
//!
//! `stop` bumps a generation counter. Any response that lands after that,
//! including one already in flight, is discarded. A stopped poller also
//! ignores `refresh` until it is started again.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, Stream, StreamExt};

use super::store::Store;
use crate::error::ClientError;
use crate::net::api::Backend;
use crate::net::types::MetricsSnapshot;

pub const METRICS_POLL_INTERVAL_MS: u32 = 5000;
pub const METRICS_POLL_INTERVAL: Duration = Duration::from_millis(METRICS_POLL_INTERVAL_MS as u64);

type MetricsFetch = LocalBoxFuture<'static, Result<MetricsSnapshot, ClientError>>;

pub struct MetricsPoller<B> {
    backend: Rc<B>,
    snapshot: Store<MetricsSnapshot>,
    generation: Rc<Cell<u64>>,
    stopped: Rc<Cell<bool>>,
    stop_tx: Rc<RefCell<Option<oneshot::Sender<()>>>>,
}

impl<B> Clone for MetricsPoller<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            snapshot: self.snapshot.clone(),
            generation: Rc::clone(&self.generation),
            stopped: Rc::clone(&self.stopped),
            stop_tx: Rc::clone(&self.stop_tx),
        }
    }
}

impl<B: Backend + 'static> MetricsPoller<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self {
            backend,
            snapshot: Store::default(),
            generation: Rc::new(Cell::new(0)),
            stopped: Rc::new(Cell::new(false)),
            stop_tx: Rc::new(RefCell::new(None)),
        }
    }

    pub fn snapshot(&self) -> Store<MetricsSnapshot> {
        self.snapshot.clone()
    }

    /// Build the polling task: one fetch right away, then one per tick until
    /// `stop` is called or `ticks` ends. Starting again stops the previous run.
    pub fn start<S>(&self, ticks: S) -> impl Future<Output = ()> + use<B, S>
    where
        S: Stream<Item = ()> + Unpin + 'static,
    {
        self.stop();
        self.stopped.set(false);
        let (stop_tx, stop_rx) = oneshot::channel();
        *self.stop_tx.borrow_mut() = Some(stop_tx);
        let generation = self.generation.get();
        let poller = self.clone();
        async move { poller.run(generation, ticks, stop_rx).await }
    }

    /// Cancel future ticks. In-flight fetches finish but are not applied.
    pub fn stop(&self) {
        self.stopped.set(true);
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(tx) = self.stop_tx.borrow_mut().take() {
            if tx.send(()).is_err() {
                log::debug!("metrics poller already finished");
            }
        }
    }

    /// One out-of-schedule fetch, applied under the same rules as a tick.
    /// Works before the first `start`; a no-op once `stop` has been called.
    pub fn refresh(&self) -> impl Future<Output = ()> + use<B> {
        let stopped = self.stopped.get();
        let generation = self.generation.get();
        let fetch = self.fetch();
        let poller = self.clone();
        async move {
            if stopped {
                log::debug!("metrics refresh skipped on a stopped poller");
                return;
            }
            let result = fetch.await;
            poller.apply(generation, result);
        }
    }

    async fn run<S>(self, generation: u64, ticks: S, mut stop_rx: oneshot::Receiver<()>)
    where
        S: Stream<Item = ()> + Unpin,
    {
        let mut ticks = ticks.fuse();
        let mut in_flight: FuturesUnordered<MetricsFetch> = FuturesUnordered::new();
        in_flight.push(self.fetch());

        loop {
            futures::select! {
                tick = ticks.next() => match tick {
                    Some(()) => in_flight.push(self.fetch()),
                    None => break,
                },
                result = in_flight.select_next_some() => self.apply(generation, result),
                _ = stop_rx => break,
            }
        }

        // Let outstanding fetches settle; `apply` drops them if we were stopped.
        while let Some(result) = in_flight.next().await {
            self.apply(generation, result);
        }
    }

    fn fetch(&self) -> MetricsFetch {
        let backend = Rc::clone(&self.backend);
        async move { backend.system_metrics().await }.boxed_local()
    }

    fn apply(&self, generation: u64, result: Result<MetricsSnapshot, ClientError>) {
        if self.generation.get() != generation {
            log::debug!("discarding metrics response from a stopped poller");
            return;
        }
        match result {
            Ok(snapshot) => self.snapshot.set(snapshot),
            Err(err) => log::warn!("metrics poll failed, keeping previous snapshot: {err}"),
        }
    }
}
