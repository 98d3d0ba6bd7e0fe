//! Scripted in-memory backend for component tests.
//!
//! Each endpoint pops replies from its own queue. A reply is either ready
//! immediately or gated on a oneshot the test resolves later, which lets tests
//! control the arrival order of overlapping requests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::api::Backend;
use super::types::{HealthResponse, MetricsSnapshot, QueryRequest, QueryResponse};
use crate::error::ClientError;

pub(crate) enum Reply<T> {
    Ready(Result<T, ClientError>),
    Gated(oneshot::Receiver<Result<T, ClientError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ClientError> {
        match self {
            Self::Ready(result) => result,
            Self::Gated(rx) => rx.await.unwrap_or_else(|_| Err(ClientError::Transport("gate dropped".to_owned()))),
        }
    }
}

/// Queue a gated reply and hand back the sender that releases it.
pub(crate) fn gate<T>() -> (oneshot::Sender<Result<T, ClientError>>, Reply<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Gated(rx))
}

fn unscripted<T>() -> Result<T, ClientError> {
    Err(ClientError::Transport("no scripted reply".to_owned()))
}

#[derive(Default)]
pub(crate) struct StubBackend {
    pub queries: RefCell<VecDeque<Reply<QueryResponse>>>,
    pub metrics: RefCell<VecDeque<Reply<MetricsSnapshot>>>,
    pub optimize: RefCell<VecDeque<Reply<()>>>,
    pub cleanup: RefCell<VecDeque<Reply<()>>>,
    pub health: RefCell<VecDeque<Reply<HealthResponse>>>,
    pub texts: RefCell<VecDeque<Reply<String>>>,
    /// Every `/query` body, in issue order.
    pub query_log: RefCell<Vec<QueryRequest>>,
    /// Number of `/system_metrics` fetches issued.
    pub metrics_calls: RefCell<usize>,
    /// Every path passed to `fetch_text`.
    pub text_paths: RefCell<Vec<String>>,
}

impl StubBackend {
    pub fn push_query(&self, reply: Reply<QueryResponse>) {
        self.queries.borrow_mut().push_back(reply);
    }

    pub fn push_metrics(&self, reply: Reply<MetricsSnapshot>) {
        self.metrics.borrow_mut().push_back(reply);
    }

    pub fn push_optimize(&self, reply: Reply<()>) {
        self.optimize.borrow_mut().push_back(reply);
    }

    pub fn push_cleanup(&self, reply: Reply<()>) {
        self.cleanup.borrow_mut().push_back(reply);
    }

    pub fn push_health(&self, reply: Reply<HealthResponse>) {
        self.health.borrow_mut().push_back(reply);
    }

    pub fn push_text(&self, reply: Reply<String>) {
        self.texts.borrow_mut().push_back(reply);
    }

    pub fn metrics_calls(&self) -> usize {
        *self.metrics_calls.borrow()
    }
}

#[async_trait(?Send)]
impl Backend for StubBackend {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ClientError> {
        self.query_log.borrow_mut().push(request.clone());
        let reply = self.queries.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }

    async fn system_metrics(&self) -> Result<MetricsSnapshot, ClientError> {
        *self.metrics_calls.borrow_mut() += 1;
        let reply = self.metrics.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }

    async fn optimize_queries(&self) -> Result<(), ClientError> {
        let reply = self.optimize.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }

    async fn csv_cleanup(&self) -> Result<(), ClientError> {
        let reply = self.cleanup.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let reply = self.health.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }

    async fn fetch_text(&self, path: &str) -> Result<String, ClientError> {
        self.text_paths.borrow_mut().push(path.to_owned());
        let reply = self.texts.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => unscripted(),
        }
    }
}
