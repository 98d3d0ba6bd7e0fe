//! Backend liveness badge.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use std::future::Future;
use std::rc::Rc;

use super::store::Store;
use crate::net::api::Backend;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Healthy,
    Unreachable,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "checking",
            Self::Healthy => "online",
            Self::Unreachable => "offline",
        }
    }
}

pub struct HealthProbe<B> {
    backend: Rc<B>,
    status: Store<HealthStatus>,
}

impl<B: Backend + 'static> HealthProbe<B> {
    pub fn new(backend: Rc<B>) -> Self {
        Self { backend, status: Store::default() }
    }

    pub fn status(&self) -> Store<HealthStatus> {
        self.status.clone()
    }

    pub fn check(&self) -> impl Future<Output = ()> + use<B> {
        let backend = Rc::clone(&self.backend);
        let status = self.status.clone();
        async move {
            let next = match backend.health().await {
                Ok(resp) if resp.is_ok() => HealthStatus::Healthy,
                Ok(resp) => {
                    log::warn!("backend health reported {:?}", resp.status);
                    HealthStatus::Unreachable
                }
                Err(err) => {
                    log::warn!("backend health check failed: {err}");
                    HealthStatus::Unreachable
                }
            };
            status.set(next);
        }
    }
}
