//! REST API client for the observability backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native test builds: every call resolves to
//! [`ClientError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A send failure is
//! `Transport`, a non-2xx answer is `Status`, and a body that does not decode
//! is `Payload`. Components decide how each degrades.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{HealthResponse, MetricsSnapshot, QueryRequest, QueryResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Backend calls consumed by the dashboard components.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `POST /query`.
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ClientError>;

    /// `GET /system_metrics`.
    async fn system_metrics(&self) -> Result<MetricsSnapshot, ClientError>;

    /// `POST /optimize_queries`. Any 2xx is an ack.
    async fn optimize_queries(&self) -> Result<(), ClientError>;

    /// `POST /csv_cleanup`. Any 2xx is an ack.
    async fn csv_cleanup(&self) -> Result<(), ClientError>;

    /// `GET /health`.
    async fn health(&self) -> Result<HealthResponse, ClientError>;

    /// Fetch a text document from the app origin (the default CSV).
    async fn fetch_text(&self, path: &str) -> Result<String, ClientError>;
}

/// `gloo-net` implementation pointed at [`ClientConfig::api_base_url`].
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn payload_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Payload(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn send_checked(request: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ClientError> {
    let resp = request.send().await.map_err(transport_error)?;
    ClientError::check_status(resp.status())?;
    Ok(resp)
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.query_url())
                .json(request)
                .map_err(payload_error)?
                .send()
                .await
                .map_err(transport_error)?;
            ClientError::check_status(resp.status())?;
            resp.json::<QueryResponse>().await.map_err(payload_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ClientError::Unavailable)
        }
    }

    async fn system_metrics(&self) -> Result<MetricsSnapshot, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send_checked(gloo_net::http::Request::get(&self.config.system_metrics_url())).await?;
            resp.json::<MetricsSnapshot>().await.map_err(payload_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ClientError::Unavailable)
        }
    }

    async fn optimize_queries(&self) -> Result<(), ClientError> {
        #[cfg(feature = "hydrate")]
        {
            send_checked(gloo_net::http::Request::post(&self.config.optimize_queries_url())).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ClientError::Unavailable)
        }
    }

    async fn csv_cleanup(&self) -> Result<(), ClientError> {
        #[cfg(feature = "hydrate")]
        {
            send_checked(gloo_net::http::Request::post(&self.config.csv_cleanup_url())).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ClientError::Unavailable)
        }
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send_checked(gloo_net::http::Request::get(&self.config.health_url())).await?;
            resp.json::<HealthResponse>().await.map_err(payload_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ClientError::Unavailable)
        }
    }

    async fn fetch_text(&self, path: &str) -> Result<String, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send_checked(gloo_net::http::Request::get(path)).await?;
            resp.text().await.map_err(payload_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ClientError::Unavailable)
        }
    }
}
