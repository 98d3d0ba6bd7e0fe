//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked in at build time from `QUERYSAGE_API_URL`, the
//! same way a bundler would inline an env var into a static browser build.
//! Everything that talks to the backend builds its URL through here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Fixed path of the default CSV preview, served from the app origin.
pub const DEFAULT_CSV_PATH: &str = "/output/output/formatted_db.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Resolve the base URL captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("QUERYSAGE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Normalize a raw base URL. Blank input falls back to the default.
    pub fn with_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    pub fn query_url(&self) -> String {
        self.endpoint("/query")
    }

    pub fn system_metrics_url(&self) -> String {
        self.endpoint("/system_metrics")
    }

    pub fn optimize_queries_url(&self) -> String {
        self.endpoint("/optimize_queries")
    }

    pub fn csv_cleanup_url(&self) -> String {
        self.endpoint("/csv_cleanup")
    }

    pub fn health_url(&self) -> String {
        self.endpoint("/health")
    }

    /// Clustering plot image URL. A nonce appends `?t=` so the browser
    /// refetches instead of showing a cached render.
    pub fn clustering_plot_url(&self, nonce: Option<u64>) -> String {
        let base = self.endpoint("/clustering_plot");
        match nonce {
            Some(t) => format!("{base}?t={t}"),
            None => base,
        }
    }
}
