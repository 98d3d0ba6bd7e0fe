//! Wire DTOs for the backend HTTP contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Conversation messages use
//! the backend's `from` / `"bot"` spelling on the wire while the Rust side
//! speaks in terms of [`Origin::Assistant`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Who authored a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Assistant,
}

/// One turn in the conversation log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "from")]
    pub origin: Origin,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { origin: Origin::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { origin: Origin::Assistant, text: text.into() }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Body of `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    /// Number of retrieved context passages the backend should use.
    pub k: u32,
    /// Conversation so far, excluding the turn carried in `query`.
    pub history: Vec<Message>,
}

/// Response of `POST /query`. `answer` may be absent on a degraded backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Most recent backend health sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Size of the formatted CSV database in megabytes.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub db_file_size_mb: f64,
    /// Host memory utilization, 0-100.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub memory_percent: f64,
    /// Host disk utilization, 0-100.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub disk_percent: f64,
    /// Backend process uptime.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub uptime_seconds: f64,
}

impl MetricsSnapshot {
    /// Uptime rounded down to whole hours, as shown on the dashboard.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn uptime_hours(&self) -> u64 {
        if self.uptime_seconds.is_finite() && self.uptime_seconds > 0.0 {
            (self.uptime_seconds / 3600.0).floor() as u64
        } else {
            0
        }
    }
}

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Missing or `null` metrics read as zero; anything non-numeric is malformed.
fn deserialize_metric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => {
            number.as_f64().ok_or_else(|| D::Error::custom("metric out of range"))
        }
        _ => Err(D::Error::custom("expected numeric metric")),
    }
}
