use super::*;
use serde_json::json;

// =============================================================
// Message wire format
// =============================================================

#[test]
fn message_serializes_with_backend_field_names() {
    let user = serde_json::to_value(Message::user("why slow?")).unwrap();
    assert_eq!(user, json!({ "from": "user", "text": "why slow?" }));

    let bot = serde_json::to_value(Message::assistant("add index")).unwrap();
    assert_eq!(bot, json!({ "from": "bot", "text": "add index" }));
}

#[test]
fn message_deserializes_bot_as_assistant() {
    let msg: Message = serde_json::from_value(json!({ "from": "bot", "text": "hi" })).unwrap();
    assert_eq!(msg.origin, Origin::Assistant);
    assert!(!msg.is_user());
}

#[test]
fn query_request_carries_k_and_history() {
    let req = QueryRequest {
        query: "why slow?".to_owned(),
        k: 3,
        history: vec![Message::assistant("Hi!")],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({
            "query": "why slow?",
            "k": 3,
            "history": [{ "from": "bot", "text": "Hi!" }]
        })
    );
}

// =============================================================
// QueryResponse
// =============================================================

#[test]
fn query_response_reads_answer() {
    let resp: QueryResponse = serde_json::from_value(json!({ "answer": "add index", "retrieved": [] })).unwrap();
    assert_eq!(resp.answer.as_deref(), Some("add index"));
}

#[test]
fn query_response_tolerates_missing_answer() {
    let resp: QueryResponse = serde_json::from_value(json!({ "error": "no query provided" })).unwrap();
    assert!(resp.answer.is_none());
}

// =============================================================
// MetricsSnapshot
// =============================================================

#[test]
fn metrics_snapshot_parses_backend_payload() {
    let snap: MetricsSnapshot = serde_json::from_value(json!({
        "memory_percent": 41.5,
        "disk_percent": 73.2,
        "db_file_size_mb": 1.25,
        "uptime_seconds": 7300
    }))
    .unwrap();
    assert_eq!(
        snap,
        MetricsSnapshot { db_file_size_mb: 1.25, memory_percent: 41.5, disk_percent: 73.2, uptime_seconds: 7300.0 }
    );
}

#[test]
fn metrics_snapshot_missing_or_null_fields_read_as_zero() {
    let snap: MetricsSnapshot = serde_json::from_value(json!({ "memory_percent": null, "disk_percent": 10 })).unwrap();
    assert_eq!(snap.memory_percent, 0.0);
    assert_eq!(snap.disk_percent, 10.0);
    assert_eq!(snap.db_file_size_mb, 0.0);
    assert_eq!(snap.uptime_seconds, 0.0);
}

#[test]
fn metrics_snapshot_rejects_non_numeric_field() {
    let result = serde_json::from_value::<MetricsSnapshot>(json!({ "memory_percent": "lots" }));
    assert!(result.is_err());
}

#[test]
fn uptime_hours_floors() {
    let snap = MetricsSnapshot { uptime_seconds: 7199.0, ..MetricsSnapshot::default() };
    assert_eq!(snap.uptime_hours(), 1);
    let snap = MetricsSnapshot { uptime_seconds: 7200.0, ..MetricsSnapshot::default() };
    assert_eq!(snap.uptime_hours(), 2);
    assert_eq!(MetricsSnapshot::default().uptime_hours(), 0);
}

// =============================================================
// HealthResponse
// =============================================================

#[test]
fn health_response_ok_only_for_ok_status() {
    let ok: HealthResponse = serde_json::from_value(json!({ "status": "ok" })).unwrap();
    let degraded: HealthResponse = serde_json::from_value(json!({ "status": "degraded" })).unwrap();
    assert!(ok.is_ok());
    assert!(!degraded.is_ok());
}
