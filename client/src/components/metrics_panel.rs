//! Metric cards for the dashboard header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the mirrored poller snapshot and health status; the poller itself is
//! owned by the dashboard page.

use leptos::prelude::*;

use crate::net::types::MetricsSnapshot;
use crate::state::health::HealthStatus;

#[component]
pub fn MetricsPanel(snapshot: RwSignal<MetricsSnapshot>, health: RwSignal<HealthStatus>) -> impl IntoView {
    let db_size = move || format!("{:.2} MB", snapshot.get().db_file_size_mb);
    let memory = move || format!("{:.1}%", snapshot.get().memory_percent);
    let disk = move || format!("{:.1}%", snapshot.get().disk_percent);
    let uptime = move || format!("{} hrs", snapshot.get().uptime_hours());

    let health_class = move || health_badge_class(health.get());
    let health_label = move || health.get().label();

    view! {
        <section class="metrics-panel">
            <div class="metrics-panel__header">
                <h2>"System Metrics"</h2>
                <span class=health_class>"Backend " {health_label}</span>
            </div>
            <div class="metrics-panel__cards">
                <MetricCard label="DB Size" value=Signal::derive(db_size) />
                <MetricCard label="Memory" value=Signal::derive(memory) />
                <MetricCard label="Disk" value=Signal::derive(disk) />
                <MetricCard label="Uptime" value=Signal::derive(uptime) />
            </div>
        </section>
    }
}

#[component]
fn MetricCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{move || value.get()}</span>
        </div>
    }
}

fn health_badge_class(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Unknown => "health-badge",
        HealthStatus::Healthy => "health-badge health-badge--ok",
        HealthStatus::Unreachable => "health-badge health-badge--down",
    }
}
