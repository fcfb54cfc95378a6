//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_forward_requests_total` (counter): forwarded calls by outcome, status
//! - `api_forward_duration_seconds` (histogram): outbound round-trip latency
//! - `api_history_appends_total` (counter): ledger appends
//! - `api_history_evictions_total` (counter): entries evicted by the cap
//! - `api_account_events_total` (counter): register/login outcomes
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a forwarded call. `status` is `None` for transport failures.
pub fn record_forward(status: Option<u16>, start: Instant) {
    let (outcome, status) = match status {
        Some(code) => ("relayed", code.to_string()),
        None => ("transport_failure", "none".to_string()),
    };
    counter!("api_forward_requests_total", "outcome" => outcome, "status" => status).increment(1);
    histogram!("api_forward_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_history_append() {
    counter!("api_history_appends_total").increment(1);
}

pub fn record_history_eviction() {
    counter!("api_history_evictions_total").increment(1);
}

/// `event` is e.g. "registered", "duplicate", "login", "login_failed".
pub fn record_account_event(event: &'static str) {
    counter!("api_account_events_total", "event" => event).increment(1);
}
