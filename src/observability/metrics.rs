//! Metrics collection.
//!
//! # Metrics
//! - `webapi_requests_total` (counter): calls by action, method, status
//! - `webapi_request_duration_seconds` (histogram): call latency
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op
//! - Failed calls are labelled `status="error"`

use std::time::Instant;

/// Record one completed call.
pub fn record_request(action: &str, method: &str, status: Option<u16>, start: Instant) {
    let status = status.map_or_else(|| "error".to_string(), |s| s.to_string());

    metrics::counter!(
        "webapi_requests_total",
        "action" => action.to_string(),
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "webapi_request_duration_seconds",
        "action" => action.to_string(),
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
