//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every call produces:
//!     → a tracing span (action, method, request_id)
//!     → logging.rs (structured log events, binaries only)
//!     → metrics.rs (counter + latency histogram)
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the x-request-id header into the call span
//! - Metrics go through the `metrics` facade; exporting is the host's job

pub mod logging;
pub mod metrics;
