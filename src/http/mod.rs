//! HTTP message model shared by attributes and transports.
//!
//! # Data Flow
//! ```text
//! action descriptor + host
//!     → request.rs (ApiRequest with request ID)
//!     → [parameter attributes mutate path/query, headers, body]
//!     → transport sends request.request_uri()
//!     → response.rs (ApiResponse, fully buffered)
//! ```

pub mod request;
pub mod response;

pub use request::{ApiRequest, RequestBody, X_REQUEST_ID};
pub use response::ApiResponse;
