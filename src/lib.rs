//! Declarative HTTP request composition.
//!
//! An [`ApiActionDescriptor`] declares an operation (method, path template,
//! parameters); each parameter carries one [`attributes::ApiParameterAttribute`]
//! that writes its value into the outbound request. A shared
//! [`HttpApiConfig`] owns the long-lived resources every call uses: the
//! transport, the formatters and the base host.
//!
//! ```text
//! HttpApiClient::execute(action, args)
//!     → ApiActionContext (request + Arc<HttpApiConfig>)
//!     → before_request hooks, in parameter order
//!     → HttpApiConfig::transport() → Transport::send
//!     → after_request hooks
//!     → ApiResponse / typed result
//! ```

pub mod action;
pub mod attributes;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod observability;
pub mod transport;

pub use action::{ApiActionContext, ApiActionDescriptor, ApiParameterDescriptor, HttpApiClient};
pub use attributes::{merge_path_query, ApiParameterAttribute, PathQueryAttribute};
pub use config::{ClientSettings, HttpApiConfig};
pub use error::{ApiError, ApiResult};
pub use format::{FormatterRegistry, KeyValue};
pub use http::{ApiRequest, ApiResponse};
pub use transport::{HttpClient, HttpHandler, Transport};
