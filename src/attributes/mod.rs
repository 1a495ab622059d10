//! Parameter attributes.
//!
//! # Data Flow
//! ```text
//! ApiActionContext + ApiParameterDescriptor
//!     → before_request (path/query, header, body)
//!     → [transport sends request]
//!     → after_request (optional inspection)
//! ```
//!
//! # Design Decisions
//! - Exactly one attribute decides how a parameter appears in the request
//! - Parameters without an explicit attribute use `PathQueryAttribute`
//! - Hooks run in parameter declaration order, one at a time
//! - A hook error aborts the call; nothing is swallowed or retried

use std::fmt;

use async_trait::async_trait;

use crate::action::{ApiActionContext, ApiParameterDescriptor};
use crate::error::ApiResult;

pub mod content;
pub mod header;
pub mod path_query;

pub use content::{FormContentAttribute, JsonContentAttribute, XmlContentAttribute};
pub use header::HeaderAttribute;
pub use path_query::{merge_path_query, PathQueryAttribute};

/// Capability attached to a call parameter.
///
/// Implementations must accept an absent (`null`) value and treat it as
/// empty unless they document otherwise.
#[async_trait]
pub trait ApiParameterAttribute: Send + Sync + fmt::Debug {
    /// Contribute the parameter to the outbound request.
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()>;

    /// Inspect the call once a response is available.
    async fn after_request(
        &self,
        _context: &mut ApiActionContext,
        _parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        Ok(())
    }
}
