//! Error definitions for the request pipeline.

use thiserror::Error;

/// Errors that can occur while composing, sending or decoding a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The merged path/query could not be resolved against the host.
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The merged path/query resolved to a different scheme, host or port.
    #[error("Request URL '{url}' leaves host '{host}'")]
    ForeignHost { url: String, host: String },

    /// Neither the configuration nor the action supplied a host.
    #[error("No HTTP host configured for action '{0}'")]
    MissingHost(String),

    /// The configuration (or a transport handle it owned) has been disposed.
    #[error("HTTP API configuration has been disposed")]
    Disposed,

    /// The underlying HTTP transport failed.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A formatter other than JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A header name or value was rejected.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The number of call arguments does not match the action's parameters.
    #[error("Action '{action}' expects {expected} arguments, got {actual}")]
    ArgumentCount {
        action: String,
        expected: usize,
        actual: usize,
    },

    /// An attribute took the response out of the context.
    #[error("Response of action '{0}' was consumed by a parameter attribute")]
    ResponseConsumed(String),

    /// The response status was not a success when a typed result was requested.
    #[error("Unexpected response status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type for pipeline operations.
pub type ApiResult<T> = Result<T, ApiError>;
