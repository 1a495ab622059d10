//! Outbound request representation.
//!
//! # Responsibilities
//! - Hold the method, host, relative path+query, headers and body of one call
//! - Stamp every request with a unique request ID
//! - Reconstitute the absolute request URI from host + path/query
//!
//! # Design Decisions
//! - The path+query is kept as raw text so `{placeholder}` templates survive
//!   until attributes have filled them; `url::Url` would percent-encode braces
//! - Every change to the path+query is validated immediately, so a malformed
//!   URL surfaces where it was produced
//! - A path+query that would move the request to another scheme, host or port
//!   (`//other.host/..`, `http://other.host/..`) is rejected

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request body with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: String,
    pub content: Bytes,
}

impl RequestBody {
    pub fn new(content_type: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
        }
    }
}

/// The in-flight request built by parameter attributes.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    host: Url,
    path_query: String,
    headers: HeaderMap,
    body: Option<RequestBody>,
    request_id: Uuid,
}

impl ApiRequest {
    /// Create a request for `path_query` relative to `host`.
    ///
    /// The template is resolved once up front so an unusable template is
    /// rejected before any attribute runs.
    pub fn new(method: Method, host: Url, path_query: impl Into<String>) -> ApiResult<Self> {
        let path_query = path_query.into();
        resolve(&host, &path_query)?;

        let request_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        // A UUID is always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            headers.insert(X_REQUEST_ID, value);
        }

        Ok(Self {
            method,
            host,
            path_query,
            headers,
            body: None,
            request_id,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Scheme, host and authority the path+query is resolved against.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// The relative path+query, possibly still containing placeholders.
    pub fn path_query(&self) -> &str {
        &self.path_query
    }

    /// Replace the path+query, keeping scheme/host/authority.
    pub fn set_path_query(&mut self, path_query: impl Into<String>) -> ApiResult<()> {
        let path_query = path_query.into();
        resolve(&self.host, &path_query)?;
        self.path_query = path_query;
        Ok(())
    }

    /// The absolute URI this request will be sent to.
    pub fn request_uri(&self) -> ApiResult<Url> {
        resolve(&self.host, &self.path_query)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Insert a header, replacing any previous value.
    pub fn set_header(&mut self, name: &str, value: &str) -> ApiResult<()> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Set the body and its `Content-Type` header.
    pub fn set_body(&mut self, body: RequestBody) -> ApiResult<()> {
        let content_type =
            HeaderValue::from_str(&body.content_type).map_err(|e| ApiError::InvalidHeader {
                name: CONTENT_TYPE.to_string(),
                reason: e.to_string(),
            })?;
        self.headers.insert(CONTENT_TYPE, content_type);
        self.body = Some(body);
        Ok(())
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

/// Resolve `path_query` under `host`. Only path and query may change.
fn resolve(host: &Url, path_query: &str) -> ApiResult<Url> {
    let url = host.join(path_query).map_err(|source| ApiError::InvalidUrl {
        url: path_query.to_string(),
        source,
    })?;
    if url.origin() != host.origin() {
        return Err(ApiError::ForeignHost {
            url: url.to_string(),
            host: host.to_string(),
        });
    }
    Ok(url)
}
