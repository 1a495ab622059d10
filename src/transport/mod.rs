//! Transport boundary.
//!
//! # Data Flow
//! ```text
//! HttpApiConfig
//!     → HttpHandler::create_transport (once, lazily)
//!     → HttpClient (shared handle, closed on dispose)
//!     → Transport::send(&ApiRequest) → ApiResponse
//! ```
//!
//! # Design Decisions
//! - The pipeline only sees `dyn Transport`; reqwest is the default, not a requirement
//! - Closing a handle drops the transport it owns; sends after close fail with `Disposed`

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse};

pub mod default_handler;

pub use default_handler::{DefaultHttpHandler, ReqwestTransport};

/// Sends a composed request over the network.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse>;
}

/// Factory for the transport a configuration shares.
pub trait HttpHandler: Send + Sync + fmt::Debug {
    fn create_transport(&self) -> ApiResult<Arc<dyn Transport>>;
}

/// Shared transport handle owned by an `HttpApiConfig`.
#[derive(Debug)]
pub struct HttpClient {
    transport: RwLock<Option<Arc<dyn Transport>>>,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: RwLock::new(Some(transport)),
        }
    }

    pub async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        // Clone out of the lock; the guard must not live across the await.
        let transport = self.transport.read().clone().ok_or(ApiError::Disposed)?;
        transport.send(request).await
    }

    /// Release the transport. Returns `false` if it was already released.
    pub fn close(&self) -> bool {
        self.transport.write().take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.transport.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::{Method, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use url::Url;

    #[derive(Debug)]
    struct DropCounting(Arc<AtomicUsize>);

    impl Drop for DropCounting {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Transport for DropCounting {
        async fn send(&self, _request: &ApiRequest) -> ApiResult<ApiResponse> {
            Ok(ApiResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), Vec::new()))
        }
    }

    fn request() -> ApiRequest {
        ApiRequest::new(Method::GET, Url::parse("http://localhost").unwrap(), "/").unwrap()
    }

    #[tokio::test]
    async fn test_close_releases_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let client = HttpClient::new(Arc::new(DropCounting(drops.clone())));

        let res = client.send(&request()).await.unwrap();
        assert_eq!(res.status, StatusCode::NO_CONTENT);

        assert!(client.close());
        assert!(!client.close());
        assert!(client.is_closed());
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        let err = client.send(&request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Disposed));
    }
}
