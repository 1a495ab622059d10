//! Default handler building a `reqwest` transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;

use crate::config::schema::TransportSettings;
use crate::error::ApiResult;
use crate::http::{ApiRequest, ApiResponse};
use crate::transport::{HttpHandler, Transport};

/// Builds a [`ReqwestTransport`] from [`TransportSettings`].
#[derive(Debug, Clone, Default)]
pub struct DefaultHttpHandler {
    settings: TransportSettings,
}

impl DefaultHttpHandler {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }
}

impl HttpHandler for DefaultHttpHandler {
    fn create_transport(&self) -> ApiResult<Arc<dyn Transport>> {
        let settings = &self.settings;
        let redirect = if settings.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(settings.max_redirects)
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(settings.pool_idle_timeout_secs))
            .pool_max_idle_per_host(settings.pool_max_idle_per_host)
            .user_agent(settings.user_agent.clone())
            .redirect(redirect)
            .build()?;

        tracing::debug!(
            timeout_secs = settings.timeout_secs,
            user_agent = %settings.user_agent,
            "HTTP transport created"
        );
        Ok(Arc::new(ReqwestTransport::new(client)))
    }
}

/// Transport sending requests with a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let url = request.request_uri()?;
        let mut builder = self
            .client
            .request(request.method().clone(), url)
            .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.body(body.content.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(ApiResponse::new(status, headers, body))
    }
}
