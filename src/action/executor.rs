//! Call execution.
//!
//! # Responsibilities
//! - Resolve the host (configuration first, then the action's default)
//! - Build the request and bind arguments into parameter descriptors
//! - Run `before_request` hooks, send, run `after_request` hooks
//! - Decode typed results through the configured formatters
//!
//! # Design Decisions
//! - Hooks run sequentially in declaration order; the first error aborts the
//!   call and the transport is never reached
//! - No retries and no timeouts here; both belong to the transport

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::Instrument;

use crate::action::context::ApiActionContext;
use crate::action::descriptor::ApiActionDescriptor;
use crate::config::HttpApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse};
use crate::observability::metrics;

/// Executes actions against a shared [`HttpApiConfig`].
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    config: Arc<HttpApiConfig>,
    metrics_enabled: bool,
}

impl HttpApiClient {
    pub fn new(config: Arc<HttpApiConfig>) -> Self {
        Self {
            config,
            metrics_enabled: true,
        }
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn config(&self) -> &Arc<HttpApiConfig> {
        &self.config
    }

    /// Run one call and return the raw response.
    pub async fn execute(
        &self,
        action: &Arc<ApiActionDescriptor>,
        arguments: Vec<Value>,
    ) -> ApiResult<ApiResponse> {
        let start = Instant::now();
        let result = match self.prepare(action, arguments) {
            Ok(mut context) => {
                let span = tracing::info_span!(
                    "api_call",
                    action = %action.name(),
                    method = %action.method(),
                    request_id = %context.request().request_id(),
                );
                run(&mut context).instrument(span).await
            }
            Err(e) => {
                tracing::warn!(action = %action.name(), error = %e, "Call could not be prepared");
                Err(e)
            }
        };

        if self.metrics_enabled {
            let status = result.as_ref().ok().map(|r| r.status.as_u16());
            metrics::record_request(action.name(), action.method().as_str(), status, start);
        }
        result
    }

    /// Run one call and decode a successful JSON response into `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        action: &Arc<ApiActionDescriptor>,
        arguments: Vec<Value>,
    ) -> ApiResult<T> {
        let response = self.execute(action, arguments).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.text(),
            });
        }

        let value = self.config.json_formatter()?.deserialize(&response.text())?;
        Ok(serde_json::from_value(value)?)
    }

    fn prepare(
        &self,
        action: &Arc<ApiActionDescriptor>,
        arguments: Vec<Value>,
    ) -> ApiResult<ApiActionContext> {
        let host = self
            .config
            .http_host()
            .or_else(|| action.host().cloned())
            .ok_or_else(|| ApiError::MissingHost(action.name().to_string()))?;

        let mut request = ApiRequest::new(action.method().clone(), host, action.path())?;
        for (name, value) in action.headers() {
            request.set_header(name, value)?;
        }

        let parameters = action.bind(arguments)?;
        Ok(ApiActionContext::new(
            self.config.clone(),
            action.clone(),
            parameters.into(),
            request,
        ))
    }
}

async fn run(context: &mut ApiActionContext) -> ApiResult<ApiResponse> {
    let action = context.action().clone();
    let parameters = context.parameters().clone();
    let bound = action.parameters().iter().zip(parameters.iter());

    for (definition, parameter) in bound.clone() {
        if let Err(e) = definition.attribute().before_request(context, parameter).await {
            tracing::warn!(parameter = %parameter.name(), error = %e, "before_request hook failed");
            return Err(e);
        }
    }

    let transport = context.config().transport()?;
    tracing::debug!(uri = %context.request().request_uri()?, "Sending request");
    let response = transport.send(context.request()).await?;
    tracing::debug!(status = %response.status, "Response received");
    context.set_response(response);

    for (definition, parameter) in bound {
        if let Err(e) = definition.attribute().after_request(context, parameter).await {
            tracing::warn!(parameter = %parameter.name(), error = %e, "after_request hook failed");
            return Err(e);
        }
    }

    context
        .take_response()
        .ok_or_else(|| ApiError::ResponseConsumed(action.name().to_string()))
}
