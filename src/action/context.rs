//! Per-call state threaded through parameter attributes.

use std::sync::Arc;

use crate::action::descriptor::ApiActionDescriptor;
use crate::action::parameter::ApiParameterDescriptor;
use crate::config::HttpApiConfig;
use crate::http::{ApiRequest, ApiResponse};

/// Mutable state of one call. Created per call and dropped after it.
#[derive(Debug)]
pub struct ApiActionContext {
    config: Arc<HttpApiConfig>,
    action: Arc<ApiActionDescriptor>,
    parameters: Arc<[ApiParameterDescriptor]>,
    request: ApiRequest,
    response: Option<ApiResponse>,
}

impl ApiActionContext {
    pub fn new(
        config: Arc<HttpApiConfig>,
        action: Arc<ApiActionDescriptor>,
        parameters: Arc<[ApiParameterDescriptor]>,
        request: ApiRequest,
    ) -> Self {
        Self {
            config,
            action,
            parameters,
            request,
            response: None,
        }
    }

    /// The shared configuration. Attributes only read from it.
    pub fn config(&self) -> &Arc<HttpApiConfig> {
        &self.config
    }

    pub fn action(&self) -> &Arc<ApiActionDescriptor> {
        &self.action
    }

    pub fn parameters(&self) -> &Arc<[ApiParameterDescriptor]> {
        &self.parameters
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut ApiRequest {
        &mut self.request
    }

    /// The response, once the transport has returned one.
    pub fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    pub fn response_mut(&mut self) -> Option<&mut ApiResponse> {
        self.response.as_mut()
    }

    pub fn set_response(&mut self, response: ApiResponse) {
        self.response = Some(response);
    }

    pub fn take_response(&mut self) -> Option<ApiResponse> {
        self.response.take()
    }
}
