//! Static description of one API operation.

use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::action::parameter::{ApiParameterDescriptor, ParameterDefinition};
use crate::attributes::ApiParameterAttribute;
use crate::error::{ApiError, ApiResult};

/// Method, path template, default host, static headers and parameters of an
/// operation. Built once and shared by every call.
#[derive(Debug, Clone)]
pub struct ApiActionDescriptor {
    name: String,
    method: Method,
    path: String,
    host: Option<Url>,
    headers: Vec<(String, String)>,
    parameters: Vec<ParameterDefinition>,
}

impl ApiActionDescriptor {
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            host: None,
            headers: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Host used when the configuration does not set one.
    pub fn with_host(mut self, host: Url) -> Self {
        self.host = Some(host);
        self
    }

    /// Header sent with every call of this action.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append a path/query parameter.
    pub fn parameter<T: ?Sized>(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterDefinition::new::<T>(name));
        self
    }

    /// Append a parameter handled by `attribute`.
    pub fn parameter_with<T: ?Sized>(
        mut self,
        name: impl Into<String>,
        attribute: impl ApiParameterAttribute + 'static,
    ) -> Self {
        self.parameters
            .push(ParameterDefinition::with_attribute::<T>(name, attribute));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> Option<&Url> {
        self.host.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    /// Bind call arguments to the declared parameters, in order.
    pub fn bind(&self, arguments: Vec<Value>) -> ApiResult<Vec<ApiParameterDescriptor>> {
        if arguments.len() != self.parameters.len() {
            return Err(ApiError::ArgumentCount {
                action: self.name.clone(),
                expected: self.parameters.len(),
                actual: arguments.len(),
            });
        }

        Ok(self
            .parameters
            .iter()
            .zip(arguments)
            .enumerate()
            .map(|(index, (definition, value))| {
                ApiParameterDescriptor::from_value(
                    definition.name(),
                    index,
                    value,
                    definition.type_name(),
                )
            })
            .collect())
    }
}
