//! Parameter sent as a request header.

use async_trait::async_trait;

use crate::action::{ApiActionContext, ApiParameterDescriptor};
use crate::attributes::ApiParameterAttribute;
use crate::error::ApiResult;

/// Sends the parameter value as a header.
///
/// Scalars become the header value; collections are joined with `", "`.
/// An absent value sends no header.
#[derive(Debug, Clone, Default)]
pub struct HeaderAttribute {
    name: Option<String>,
}

impl HeaderAttribute {
    /// Header named after the parameter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header with an explicit name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[async_trait]
impl ApiParameterAttribute for HeaderAttribute {
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        let pairs = context.config().key_value_formatter()?.serialize(parameter)?;
        let values: Vec<String> = pairs.into_iter().filter_map(|pair| pair.value).collect();
        if values.is_empty() {
            return Ok(());
        }

        let name = self.name.as_deref().unwrap_or(parameter.name());
        context.request_mut().set_header(name, &values.join(", "))
    }
}
