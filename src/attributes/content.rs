//! Parameters written to the request body.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::form_urlencoded;

use crate::action::{ApiActionContext, ApiParameterDescriptor};
use crate::attributes::ApiParameterAttribute;
use crate::error::ApiResult;
use crate::format::StringFormatter;
use crate::http::RequestBody;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Body serialized with the configured JSON formatter. Absent values send no body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentAttribute;

#[async_trait]
impl ApiParameterAttribute for JsonContentAttribute {
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        let formatter = context.config().json_formatter()?;
        set_formatted_body(context, parameter, formatter)
    }
}

/// Body serialized with the configured XML formatter. Absent values send no body.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlContentAttribute;

#[async_trait]
impl ApiParameterAttribute for XmlContentAttribute {
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        let formatter = context.config().xml_formatter()?;
        set_formatted_body(context, parameter, formatter)
    }
}

fn set_formatted_body(
    context: &mut ApiActionContext,
    parameter: &ApiParameterDescriptor,
    formatter: Arc<dyn StringFormatter>,
) -> ApiResult<()> {
    if parameter.is_absent() {
        return Ok(());
    }
    let text = formatter.serialize(parameter.value())?;
    let content_type = format!("{}; charset=utf-8", formatter.media_type());
    context.request_mut().set_body(RequestBody::new(content_type, text))
}

/// `application/x-www-form-urlencoded` body built from the key/value formatter.
///
/// Several form parameters on one action accumulate into a single body.
/// Absent values are sent as empty fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormContentAttribute;

#[async_trait]
impl ApiParameterAttribute for FormContentAttribute {
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        let pairs = context.config().key_value_formatter()?.serialize(parameter)?;

        let existing = existing_form(context);
        // Offset 0: a separator goes before each pair whenever text precedes it.
        let mut form = form_urlencoded::Serializer::for_suffix(existing, 0);
        for pair in &pairs {
            form.append_pair(&pair.key, pair.value.as_deref().unwrap_or(""));
        }
        let encoded = form.finish();

        context
            .request_mut()
            .set_body(RequestBody::new(FORM_URLENCODED, encoded))
    }
}

fn existing_form(context: &ApiActionContext) -> String {
    let request = context.request();
    let is_form = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with(FORM_URLENCODED))
        .unwrap_or(false);

    match request.body() {
        Some(body) if is_form => String::from_utf8_lossy(&body.content).into_owned(),
        _ => String::new(),
    }
}
