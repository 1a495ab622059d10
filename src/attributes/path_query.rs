//! Path template substitution and query-string append.
//!
//! # Responsibilities
//! - Serialize the parameter with the configured key/value formatter
//! - Fill `{key}` placeholders, append everything else as `key=value`
//! - Write the merged path+query back, keeping scheme/host/authority
//!
//! # Design Decisions
//! - Pairs are merged strictly in order: a placeholder consumed by an earlier
//!   pair is gone for a later pair with the same key, which then appends
//! - Duplicate keys are never collapsed
//! - Placeholder matching is case-insensitive; other braces are untouched
//! - No regex: placeholders are literal text
//! - No escaping or URI validation here; `ApiRequest` validates the result

use async_trait::async_trait;

use crate::action::{ApiActionContext, ApiParameterDescriptor};
use crate::attributes::ApiParameterAttribute;
use crate::error::ApiResult;
use crate::format::KeyValue;

/// Represents a parameter as a path placeholder value or a query parameter.
///
/// This is the attribute used for parameters that declare none.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathQueryAttribute;

#[async_trait]
impl ApiParameterAttribute for PathQueryAttribute {
    async fn before_request(
        &self,
        context: &mut ApiActionContext,
        parameter: &ApiParameterDescriptor,
    ) -> ApiResult<()> {
        let pairs = context.config().key_value_formatter()?.serialize(parameter)?;
        let merged = merge_path_query(context.request().path_query(), &pairs);
        context.request_mut().set_path_query(merged)
    }
}

/// Merge key/value pairs into a relative URL.
///
/// Trailing `&`/`?` are trimmed first. Each pair then either replaces every
/// `{key}` occurrence (case-insensitive) or is appended as `key=value`, using
/// `?` when the URL has no query yet and `&` otherwise. Absent values become
/// empty strings.
pub fn merge_path_query(relative_url: &str, pairs: &[KeyValue]) -> String {
    let mut url = relative_url.trim_end_matches(['&', '?']).to_string();
    for pair in pairs {
        url = merge_pair(url, pair);
    }
    url
}

fn merge_pair(url: String, pair: &KeyValue) -> String {
    let value = pair.value.as_deref().unwrap_or("");
    let placeholder = format!("{{{}}}", pair.key);

    if let Some(substituted) = replace_placeholder(&url, &placeholder, value) {
        return substituted;
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, pair.key, value)
}

/// Replace every case-insensitive occurrence, or `None` when there is none.
fn replace_placeholder(url: &str, placeholder: &str, value: &str) -> Option<String> {
    let mut rest = url;
    let mut out = String::with_capacity(url.len());
    let mut found = false;

    while let Some((start, end)) = find_ignore_case(rest, placeholder) {
        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &rest[end..];
        found = true;
    }

    if !found {
        return None;
    }
    out.push_str(rest);
    Some(out)
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(start, _)| {
        match_len(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

/// Byte length of the prefix of `text` matching `needle`, if it matches.
fn match_len(text: &str, needle: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in needle.chars() {
        let (_, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(idx, _)| idx))
}
