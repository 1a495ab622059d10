//! XML formatter backed by `quick-xml`'s serde support.

use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::format::StringFormatter;

/// Key under which `quick-xml` places an element's character content.
const TEXT_KEY: &str = "$text";

/// Writes values as a single XML document under a configurable root element.
///
/// Reading back yields an object per element. Text-only elements become
/// strings, and attributes keep their `@name` keys. Element text carries no
/// type information, so `<age>3</age>` reads back as the string `"3"`.
#[derive(Debug, Clone)]
pub struct XmlFormatter {
    root: String,
}

impl XmlFormatter {
    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

impl Default for XmlFormatter {
    fn default() -> Self {
        Self::with_root("root")
    }
}

impl StringFormatter for XmlFormatter {
    fn serialize(&self, value: &Value) -> ApiResult<String> {
        quick_xml::se::to_string_with_root(&self.root, value)
            .map_err(|e| ApiError::Serialization(format!("XML: {}", e)))
    }

    fn deserialize(&self, text: &str) -> ApiResult<Value> {
        let value: Value = quick_xml::de::from_str(text)
            .map_err(|e| ApiError::Serialization(format!("XML: {}", e)))?;
        Ok(flatten_text(value))
    }

    fn media_type(&self) -> &'static str {
        "application/xml"
    }
}

/// Collapse `{"$text": v}` wrappers into `v`, recursively.
fn flatten_text(value: Value) -> Value {
    match value {
        Value::Object(members) => {
            if members.len() == 1 && members.contains_key(TEXT_KEY) {
                return members
                    .into_iter()
                    .next()
                    .map_or(Value::Null, |(_, text)| flatten_text(text));
            }
            Value::Object(
                members
                    .into_iter()
                    .map(|(key, member)| (key, flatten_text(member)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(flatten_text).collect()),
        other => other,
    }
}
