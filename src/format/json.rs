//! JSON formatter.

use serde_json::Value;

use crate::error::ApiResult;
use crate::format::StringFormatter;

/// Compact JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl StringFormatter for JsonFormatter {
    fn serialize(&self, value: &Value) -> ApiResult<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn deserialize(&self, text: &str) -> ApiResult<Value> {
        Ok(serde_json::from_str(text)?)
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;

    #[test]
    fn test_member_order_is_kept() {
        let value = json!({ "name": "cat", "age": 3 });
        assert_eq!(JsonFormatter.serialize(&value).unwrap(), r#"{"name":"cat","age":3}"#);
    }

    #[test]
    fn test_deserialize_error() {
        let err = JsonFormatter.deserialize("{").unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
