//! Default key/value serialization of parameters.
//!
//! # Rules
//! - `null` → one pair keyed by the parameter name, value absent
//! - scalar → one pair keyed by the parameter name
//! - array → one pair per element, keyed by the parameter name
//! - object (struct or string-keyed map) → one pair per member, in member
//!   order; array members repeat the member key, nested objects become
//!   compact JSON text

use serde_json::Value;

use crate::action::ApiParameterDescriptor;
use crate::error::ApiResult;
use crate::format::{KeyValue, KeyValueFormatter};

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyValueFormatter;

impl KeyValueFormatter for DefaultKeyValueFormatter {
    fn serialize(&self, parameter: &ApiParameterDescriptor) -> ApiResult<Vec<KeyValue>> {
        let mut pairs = Vec::new();
        match parameter.value() {
            Value::Object(members) => {
                for (key, value) in members {
                    push_member(&mut pairs, key, value)?;
                }
            }
            value => push_member(&mut pairs, parameter.name(), value)?,
        }
        Ok(pairs)
    }
}

fn push_member(pairs: &mut Vec<KeyValue>, key: &str, value: &Value) -> ApiResult<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                pairs.push(KeyValue {
                    key: key.to_string(),
                    value: scalar_text(item)?,
                });
            }
        }
        other => pairs.push(KeyValue {
            key: key.to_string(),
            value: scalar_text(other)?,
        }),
    }
    Ok(())
}

fn scalar_text(value: &Value) -> ApiResult<Option<String>> {
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(serde_json::to_string(nested)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    fn pairs_of<T: Serialize>(name: &str, value: &T) -> Vec<KeyValue> {
        let parameter = ApiParameterDescriptor::new(name, 0, value).unwrap();
        DefaultKeyValueFormatter.serialize(&parameter).unwrap()
    }

    #[test]
    fn test_scalar_uses_parameter_name() {
        assert_eq!(pairs_of("id", &42), vec![KeyValue::new("id", "42")]);
        assert_eq!(pairs_of("q", &"cats"), vec![KeyValue::new("q", "cats")]);
        assert_eq!(pairs_of("on", &true), vec![KeyValue::new("on", "true")]);
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(pairs_of("id", &None::<u32>), vec![KeyValue::absent("id")]);
    }

    #[test]
    fn test_struct_members_in_declaration_order() {
        #[derive(Serialize)]
        struct Search {
            q: String,
            page: u32,
            sort: Option<String>,
        }

        let pairs = pairs_of(
            "search",
            &Search {
                q: "cats".into(),
                page: 2,
                sort: None,
            },
        );
        assert_eq!(
            pairs,
            vec![
                KeyValue::new("q", "cats"),
                KeyValue::new("page", "2"),
                KeyValue::absent("sort"),
            ]
        );
    }

    #[test]
    fn test_map_entries() {
        let mut map = BTreeMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        assert_eq!(
            pairs_of("filters", &map),
            vec![KeyValue::new("a", "1"), KeyValue::new("b", "2")]
        );
    }

    #[test]
    fn test_collections_repeat_key() {
        assert_eq!(
            pairs_of("tag", &vec!["x", "y"]),
            vec![KeyValue::new("tag", "x"), KeyValue::new("tag", "y")]
        );

        #[derive(Serialize)]
        struct Filter {
            ids: Vec<u8>,
        }
        assert_eq!(
            pairs_of("filter", &Filter { ids: vec![1, 2] }),
            vec![KeyValue::new("ids", "1"), KeyValue::new("ids", "2")]
        );
    }

    #[test]
    fn test_nested_object_is_json_text() {
        #[derive(Serialize)]
        struct Inner {
            x: u8,
        }
        #[derive(Serialize)]
        struct Outer {
            inner: Inner,
        }
        assert_eq!(
            pairs_of("outer", &Outer { inner: Inner { x: 1 } }),
            vec![KeyValue::new("inner", r#"{"x":1}"#)]
        );
    }
}
