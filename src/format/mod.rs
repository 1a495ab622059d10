//! Formatters turning parameter values into request text.
//!
//! # Data Flow
//! ```text
//! ApiParameterDescriptor (serde_json::Value)
//!     → key_value.rs (ordered key/value pairs for path, query, form)
//!     → json.rs / xml.rs (body text)
//!
//! Response body
//!     → json.rs / xml.rs (serde_json::Value)
//!     → typed result
//! ```
//!
//! # Design Decisions
//! - Values travel as `serde_json::Value` so formatters stay object safe
//! - Defaults live in an explicit `FormatterRegistry`; one process-wide
//!   instance backs `HttpApiConfig::new`, but any registry can be supplied

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::action::ApiParameterDescriptor;
use crate::error::ApiResult;

pub mod json;
pub mod key_value;
pub mod xml;

pub use json::JsonFormatter;
pub use key_value::DefaultKeyValueFormatter;
pub use xml::XmlFormatter;

/// One serialized key with an optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Option<String>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A key whose value is absent.
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Serializes a parameter into ordered key/value pairs.
pub trait KeyValueFormatter: Send + Sync + fmt::Debug {
    fn serialize(&self, parameter: &ApiParameterDescriptor) -> ApiResult<Vec<KeyValue>>;
}

/// Converts values to and from a text wire format.
pub trait StringFormatter: Send + Sync + fmt::Debug {
    fn serialize(&self, value: &Value) -> ApiResult<String>;

    fn deserialize(&self, text: &str) -> ApiResult<Value>;

    /// Media type used for request bodies produced by this formatter.
    fn media_type(&self) -> &'static str;
}

/// The set of formatters a configuration starts from.
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    pub xml: Arc<dyn StringFormatter>,
    pub json: Arc<dyn StringFormatter>,
    pub key_value: Arc<dyn KeyValueFormatter>,
}

impl FormatterRegistry {
    /// Fresh default formatter instances.
    pub fn new() -> Self {
        Self {
            xml: Arc::new(XmlFormatter::default()),
            json: Arc::new(JsonFormatter),
            key_value: Arc::new(DefaultKeyValueFormatter),
        }
    }

    /// The process-wide defaults, created on first use.
    pub fn shared() -> &'static FormatterRegistry {
        static SHARED: OnceLock<FormatterRegistry> = OnceLock::new();
        SHARED.get_or_init(FormatterRegistry::new)
    }

    pub fn with_xml(mut self, formatter: Arc<dyn StringFormatter>) -> Self {
        self.xml = formatter;
        self
    }

    pub fn with_json(mut self, formatter: Arc<dyn StringFormatter>) -> Self {
        self.json = formatter;
        self
    }

    pub fn with_key_value(mut self, formatter: Arc<dyn KeyValueFormatter>) -> Self {
        self.key_value = formatter;
        self
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_registry_is_single_instance() {
        let a = FormatterRegistry::shared();
        let b = FormatterRegistry::shared();
        assert!(Arc::ptr_eq(&a.json, &b.json));
        assert!(Arc::ptr_eq(&a.key_value, &b.key_value));
    }

    #[test]
    fn test_override_only_one_slot() {
        let shared = FormatterRegistry::shared();
        let custom = shared.clone().with_json(Arc::new(JsonFormatter));

        assert!(!Arc::ptr_eq(&custom.json, &shared.json));
        assert!(Arc::ptr_eq(&custom.xml, &shared.xml));
        assert!(Arc::ptr_eq(&custom.key_value, &shared.key_value));
    }
}
