//! Parameter definitions and per-call parameter values.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::attributes::{ApiParameterAttribute, PathQueryAttribute};
use crate::error::ApiResult;

/// A declared parameter of an action: name, type and the one attribute that
/// decides how its value appears in the request.
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    name: String,
    type_name: &'static str,
    attribute: Arc<dyn ApiParameterAttribute>,
}

impl ParameterDefinition {
    /// A path/query parameter of type `T`.
    pub fn new<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::with_attribute::<T>(name, PathQueryAttribute)
    }

    pub fn with_attribute<T: ?Sized>(
        name: impl Into<String>,
        attribute: impl ApiParameterAttribute + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            attribute: Arc::new(attribute),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn attribute(&self) -> &dyn ApiParameterAttribute {
        self.attribute.as_ref()
    }
}

/// A parameter bound to its value for one call. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiParameterDescriptor {
    name: String,
    index: usize,
    value: Value,
    type_name: &'static str,
}

impl ApiParameterDescriptor {
    /// Bind `value`, recording `T` as the declared type.
    pub fn new<T: Serialize + ?Sized>(
        name: impl Into<String>,
        index: usize,
        value: &T,
    ) -> ApiResult<Self> {
        Ok(Self {
            name: name.into(),
            index,
            value: serde_json::to_value(value)?,
            type_name: std::any::type_name::<T>(),
        })
    }

    pub fn from_value(
        name: impl Into<String>,
        index: usize,
        value: Value,
        type_name: &'static str,
    ) -> Self {
        Self {
            name: name.into(),
            index,
            value,
            type_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the parameter in the action's declaration.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_null()
    }
}
