//! The model: field name to value, as handed in by the caller.

use indexmap::IndexMap;
use thiserror::Error;

use crate::classifier::classify;
use crate::types::SupportedType;
use crate::value::Value;

static UNDEFINED: Value = Value::Undefined;

/// Errors from building a model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Model must be an object, found {0}")]
    NotAnObject(SupportedType),
}

/// Field values keyed by name, in insertion order.
///
/// Looking up a field the model does not carry yields `undefined`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    fields: IndexMap<String, Value>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a JSON object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, ModelError> {
        match Value::from(json) {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ModelError::NotAnObject(classify(&other))),
        }
    }

    /// Add a field, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Value of `field`, or `undefined` when absent.
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&UNDEFINED)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Model {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
