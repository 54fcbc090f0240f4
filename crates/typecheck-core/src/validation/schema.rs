//! Validation schemas: field name to validator.

use indexmap::IndexMap;

use super::validator::Validator;

/// The fields to check and how to check each one.
///
/// Field names are unique; inserting a name twice replaces the earlier
/// validator. Iteration follows insertion order, which is the order of every
/// result and report produced from the schema.
#[derive(Debug, Default)]
pub struct ValidationSchema {
    fields: IndexMap<String, Validator>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn field(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.insert(name, validator);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, validator: Validator) -> Option<Validator> {
        self.fields.insert(name.into(), validator)
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.fields.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Validator)> for ValidationSchema {
    fn from_iter<I: IntoIterator<Item = (K, Validator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
