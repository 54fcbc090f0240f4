//! Semantic type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of semantic type tags.
///
/// Produced by [`classify`](crate::classify) and used as the declared type of
/// a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedType {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Array,
    Function,
    Symbol,
    Undefined,
    Null,
    RegExp,
    Map,
    Set,
}

impl SupportedType {
    /// Every tag, in declaration order.
    pub const ALL: [SupportedType; 13] = [
        SupportedType::String,
        SupportedType::Number,
        SupportedType::Boolean,
        SupportedType::Date,
        SupportedType::Object,
        SupportedType::Array,
        SupportedType::Function,
        SupportedType::Symbol,
        SupportedType::Undefined,
        SupportedType::Null,
        SupportedType::RegExp,
        SupportedType::Map,
        SupportedType::Set,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SupportedType::String => "string",
            SupportedType::Number => "number",
            SupportedType::Boolean => "boolean",
            SupportedType::Date => "date",
            SupportedType::Object => "object",
            SupportedType::Array => "array",
            SupportedType::Function => "function",
            SupportedType::Symbol => "symbol",
            SupportedType::Undefined => "undefined",
            SupportedType::Null => "null",
            SupportedType::RegExp => "regexp",
            SupportedType::Map => "map",
            SupportedType::Set => "set",
        }
    }

    /// Whether values of this type can be measured by length rules.
    pub fn has_length(self) -> bool {
        matches!(self, SupportedType::String | SupportedType::Array)
    }

    /// Whether values of this type can be compared by value rules.
    pub fn is_numeric(self) -> bool {
        matches!(self, SupportedType::Number | SupportedType::Date)
    }
}

impl fmt::Display for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type name outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported type: {0}")]
pub struct ParseTypeError(pub String);

/// Parses the exact lower-case tag name.
impl FromStr for SupportedType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportedType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}
