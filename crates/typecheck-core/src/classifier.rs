//! Runtime type classification.
//!
//! Two views of a value:
//! - [`classify`] gives its semantic tag from the closed [`SupportedType`] set
//! - [`describe`] gives a structural descriptor, inferring a union element
//!   type for arrays (`Array<number | string>`)
//!
//! Both are total: every value has exactly one tag and one descriptor.

use indexmap::IndexSet;

use crate::patterns::DataChecks;
use crate::types::SupportedType;
use crate::value::Value;

/// Classify a value into its semantic type tag.
pub fn classify(value: &Value) -> SupportedType {
    match value {
        Value::Null => SupportedType::Null,
        Value::Array(_) => SupportedType::Array,
        Value::Undefined => SupportedType::Undefined,
        Value::Bool(_) => SupportedType::Boolean,
        Value::Number(_) => SupportedType::Number,
        Value::String(_) => SupportedType::String,
        Value::Function(_) => SupportedType::Function,
        Value::Symbol(_) => SupportedType::Symbol,
        Value::Date(_) => SupportedType::Date,
        Value::RegExp(_) => SupportedType::RegExp,
        Value::Map(_) => SupportedType::Map,
        Value::Set(_) => SupportedType::Set,
        Value::Object(_) => SupportedType::Object,
    }
}

/// Describe the structural type of a value.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("Array<{}>", element_type(items)),
        Value::Function(_) => "Function".to_string(),
        Value::Date(_) => "Date".to_string(),
        Value::RegExp(_) => "RegExp".to_string(),
        Value::Map(_) => "Map<any, any>".to_string(),
        Value::Set(_) => "Set<any>".to_string(),
        Value::Object(_) => "Record<string, any>".to_string(),
        other => classify(other).as_str().to_string(),
    }
}

/// Union of element descriptors, first-seen order, duplicates removed.
fn element_type(items: &[Value]) -> String {
    if items.is_empty() {
        return "any".to_string();
    }

    let unique: IndexSet<String> = items.iter().map(describe).collect();
    unique.into_iter().collect::<Vec<_>>().join(" | ")
}

/// Everything the classifier knows about one value.
#[derive(Debug, Clone)]
pub struct TypeAnalysis<'a> {
    /// Semantic tag
    pub kind: SupportedType,

    /// Structural descriptor
    pub descriptor: String,

    /// Format checks over the same value
    pub data: DataChecks<'a>,
}

/// Run every classifier view over `value`.
pub fn analyze(value: &Value) -> TypeAnalysis<'_> {
    TypeAnalysis {
        kind: classify(value),
        descriptor: describe(value),
        data: DataChecks::new(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Symbol};
    use chrono::Utc;
    use indexmap::IndexMap;
    use regex::Regex;

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&Value::from("hi")), SupportedType::String);
        assert_eq!(classify(&Value::from(42)), SupportedType::Number);
        assert_eq!(classify(&Value::from(f64::NAN)), SupportedType::Number);
        assert_eq!(classify(&Value::from(true)), SupportedType::Boolean);
        assert_eq!(classify(&Value::Undefined), SupportedType::Undefined);
        assert_eq!(classify(&Value::Null), SupportedType::Null);
        assert_eq!(
            classify(&Value::from(Function::new(|_| Value::Undefined))),
            SupportedType::Function
        );
        assert_eq!(classify(&Value::from(Symbol::new(None))), SupportedType::Symbol);
    }

    #[test]
    fn test_classify_objects() {
        assert_eq!(classify(&Value::Array(vec![])), SupportedType::Array);
        assert_eq!(classify(&Value::from(Utc::now())), SupportedType::Date);
        assert_eq!(
            classify(&Value::from(Regex::new("^a+$").unwrap())),
            SupportedType::RegExp
        );
        assert_eq!(classify(&Value::Map(vec![])), SupportedType::Map);
        assert_eq!(classify(&Value::Set(vec![])), SupportedType::Set);
        assert_eq!(classify(&Value::Object(IndexMap::new())), SupportedType::Object);
    }

    #[test]
    fn test_describe_primitives() {
        assert_eq!(describe(&Value::from("hi")), "string");
        assert_eq!(describe(&Value::from(1)), "number");
        assert_eq!(describe(&Value::from(false)), "boolean");
        assert_eq!(describe(&Value::Undefined), "undefined");
        assert_eq!(describe(&Value::Null), "null");
        assert_eq!(describe(&Value::from(Symbol::new(Some("s")))), "symbol");
        assert_eq!(
            describe(&Value::from(Function::new(|_| Value::Null))),
            "Function"
        );
    }

    #[test]
    fn test_describe_special_objects() {
        assert_eq!(describe(&Value::from(Utc::now())), "Date");
        assert_eq!(describe(&Value::from(Regex::new("x").unwrap())), "RegExp");
        assert_eq!(describe(&Value::Map(vec![])), "Map<any, any>");
        assert_eq!(describe(&Value::Set(vec![Value::from(1)])), "Set<any>");
        assert_eq!(
            describe(&Value::from(serde_json::json!({ "a": 1 }))),
            "Record<string, any>"
        );
    }

    #[test]
    fn test_describe_arrays() {
        assert_eq!(describe(&Value::Array(vec![])), "Array<any>");
        assert_eq!(
            describe(&Value::from(serde_json::json!([1, "a", true, 2, "b"]))),
            "Array<number | string | boolean>"
        );
        assert_eq!(
            describe(&Value::from(serde_json::json!([[1], [2, "x"], null]))),
            "Array<Array<number> | Array<number | string> | null>"
        );
    }

    #[test]
    fn test_analyze_bundles_every_view() {
        let value = Value::from("SW1A 1AA");
        let analysis = analyze(&value);
        assert_eq!(analysis.kind, SupportedType::String);
        assert_eq!(analysis.descriptor, "string");
        assert!(analysis.data.is_postcode());
        assert!(!analysis.data.is_email());
    }
}
