//! Declarative field validation.
//!
//! A schema maps field names to validators; a validator is an ordered list of
//! rules attached through a fluent builder. Schemas are evaluated against a
//! model either as pass/fail results or as a full per-rule report.

mod evaluate;
mod rule;
mod schema;
mod type_field;
mod validator;

pub use evaluate::{
    evaluate_schema, validate_schema, EvaluateReport, FieldReport, RuleStatus, SchemaResults,
};
pub use rule::{Predicate, Rule, RuleError, RuleKind, RuleParams};
pub use schema::ValidationSchema;
pub use type_field::{infer_field, type_field, TypeFieldError, TypeTag};
pub use validator::{RuleOutcome, ValidationResult, Validator};
