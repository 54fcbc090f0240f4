//! # typecheck-core
//!
//! Runtime type classification and declarative field validation.
//!
//! This crate answers two questions about loosely typed data:
//! - What is this value? ([`classify`], [`describe`], [`data_checks`])
//! - Does this model satisfy its schema? ([`validate_schema`],
//!   [`evaluate_schema`])
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same schema and model always produce the same result
//! 2. **Ordered**: Rules run, and report, in the order they were declared
//! 3. **Total reports**: `evaluate_schema` covers every rule kind of every
//!    schema and model field
//! 4. **Thread-safe**: Schemas are `Send + Sync` and only ever borrowed
//!
//! ## Example
//!
//! ```rust,ignore
//! use typecheck_core::{type_field, validate_schema, Model, ValidationSchema};
//!
//! let schema = ValidationSchema::new()
//!     .field("name", type_field("string")?
//!         .required("Name is required.")
//!         .max_length(10, "Name is too long.")?)
//!     .field("email", type_field("string")?.is_email("Email is invalid."));
//!
//! let model = Model::new().with("name", "Ada").with("email", "ada@example.com");
//! let results = validate_schema(&schema, &model)?;
//! assert!(results["name"].valid);
//! ```

pub mod classifier;
pub mod model;
pub mod patterns;
pub mod types;
pub mod validation;
pub mod value;

// Re-export main types at crate root
pub use classifier::{analyze, classify, describe, TypeAnalysis};
pub use model::{Model, ModelError};
pub use patterns::{data_checks, DataChecks};
pub use types::{ParseTypeError, SupportedType};
pub use validation::{
    evaluate_schema, infer_field, type_field, validate_schema, EvaluateReport, FieldReport,
    Predicate, Rule, RuleError, RuleKind, RuleOutcome, RuleParams, RuleStatus, SchemaResults,
    TypeFieldError, TypeTag, ValidationResult, ValidationSchema, Validator,
};
pub use value::{Function, Symbol, Value};

use thiserror::Error;

/// Errors that can occur while declaring or evaluating a schema
#[derive(Error, Debug)]
pub enum Error {
    #[error("Type field error: {0}")]
    TypeField(#[from] TypeFieldError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}
