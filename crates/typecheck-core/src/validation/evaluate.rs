//! Schema evaluation.
//!
//! Two modes over the same schema and model:
//! - [`validate_schema`]: pass/fail plus ordered failure messages per field
//! - [`evaluate_schema`]: the status of every rule kind per field, declared or
//!   not, for every field of the schema and of the model
//!
//! Both borrow the schema and the model; neither is modified.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Model;

use super::rule::{RuleError, RuleKind, RuleParams};
use super::schema::ValidationSchema;
use super::validator::ValidationResult;

/// Per-field verdicts from [`validate_schema`], in schema order.
pub type SchemaResults = IndexMap<String, ValidationResult>;

/// Per-field introspection from [`evaluate_schema`].
pub type EvaluateReport = IndexMap<String, FieldReport>;

/// Status of one declared rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStatus {
    /// Rule parameters, flattened into the status
    #[serde(flatten)]
    pub params: Option<RuleParams>,

    /// Message the rule reports when it fails
    pub validation_message: String,

    pub valid: bool,
}

/// One slot per rule kind; `None` when the field does not declare that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub required: Option<RuleStatus>,
    pub min_length: Option<RuleStatus>,
    pub max_length: Option<RuleStatus>,
    pub min_value: Option<RuleStatus>,
    pub max_value: Option<RuleStatus>,
    pub is_email: Option<RuleStatus>,
    pub is_postcode: Option<RuleStatus>,
    pub is_phone_number: Option<RuleStatus>,
    pub custom: Option<RuleStatus>,
}

impl FieldReport {
    pub fn get(&self, kind: RuleKind) -> Option<&RuleStatus> {
        match kind {
            RuleKind::Required => self.required.as_ref(),
            RuleKind::MinLength => self.min_length.as_ref(),
            RuleKind::MaxLength => self.max_length.as_ref(),
            RuleKind::MinValue => self.min_value.as_ref(),
            RuleKind::MaxValue => self.max_value.as_ref(),
            RuleKind::IsEmail => self.is_email.as_ref(),
            RuleKind::IsPostcode => self.is_postcode.as_ref(),
            RuleKind::IsPhoneNumber => self.is_phone_number.as_ref(),
            RuleKind::Custom => self.custom.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: RuleKind) -> &mut Option<RuleStatus> {
        match kind {
            RuleKind::Required => &mut self.required,
            RuleKind::MinLength => &mut self.min_length,
            RuleKind::MaxLength => &mut self.max_length,
            RuleKind::MinValue => &mut self.min_value,
            RuleKind::MaxValue => &mut self.max_value,
            RuleKind::IsEmail => &mut self.is_email,
            RuleKind::IsPostcode => &mut self.is_postcode,
            RuleKind::IsPhoneNumber => &mut self.is_phone_number,
            RuleKind::Custom => &mut self.custom,
        }
    }

    /// Declared rule kinds with their status, in report order.
    pub fn declared(&self) -> impl Iterator<Item = (RuleKind, &RuleStatus)> {
        RuleKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|status| (kind, status)))
    }

    /// True when no rule kind is declared.
    pub fn is_empty(&self) -> bool {
        self.declared().next().is_none()
    }

    /// True when every declared rule holds.
    pub fn is_valid(&self) -> bool {
        self.declared().all(|(_, status)| status.valid)
    }
}

/// Validate every schema field against the model.
///
/// A field missing from the model is validated as `undefined`. Model fields
/// the schema does not declare are ignored. The first rule error aborts the
/// call.
pub fn validate_schema(
    schema: &ValidationSchema,
    model: &Model,
) -> Result<SchemaResults, RuleError> {
    let mut results = SchemaResults::with_capacity(schema.len());

    for (field, validator) in schema.iter() {
        let result = validator.validate(model.get(field), model)?;
        tracing::debug!(
            field,
            valid = result.valid,
            failures = result.validation_messages.len(),
            "Field validated"
        );
        results.insert(field.to_string(), result);
    }

    Ok(results)
}

/// Report the status of every rule kind for every field.
///
/// Schema fields come first, in schema order, each evaluating the first rule
/// it declares of every kind. Model fields absent from the schema follow, in
/// model order, with every kind `None`. The first rule error aborts the call.
pub fn evaluate_schema(
    schema: &ValidationSchema,
    model: &Model,
) -> Result<EvaluateReport, RuleError> {
    let mut report = EvaluateReport::with_capacity(schema.len());

    for (field, validator) in schema.iter() {
        let value = model.get(field);
        let mut field_report = FieldReport::default();

        for kind in RuleKind::ALL {
            let Some(rule) = validator.rules().iter().find(|r| r.kind() == kind) else {
                continue;
            };
            let outcome = validator.evaluate_rule(rule, value, model)?;
            *field_report.slot_mut(kind) = Some(RuleStatus {
                params: rule.params(),
                validation_message: rule.message().to_string(),
                valid: outcome.valid,
            });
        }

        tracing::debug!(field, valid = field_report.is_valid(), "Field evaluated");
        report.insert(field.to_string(), field_report);
    }

    for field in model.keys() {
        if !report.contains_key(field) {
            tracing::debug!(field, "Field not in schema");
            report.insert(field.to_string(), FieldReport::default());
        }
    }

    Ok(report)
}
