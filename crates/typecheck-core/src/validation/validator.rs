//! Per-field rule lists with a fluent builder.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::SupportedType;
use crate::value::Value;

use super::rule::{Predicate, Rule, RuleError};

/// Pass/fail verdict for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,

    /// Messages of every failed rule, in declaration order
    pub validation_messages: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub fn passed() -> Self {
        Self {
            valid: true,
            validation_messages: Vec::new(),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::passed()
    }
}

/// Verdict of a single rule. `message` is set only when the rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

/// Ordered rules for one field.
///
/// Rules run in the order they were attached, and that order is the order of
/// the messages a failing field reports.
///
/// ```rust,ignore
/// let name = type_field("string")?
///     .required("Name is required.")
///     .min_length(3, "Name is too short.")?;
/// ```
#[derive(Debug)]
pub struct Validator {
    declared: SupportedType,
    rules: Vec<Rule>,
}

impl Validator {
    /// An empty validator for a field declared as `declared`.
    pub fn new(declared: SupportedType) -> Self {
        Self {
            declared,
            rules: Vec::new(),
        }
    }

    pub fn declared_type(&self) -> SupportedType {
        self.declared
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Attach a prebuilt rule.
    ///
    /// Fails if the declared type cannot carry the rule, e.g. a length rule
    /// on a `number` field.
    pub fn rule(mut self, rule: Rule) -> Result<Self, RuleError> {
        let kind = rule.kind();
        if !kind.applies_to(self.declared) {
            return Err(RuleError::Incompatible {
                kind,
                declared: self.declared,
            });
        }
        self.rules.push(rule);
        Ok(self)
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::required(message));
        self
    }

    pub fn min_length(self, length: usize, message: impl Into<String>) -> Result<Self, RuleError> {
        self.rule(Rule::min_length(length, message))
    }

    pub fn max_length(self, length: usize, message: impl Into<String>) -> Result<Self, RuleError> {
        self.rule(Rule::max_length(length, message))
    }

    pub fn min_value(self, size: f64, message: impl Into<String>) -> Result<Self, RuleError> {
        self.rule(Rule::min_value(size, message))
    }

    pub fn max_value(self, size: f64, message: impl Into<String>) -> Result<Self, RuleError> {
        self.rule(Rule::max_value(size, message))
    }

    pub fn is_email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::is_email(message));
        self
    }

    pub fn is_postcode(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::is_postcode(message));
        self
    }

    pub fn is_phone_number(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::is_phone_number(message));
        self
    }

    /// Attach a predicate over the field value and the whole model.
    pub fn custom<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value, &Model) -> bool + Send + Sync + 'static,
    {
        let predicate: Predicate = Arc::new(predicate);
        self.rules.push(Rule::custom(Some(predicate), message));
        self
    }

    /// Evaluate one rule against a value.
    pub fn evaluate_rule(
        &self,
        rule: &Rule,
        value: &Value,
        model: &Model,
    ) -> Result<RuleOutcome, RuleError> {
        let valid = rule.check(value, model)?;
        tracing::trace!(rule = %rule.kind(), valid, "Rule evaluated");

        Ok(RuleOutcome {
            valid,
            message: (!valid).then(|| rule.message().to_string()),
        })
    }

    /// Evaluate every rule, in declaration order, without stopping at the
    /// first failure.
    ///
    /// A rule error aborts the whole call.
    pub fn validate(&self, value: &Value, model: &Model) -> Result<ValidationResult, RuleError> {
        let mut result = ValidationResult::passed();

        for rule in &self.rules {
            let outcome = self.evaluate_rule(rule, value, model)?;
            result.valid &= outcome.valid;
            result.validation_messages.extend(outcome.message);
        }

        Ok(result)
    }
}
