//! Rules: one named, parameterized predicate with a failure message.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::classify;
use crate::model::Model;
use crate::patterns::DataChecks;
use crate::types::SupportedType;
use crate::value::Value;

/// Closed set of rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    IsEmail,
    IsPostcode,
    IsPhoneNumber,
    Custom,
}

impl RuleKind {
    /// Every kind, in report order.
    pub const ALL: [RuleKind; 9] = [
        RuleKind::Required,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::MinValue,
        RuleKind::MaxValue,
        RuleKind::IsEmail,
        RuleKind::IsPostcode,
        RuleKind::IsPhoneNumber,
        RuleKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::MinValue => "minValue",
            RuleKind::MaxValue => "maxValue",
            RuleKind::IsEmail => "isEmail",
            RuleKind::IsPostcode => "isPostcode",
            RuleKind::IsPhoneNumber => "isPhoneNumber",
            RuleKind::Custom => "custom",
        }
    }

    /// Whether a field declared as `declared` can carry this rule.
    ///
    /// Length rules need a type with a length, value rules a numeric type.
    /// Every other kind attaches anywhere.
    pub fn applies_to(self, declared: SupportedType) -> bool {
        match self {
            RuleKind::MinLength | RuleKind::MaxLength => declared.has_length(),
            RuleKind::MinValue | RuleKind::MaxValue => declared.is_numeric(),
            _ => true,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named numeric parameters of a bounded rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleParams {
    /// Bound of a length rule
    Length { length: usize },

    /// Bound of a value rule
    Size { size: f64 },
}

/// Errors raised while attaching or evaluating a rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("{kind} cannot be attached to a field declared as {declared}")]
    Incompatible {
        kind: RuleKind,
        declared: SupportedType,
    },

    #[error("{kind} requires a value with a length, found {found}")]
    NoLength { kind: RuleKind, found: SupportedType },

    #[error("{kind} requires a numeric value, found {found}")]
    NotNumeric { kind: RuleKind, found: SupportedType },
}

/// Custom predicate over the field value and the whole model.
pub type Predicate = Arc<dyn Fn(&Value, &Model) -> bool + Send + Sync>;

enum Check {
    Required,
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Email,
    Postcode,
    PhoneNumber,
    Custom(Option<Predicate>),
}

/// A single validation rule.
///
/// Immutable once built. Bounded rules (`minLength`, `maxLength`, `minValue`,
/// `maxValue`) fail with a [`RuleError`] when the value has no length or no
/// numeric reading; that error is never turned into a validation failure.
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// Value must be neither `null`, `undefined` nor the empty string.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(Check::Required, message)
    }

    pub fn min_length(length: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MinLength(length), message)
    }

    pub fn max_length(length: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MaxLength(length), message)
    }

    pub fn min_value(size: f64, message: impl Into<String>) -> Self {
        Self::new(Check::MinValue(size), message)
    }

    pub fn max_value(size: f64, message: impl Into<String>) -> Self {
        Self::new(Check::MaxValue(size), message)
    }

    pub fn is_email(message: impl Into<String>) -> Self {
        Self::new(Check::Email, message)
    }

    pub fn is_postcode(message: impl Into<String>) -> Self {
        Self::new(Check::Postcode, message)
    }

    pub fn is_phone_number(message: impl Into<String>) -> Self {
        Self::new(Check::PhoneNumber, message)
    }

    /// Custom rule. Without a predicate the rule always holds.
    pub fn custom(predicate: Option<Predicate>, message: impl Into<String>) -> Self {
        Self::new(Check::Custom(predicate), message)
    }

    pub fn kind(&self) -> RuleKind {
        match self.check {
            Check::Required => RuleKind::Required,
            Check::MinLength(_) => RuleKind::MinLength,
            Check::MaxLength(_) => RuleKind::MaxLength,
            Check::MinValue(_) => RuleKind::MinValue,
            Check::MaxValue(_) => RuleKind::MaxValue,
            Check::Email => RuleKind::IsEmail,
            Check::Postcode => RuleKind::IsPostcode,
            Check::PhoneNumber => RuleKind::IsPhoneNumber,
            Check::Custom(_) => RuleKind::Custom,
        }
    }

    pub fn params(&self) -> Option<RuleParams> {
        match self.check {
            Check::MinLength(length) | Check::MaxLength(length) => {
                Some(RuleParams::Length { length })
            }
            Check::MinValue(size) | Check::MaxValue(size) => Some(RuleParams::Size { size }),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate against `value`, with `model` available to custom
    /// rules.
    pub fn check(&self, value: &Value, model: &Model) -> Result<bool, RuleError> {
        let holds = match &self.check {
            Check::Required => !value.is_nullish() && value.as_str() != Some(""),
            Check::MinLength(length) => self.length_of(value)? >= *length,
            Check::MaxLength(length) => self.length_of(value)? <= *length,
            Check::MinValue(size) => self.number_of(value)? >= *size,
            Check::MaxValue(size) => self.number_of(value)? <= *size,
            Check::Email => DataChecks::new(value).is_email(),
            Check::Postcode => DataChecks::new(value).is_postcode(),
            Check::PhoneNumber => DataChecks::new(value).is_phone_number(),
            Check::Custom(Some(predicate)) => predicate(value, model),
            Check::Custom(None) => true,
        };
        Ok(holds)
    }

    fn length_of(&self, value: &Value) -> Result<usize, RuleError> {
        value.length().ok_or_else(|| RuleError::NoLength {
            kind: self.kind(),
            found: classify(value),
        })
    }

    fn number_of(&self, value: &Value) -> Result<f64, RuleError> {
        value.numeric().ok_or_else(|| RuleError::NotNumeric {
            kind: self.kind(),
            found: classify(value),
        })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind())
            .field("params", &self.params())
            .field("message", &self.message)
            .finish()
    }
}
