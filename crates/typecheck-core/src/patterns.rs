//! Data-format checks.
//!
//! Whole-value patterns for the formats the rule engine knows how to check:
//! email addresses, UK postcodes and phone numbers. Each check answers
//! `false` for anything that is not a string, `null` included.

use lazy_static::lazy_static;
use regex::Regex;

use crate::classifier::classify;
use crate::types::SupportedType;
use crate::value::Value;

/// Characters ECMAScript counts as `\s`. This differs from Unicode
/// `White_Space`: U+FEFF is in, U+0085 is out.
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

lazy_static! {
    /// Email address: something@something.something, no whitespace
    pub static ref EMAIL_PATTERN: Regex = {
        let part = format!("[^{JS_WHITESPACE}@]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
    };

    /// UK postcode (outward + inward code), plus the GIR 0AA special case.
    /// Letters and digits are ASCII only.
    pub static ref UK_POSTCODE_PATTERN: Regex = Regex::new(
        r"^(?:[A-Za-z]{1,2}[0-9]{1,2}[A-Za-z]? ?[0-9][A-Za-z]{2}|[Gg][Ii][Rr] ?0[Aa]{2})$"
    ).unwrap();

    /// Phone number: optional leading '+' and 10-15 ASCII digits
    pub static ref PHONE_PATTERN: Regex = Regex::new(
        r"^\+?[0-9]{10,15}$"
    ).unwrap();
}

/// Check if the whole string is an email address.
pub fn is_email(content: &str) -> bool {
    EMAIL_PATTERN.is_match(content)
}

/// Check if the whole string is a UK postcode.
pub fn is_uk_postcode(content: &str) -> bool {
    UK_POSTCODE_PATTERN.is_match(content)
}

/// Check if the whole string is a phone number.
pub fn is_phone_number(content: &str) -> bool {
    PHONE_PATTERN.is_match(content)
}

/// Format checks bound to one value.
#[derive(Debug, Clone, Copy)]
pub struct DataChecks<'a> {
    value: &'a Value,
}

impl<'a> DataChecks<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn is_email(&self) -> bool {
        self.text().is_some_and(is_email)
    }

    pub fn is_postcode(&self) -> bool {
        self.text().is_some_and(is_uk_postcode)
    }

    pub fn is_phone_number(&self) -> bool {
        self.text().is_some_and(is_phone_number)
    }

    fn text(&self) -> Option<&'a str> {
        if classify(self.value) != SupportedType::String {
            return None;
        }
        self.value.as_str()
    }
}

/// Bind the format checks to `value`.
pub fn data_checks(value: &Value) -> DataChecks<'_> {
    DataChecks::new(value)
}
