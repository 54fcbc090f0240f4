//! End-to-end schema scenarios.

use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use typecheck_core::{
    evaluate_schema, type_field, validate_schema, Error, Model, RuleError, SupportedType,
    ValidationResult, ValidationSchema, Value,
};

fn date(y: i32, m: u32, d: u32) -> Value {
    Value::from(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
}

fn failed(messages: &[&str]) -> ValidationResult {
    ValidationResult {
        valid: false,
        validation_messages: messages.iter().map(|m| m.to_string()).collect(),
    }
}

fn date_order_schema() -> Result<ValidationSchema, Error> {
    Ok(ValidationSchema::new()
        .field("field2", type_field(SupportedType::Date.as_str())?)
        .field(
            "field4",
            type_field("date")?.custom(
                |value, model| model.get("field2") >= value,
                "field2 must be more recent than field4",
            ),
        ))
}

#[test]
fn required_fails_on_empty_string() -> Result<(), Error> {
    let schema = ValidationSchema::new().field(
        "field1",
        type_field("string")?.required("This field is required."),
    );
    let results = validate_schema(&schema, &Model::new().with("field1", ""))?;

    assert_eq!(results["field1"], failed(&["This field is required."]));
    Ok(())
}

#[test]
fn length_bounds() -> Result<(), Error> {
    let schema = ValidationSchema::new().field(
        "field1",
        type_field("string")?
            .min_length(3, "Minimum length is 3.")?
            .max_length(5, "Maximum length is 5.")?,
    );

    let too_short = validate_schema(&schema, &Model::new().with("field1", "ab"))?;
    assert_eq!(too_short["field1"], failed(&["Minimum length is 3."]));

    let fits = validate_schema(&schema, &Model::new().with("field1", "abc"))?;
    assert_eq!(fits["field1"], ValidationResult::passed());

    let too_long = validate_schema(&schema, &Model::new().with("field1", "abcdef"))?;
    assert_eq!(too_long["field1"], failed(&["Maximum length is 5."]));
    Ok(())
}

#[test]
fn value_bounds() -> Result<(), Error> {
    let schema = ValidationSchema::new().field(
        "field1",
        type_field("number")?
            .min_value(10.0, "Minimum value is 10.")?
            .max_value(20.0, "Maximum value is 20.")?,
    );

    let cases = [
        (5, failed(&["Minimum value is 10."])),
        (15, ValidationResult::passed()),
        (25, failed(&["Maximum value is 20."])),
    ];
    for (value, expected) in cases {
        let results = validate_schema(&schema, &Model::new().with("field1", value))?;
        assert_eq!(results["field1"], expected, "value {value}");
    }
    Ok(())
}

#[test]
fn required_then_min_length_report_in_declaration_order() -> Result<(), Error> {
    let schema = ValidationSchema::new().field(
        "field1",
        type_field("string")?
            .required("mA")
            .min_length(3, "mB")?,
    );
    let results = validate_schema(&schema, &Model::new().with("field1", ""))?;

    assert_eq!(results["field1"], failed(&["mA", "mB"]));
    Ok(())
}

#[test]
fn cross_field_custom_rule() -> Result<(), Error> {
    let schema = date_order_schema()?;

    let in_order = Model::new()
        .with("field2", date(2024, 1, 1))
        .with("field4", date(2023, 12, 31));
    assert_eq!(
        validate_schema(&schema, &in_order)?["field4"],
        ValidationResult::passed()
    );

    let swapped = Model::new()
        .with("field2", date(2023, 12, 31))
        .with("field4", date(2024, 1, 1));
    assert_eq!(
        validate_schema(&schema, &swapped)?["field4"],
        failed(&["field2 must be more recent than field4"])
    );
    Ok(())
}

#[test]
fn mixed_results_across_fields() -> Result<(), Error> {
    let cutoff = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let schema = ValidationSchema::new()
        .field(
            "field1",
            type_field("string")?
                .required("This field is required.")
                .max_length(10, "Maximum length is 10.")?,
        )
        .field(
            "field2",
            type_field("date")?.custom(
                move |value, _| value.as_date().is_some_and(|d| *d <= cutoff),
                "Date cannot be in the future.",
            ),
        );
    let model = Model::new()
        .with("field1", "TooLongStringHere")
        .with("field2", date(2100, 1, 1));

    let results = validate_schema(&schema, &model)?;
    assert_eq!(results["field1"], failed(&["Maximum length is 10."]));
    assert_eq!(results["field2"], failed(&["Date cannot be in the future."]));
    Ok(())
}

#[test]
fn empty_schema_yields_empty_results() -> Result<(), Error> {
    let schema = ValidationSchema::new();

    assert!(validate_schema(&schema, &Model::new())?.is_empty());
    assert!(validate_schema(&schema, &Model::new().with("field1", "Unused"))?.is_empty());
    assert!(evaluate_schema(&schema, &Model::new())?.is_empty());
    Ok(())
}

#[test]
fn evaluate_is_total_over_schema_and_model() -> Result<(), Error> {
    let schema = ValidationSchema::new().field(
        "field1",
        type_field("string")?
            .required("This field is required.")
            .is_postcode("Not a postcode."),
    );
    let model = Model::new()
        .with("field1", "CV3 3HT")
        .with("field2", "Unexpected field");

    let report = evaluate_schema(&schema, &model)?;

    assert_eq!(report.len(), 2);
    let field1 = &report["field1"];
    assert!(field1.required.as_ref().is_some_and(|s| s.valid));
    assert!(field1.is_postcode.as_ref().is_some_and(|s| s.valid));
    assert!(field1.min_length.is_none());
    assert!(report["field2"].is_empty());
    Ok(())
}

#[test]
fn evaluate_reports_custom_cross_field_status() -> Result<(), Error> {
    let schema = date_order_schema()?;
    let swapped = Model::new()
        .with("field2", date(2023, 12, 31))
        .with("field4", date(2024, 1, 1));

    let report = evaluate_schema(&schema, &swapped)?;
    let custom = report["field4"].custom.as_ref().expect("custom rule declared");

    assert!(!custom.valid);
    assert_eq!(custom.validation_message, "field2 must be more recent than field4");
    assert!(report["field2"].is_empty());
    Ok(())
}

#[test]
fn rule_errors_abort_evaluation() -> Result<(), Error> {
    let schema = ValidationSchema::new()
        .field("name", type_field("string")?.required("required"))
        .field("age", type_field("number")?.min_value(0.0, "negative")?);
    let model = Model::new().with("name", "Ada").with("age", "unknown");

    assert!(matches!(
        validate_schema(&schema, &model),
        Err(RuleError::NotNumeric { .. })
    ));
    assert!(evaluate_schema(&schema, &model).is_err());
    Ok(())
}

#[test]
fn one_schema_many_threads() -> Result<(), Error> {
    let schema = Arc::new(
        ValidationSchema::new().field(
            "phone",
            type_field("string")?
                .required("Phone is required.")
                .is_phone_number("Phone is invalid."),
        ),
    );

    let handles: Vec<_> = ["+447911123456", "12345", ""]
        .into_iter()
        .map(|phone| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let model = Model::new().with("phone", phone);
                validate_schema(&schema, &model).map(|r| r["phone"].valid)
            })
        })
        .collect();

    let verdicts: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("validation thread panicked"))
        .collect::<Result<_, _>>()?;
    assert_eq!(verdicts, [true, false, false]);
    Ok(())
}

fn email_schema() -> ValidationSchema {
    ValidationSchema::new().field(
        "email",
        type_field("string")
            .expect("string is supported")
            .required("Email is required.")
            .is_email("Email is invalid.")
            .max_length(40, "Email is too long.")
            .expect("string has a length"),
    )
}

proptest! {
    /// Validation keeps no hidden state between calls.
    #[test]
    fn validation_is_idempotent(email in "[a-z@. ]{0,50}") {
        let schema = email_schema();
        let model = Model::new().with("email", email);

        let first = validate_schema(&schema, &model).unwrap();
        let second = validate_schema(&schema, &model).unwrap();
        prop_assert_eq!(first, second);

        let first = evaluate_schema(&schema, &model).unwrap();
        let second = evaluate_schema(&schema, &model).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A field is valid exactly when it reports no messages.
    #[test]
    fn valid_iff_no_messages(email in "[a-z@.]{0,50}") {
        let results = validate_schema(&email_schema(), &Model::new().with("email", email)).unwrap();
        let result = &results["email"];
        prop_assert_eq!(result.valid, result.validation_messages.is_empty());
    }
}
