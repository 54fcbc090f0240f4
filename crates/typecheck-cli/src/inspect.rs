//! `inspect` and `types` subcommands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use typecheck_core::{analyze, RuleKind, SupportedType, Value};

use crate::{InspectArgs, OutputFormat};

/// One inspected value, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectRow {
    pub index: Option<usize>,
    pub kind: SupportedType,
    pub descriptor: String,
    pub is_email: bool,
    pub is_postcode: bool,
    pub is_phone_number: bool,
}

impl InspectRow {
    fn new(index: Option<usize>, value: &Value) -> Self {
        let analysis = analyze(value);
        Self {
            index,
            kind: analysis.kind,
            descriptor: analysis.descriptor,
            is_email: analysis.data.is_email(),
            is_postcode: analysis.data.is_postcode(),
            is_phone_number: analysis.data.is_phone_number(),
        }
    }

    fn to_text(&self) -> String {
        let label = self
            .index
            .map_or_else(|| "-".to_string(), |i| format!("[{i}]"));
        format!(
            "{label:<6} {kind:<10} {descriptor}  email={email} postcode={postcode} phone={phone}",
            kind = self.kind.as_str(),
            descriptor = self.descriptor,
            email = self.is_email,
            postcode = self.is_postcode,
            phone = self.is_phone_number,
        )
    }
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let document = load_document(args.input.as_deref())?;
    let rows = inspect_document(document, args.each, args.dates);
    tracing::debug!(rows = rows.len(), "Document inspected");

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to encode output")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for row in &rows {
                println!("{}", row.to_text());
            }
        }
    }

    Ok(())
}

pub fn run_types() {
    println!("Supported types:");
    for tag in SupportedType::ALL {
        println!("  {tag}");
    }
    println!("Rule kinds:");
    for kind in RuleKind::ALL {
        println!("  {kind}");
    }
}

/// Analyse the document, or each element of a top-level array with `each`.
pub fn inspect_document(document: serde_json::Value, each: bool, dates: bool) -> Vec<InspectRow> {
    let value = to_value(document, dates);
    match value.as_array() {
        Some(items) if each => items
            .iter()
            .enumerate()
            .map(|(i, item)| InspectRow::new(Some(i), item))
            .collect(),
        _ => vec![InspectRow::new(None, &value)],
    }
}

fn load_document(input: Option<&Path>) -> Result<serde_json::Value> {
    match input {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let is_yaml = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml" | "yml")
            );
            if is_yaml {
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Failed to parse YAML in {}", path.display()))
            } else {
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse JSON in {}", path.display()))
            }
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            parse_any(&text)
        }
    }
}

/// JSON first, then YAML.
fn parse_any(text: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).or_else(|json_err| {
        tracing::debug!(error = %json_err, "Input is not JSON, trying YAML");
        serde_yaml::from_str(text).context("Input is neither JSON nor YAML")
    })
}

fn to_value(json: serde_json::Value, dates: bool) -> Value {
    if !dates {
        return Value::from(json);
    }

    match json {
        serde_json::Value::String(s) => match DateTime::parse_from_rfc3339(&s) {
            Ok(date) => Value::Date(date.with_timezone(&Utc)),
            Err(_) => Value::String(s),
        },
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| to_value(item, true)).collect())
        }
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, to_value(v, true)))
                .collect(),
        ),
        other => Value::from(other),
    }
}
