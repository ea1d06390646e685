//! Field extraction for Vault query records.
//!
//! Records hold scalars, one-element picklist arrays, or nulls. Missing and
//! null fields read as `None`.

use chrono::NaiveDate;
use serde_json::Value;
use trialmap_vault::Record;

use crate::constants::VAULT_DATE_FORMAT;

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Scalar field as text.
pub fn text(record: &Record, field: &str) -> Option<String> {
    record.get(field).and_then(scalar_text)
}

/// Scalar field as text, or `default` when missing or null.
pub fn text_or(record: &Record, field: &str, default: &str) -> String {
    text(record, field).unwrap_or_else(|| default.to_string())
}

/// First element of a picklist field.
pub fn picklist(record: &Record, field: &str) -> Option<String> {
    match record.get(field) {
        Some(Value::Array(items)) => items.first().and_then(scalar_text),
        _ => None,
    }
}

/// Integer field. Numeric strings are accepted; fractions are truncated.
pub fn integer(record: &Record, field: &str) -> Option<i64> {
    match record.get(field)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Floating point field. Numeric strings are accepted; anything that does
/// not parse to a finite number reads as missing.
pub fn float(record: &Record, field: &str) -> Option<f64> {
    let value = match record.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

/// Parses a `YYYY-MM-DD` Vault date.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), VAULT_DATE_FORMAT)
}
