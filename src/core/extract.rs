//! Tolerant field extraction from a parsed [`Record`].
//!
//! Nothing in here fails: absent keys, `null` values and values of the wrong
//! shape all resolve to the documented defaults.

use crate::domain::model::{ClientInfo, ClientRecord, MeasurementRow, Record, StyleChoices};
use serde_json::Value;

pub const CLIENT_INFORMATION: &str = "Client Information";
pub const STYLE_CHOICES: &str = "Style Choices";
pub const TAILOR_INSTRUCTIONS: &str = "Tailor Instructions";

/// Accepted spellings, in priority order (en-dash first).
pub const SHIRT_MEASUREMENTS: [&str; 2] = ["Measurements – Shirt", "Measurements - Shirt"];
pub const TROUSER_MEASUREMENTS: [&str; 2] = ["Measurements – Trouser", "Measurements - Trouser"];

pub const DEFAULT_CLIENT_NAME: &str = "Unknown Client";

/// Returns the value of the first key in `keys` present in `value`.
///
/// `None` when `value` is not a mapping or none of the keys match. A key whose
/// value is `null` counts as absent.
pub fn first_of<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = value.as_object()?;
    keys.iter()
        .find_map(|key| map.get(*key))
        .filter(|found| !found.is_null())
}

/// Walks `path` one mapping at a time.
pub fn lookup_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| first_of(current, &[*key]))
}

/// Text form of a scalar. Nested structures are rendered as compact JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!("Structured value found where text was expected; rendering as JSON");
            value.to_string()
        }
    }
}

pub fn text_or(value: Option<&Value>, default: &str) -> String {
    value.map(to_text).unwrap_or_else(|| default.to_string())
}

/// The sequence under `value`, or an empty slice for anything else.
pub fn sequence_of(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            tracing::warn!("Expected a sequence, found {}; treating as empty", kind_of(other));
            &[]
        }
        None => &[],
    }
}

pub fn text_list(value: Option<&Value>) -> Vec<String> {
    sequence_of(value).iter().map(to_text).collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

pub fn extract_client_info(record: &Record) -> ClientInfo {
    let field = |name: &str| text_or(lookup_path(record, &[CLIENT_INFORMATION, name]), "");

    ClientInfo {
        name: text_or(
            lookup_path(record, &[CLIENT_INFORMATION, "Name"]),
            DEFAULT_CLIENT_NAME,
        ),
        date: field("Date"),
        garment: field("Garment"),
        height: field("Height"),
        weight: field("Weight"),
        notes: field("Notes"),
    }
}

/// Non-mapping rows keep their position with every cell empty.
pub fn extract_measurements(record: &Record, aliases: &[&str]) -> Vec<MeasurementRow> {
    let found = first_of(record, aliases);
    if found.is_none() {
        tracing::debug!("No measurements under any of {:?}", aliases);
    }

    sequence_of(found)
        .iter()
        .map(|row| MeasurementRow {
            area: text_or(first_of(row, &["Area"]), ""),
            measurement: text_or(first_of(row, &["Measurement"]), ""),
            notes: text_or(first_of(row, &["Notes"]), ""),
        })
        .collect()
}

pub fn extract_style_choices(record: &Record) -> StyleChoices {
    StyleChoices {
        shirt: text_list(lookup_path(record, &[STYLE_CHOICES, "Shirt"])),
        trouser: text_list(lookup_path(record, &[STYLE_CHOICES, "Trouser"])),
    }
}

pub fn extract_record(record: &Record) -> ClientRecord {
    if !record.is_object() {
        tracing::warn!("Input root is {}, not a mapping; every field takes its default", kind_of(record));
    }

    ClientRecord {
        info: extract_client_info(record),
        shirt_measurements: extract_measurements(record, &SHIRT_MEASUREMENTS),
        trouser_measurements: extract_measurements(record, &TROUSER_MEASUREMENTS),
        style_choices: extract_style_choices(record),
        instructions: text_list(first_of(record, &[TAILOR_INSTRUCTIONS])),
    }
}
