//! Text ⇄ native conversion for operator-submitted form values.
//!
//! Edit forms traffic in raw text; the record store traffics in [`Value`].
//! `coerce_to_native` goes form → store, `format_for_display` goes store →
//! form, and the two round-trip for every native type except identifier
//! auto-generation (which has no input to round-trip).

use crate::core::error::{AdminError, Result};
use crate::core::types::NativeType;
use crate::core::value::Value;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
// A time widget submits HH:MM unless the seconds step is enabled.
const TIME_FORMAT_SHORT: &str = "%H:%M";

/// Generate a fresh opaque record identifier.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Convert operator-submitted text to the native value of `target`.
///
/// Failures are always field-scoped: `field` names the offending field in
/// the resulting [`AdminError::Conversion`].
///
/// Boolean follows checkbox widget semantics: the tokens `"true"` and
/// `"on"` are true, every other token (including empty) is false. The
/// caller is responsible for handling an absent checkbox key; a checked
/// box is the only thing a browser sends.
pub fn coerce_to_native(field: &str, raw: &str, target: NativeType) -> Result<Value> {
    match target {
        NativeType::Text => Ok(Value::Text(raw.to_string())),

        NativeType::Boolean => Ok(Value::Boolean(raw == "true" || raw == "on")),

        NativeType::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| AdminError::conversion(field, raw, target)),

        NativeType::Decimal => {
            // Comma-decimal locales submit "12,50"; Rust's parser wants a
            // period. Normalize before parsing so both separators coerce.
            let normalized = raw.trim().replace(',', ".");
            normalized
                .parse::<f64>()
                .map(Value::Decimal)
                .map_err(|_| AdminError::conversion(field, raw, target))
        }

        NativeType::Date => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Value::Date)
            .map_err(|_| AdminError::conversion(field, raw, target)),

        NativeType::Time => {
            let trimmed = raw.trim();
            NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(trimmed, TIME_FORMAT_SHORT))
                .map(Value::Time)
                .map_err(|_| AdminError::conversion(field, raw, target))
        }

        NativeType::Id => {
            if raw.trim().is_empty() {
                Ok(Value::Id(generate_id()))
            } else {
                Ok(Value::Id(raw.trim().to_string()))
            }
        }
    }
}

/// Format a native value for an edit form. `Null` has no text at all.
pub fn format_for_display(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Text(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Decimal(d) => Some(d.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
        Value::Time(t) => Some(t.format(TIME_FORMAT).to_string()),
        Value::Id(s) => Some(s.clone()),
    }
}
