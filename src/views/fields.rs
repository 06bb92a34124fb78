//! Conversions between form text and draft values

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// A form value that cannot become a draft; shown to the user, nothing is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be one of: {allowed}")]
    NotAllowed { field: &'static str, allowed: &'static str },

    #[error("{field} '{value}' is not in the list of options")]
    NotAnOption { field: &'static str, value: String },

    #[error("unknown field '{field}', expected one of: {expected}")]
    UnknownField { field: String, expected: String },
}

impl FieldError {
    pub fn unknown(field: &str, known: &[&str]) -> Self {
        FieldError::UnknownField {
            field: field.to_string(),
            expected: known.join(", "),
        }
    }
}

/// Split on commas and newlines into trimmed, non-empty entries, order kept
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Empty input means "not set"; anything else has to parse
pub fn parse_count(field: &'static str, raw: &str) -> Result<Option<u32>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| FieldError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

pub fn format_count(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn parse_bool(field: &'static str, raw: &str) -> Result<bool, FieldError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" | "" => Ok(false),
        _ => Err(FieldError::NotAllowed {
            field,
            allowed: "true, false",
        }),
    }
}

/// Parse one of a fixed set of values with the type's own parser
pub fn parse_choice<T>(
    field: &'static str,
    raw: &str,
    parse: impl FnOnce(&str) -> Option<T>,
    allowed: &'static str,
) -> Result<T, FieldError> {
    parse(raw).ok_or(FieldError::NotAllowed { field, allowed })
}

pub fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

/// The `YYYY-MM-DD` part of a stored date or timestamp
pub fn date_part(raw: Option<&str>) -> String {
    raw.map(|r| r.split('T').next().unwrap_or_default().to_string())
        .unwrap_or_default()
}

/// Dates in tables render day first, `-` when absent or unreadable
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "-".to_string();
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(&date_part(Some(raw)), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn display_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
