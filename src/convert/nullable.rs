//! Optional scalars: string, boolean and timestamp.
//!
//! Domain entities carry plain values (`""`, `false`, `None`) while storage
//! columns are nullable. Empty domain text is stored as NULL, so the column
//! tells "never set" apart from a value that was written.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use super::ConvertError;

/// Empty text to NULL, anything else to a present value.
pub fn encode_string(value: &String) -> Result<Option<String>, ConvertError> {
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.clone()))
    }
}

/// NULL to empty text.
pub fn decode_string(value: &Option<String>) -> Result<String, ConvertError> {
    Ok(value.clone().unwrap_or_default())
}

/// Boolean to a native nullable boolean column.
pub fn encode_bool(value: &bool) -> Result<Option<bool>, ConvertError> {
    Ok(Some(*value))
}

/// Native nullable boolean to domain; NULL is `false`.
pub fn decode_bool(value: &Option<bool>) -> Result<bool, ConvertError> {
    Ok(value.unwrap_or(false))
}

/// Boolean to a nullable 0/1 integer column.
pub fn encode_bool_int(value: &bool) -> Result<Option<i64>, ConvertError> {
    Ok(Some(i64::from(*value)))
}

/// Nullable 0/1 integer to domain; NULL and 0 are `false`.
pub fn decode_bool_int(value: &Option<i64>) -> Result<bool, ConvertError> {
    Ok(value.is_some_and(|v| v != 0))
}

/// Timestamp to a native nullable timestamp truncated to microseconds.
pub fn encode_timestamp(value: &Option<DateTime<Utc>>) -> Result<Option<DateTime<Utc>>, ConvertError> {
    Ok(value.map(|ts| ts.trunc_subsecs(6)))
}

/// Native nullable timestamp to domain.
pub fn decode_timestamp(value: &Option<DateTime<Utc>>) -> Result<Option<DateTime<Utc>>, ConvertError> {
    Ok(*value)
}

/// Timestamp to nullable RFC 3339 text with microseconds and a `Z` suffix.
pub fn encode_timestamp_text(value: &Option<DateTime<Utc>>) -> Result<Option<String>, ConvertError> {
    Ok(value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Micros, true)))
}

/// Nullable RFC 3339 text to domain. Empty text is treated as NULL.
pub fn decode_timestamp_text(value: &Option<String>) -> Result<Option<DateTime<Utc>>, ConvertError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|_| ConvertError::Timestamp(text.to_string())),
    }
}
