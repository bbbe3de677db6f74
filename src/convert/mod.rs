//! Scalar converters between domain text and backend-native column values.
//!
//! Every converter is a plain function with the signature
//! `fn(&Domain) -> Result<Storage, ConvertError>` (or the reverse), so it can
//! be registered on a [`crate::mapper::MapperBuilder`] directly.

// Converters take `&String` to line up with field accessors.
#![allow(clippy::ptr_arg)]

use thiserror::Error;

/// Date and time-of-day normalization.
pub mod datetime;
/// MHz text to hertz and NUMERIC text.
pub mod frequency;
/// Present-vs-absent wrappers for optional storage columns.
pub mod nullable;

/// Failure of a single scalar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Text is not a base-10 decimal number.
    #[error("{0:?} is not a decimal frequency")]
    Frequency(String),
    /// Decimal value does not fit the native column.
    #[error("frequency {0:?} is out of range")]
    FrequencyRange(String),
    /// Text is not `YYYY-MM-DD` or `YYYYMMDD`, or not a calendar date.
    #[error("{0:?} is not a YYYYMMDD date")]
    Date(String),
    /// Text is not `HH:MM`, `HHMM`, `HH:MM:SS` or `HHMMSS`.
    #[error("{0:?} is not an HHMM time")]
    Time(String),
    /// Stored timestamp text is not RFC 3339.
    #[error("{0:?} is not an RFC 3339 timestamp")]
    Timestamp(String),
    /// A required identifier is missing or not positive.
    #[error("required identifier is missing (got {0})")]
    MissingId(i64),
}

/// Rejects identifiers that are not positive; used for write-time linkage.
pub fn require_id(id: &i64) -> Result<i64, ConvertError> {
    if *id > 0 {
        Ok(*id)
    } else {
        Err(ConvertError::MissingId(*id))
    }
}
