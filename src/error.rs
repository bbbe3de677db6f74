//! Error taxonomy surfaced by encode and decode.

use thiserror::Error;

use crate::convert::ConvertError;

/// Failure raised by the mapper or one of the codecs.
///
/// Every variant except [`CodecError::UnsupportedBackend`] names the
/// operation that failed; validation and serialization failures also name
/// the offending field.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A scalar failed backend-specific parsing.
    #[error("{op}: invalid {field}: {source}")]
    Validation {
        /// Mapper or codec operation.
        op: &'static str,
        /// Field whose converter failed.
        field: &'static str,
        /// Converter failure.
        #[source]
        source: ConvertError,
    },

    /// The mapping table is inconsistent with the shapes it maps.
    #[error("{op}: mapping error: {reason}")]
    Mapping {
        /// Mapper or codec operation.
        op: &'static str,
        /// What is wrong with the table.
        reason: String,
    },

    /// The extension payload could not be serialized or deserialized.
    #[error("{op}: {field} payload: {source}")]
    Serialization {
        /// Mapper or codec operation.
        op: &'static str,
        /// Payload column.
        field: &'static str,
        /// JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// No converter set exists for the requested backend.
    #[error("unsupported backend: {0:?}")]
    UnsupportedBackend(String),
}

impl CodecError {
    /// Field the error is tagged with, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } | Self::Serialization { field, .. } => Some(*field),
            Self::Mapping { .. } | Self::UnsupportedBackend(_) => None,
        }
    }

    /// Operation the error is tagged with, if any.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::Validation { op, .. }
            | Self::Serialization { op, .. }
            | Self::Mapping { op, .. } => Some(*op),
            Self::UnsupportedBackend(_) => None,
        }
    }
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
