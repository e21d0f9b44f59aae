//! Error types for reading quotes and writing results.

use std::fmt;

/// Errors raised at the tabular and report boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeFileError {
    /// Underlying read or write failed.
    Io {
        /// Description of the I/O failure.
        message: String,
    },

    /// A record has fewer fields than the schema requires.
    MissingField {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the first missing field.
        field: &'static str,
    },

    /// A field could not be parsed.
    InvalidField {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Raw field contents.
        value: String,
    },

    /// Report could not be serialized.
    SerializationError {
        /// Serializer message.
        message: String,
    },

    /// Report could not be deserialized.
    DeserializationError {
        /// Deserializer message.
        message: String,
    },

    /// Report schema version is not supported.
    UnsupportedVersion {
        /// Version found in the report.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// Report checksum does not match its payload.
    ChecksumMismatch {
        /// Checksum stored in the report.
        expected: String,
        /// Checksum recomputed from the payload.
        actual: String,
    },
}

impl fmt::Display for TradeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeFileError::Io { message } => write!(f, "I/O error: {message}"),
            TradeFileError::MissingField { line, field } => {
                write!(f, "line {line}: missing field '{field}'")
            }
            TradeFileError::InvalidField { line, field, value } => {
                write!(f, "line {line}: invalid {field} '{value}'")
            }
            TradeFileError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            TradeFileError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
            TradeFileError::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported report version: {found} (expected {expected})"
                )
            }
            TradeFileError::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for TradeFileError {}

impl From<std::io::Error> for TradeFileError {
    fn from(error: std::io::Error) -> Self {
        TradeFileError::Io {
            message: error.to_string(),
        }
    }
}
