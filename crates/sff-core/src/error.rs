//! Error types for sff-core

use thiserror::Error;

/// Errors returned by the decode functions
///
/// Unknown code values are never errors; they decode to a fallback
/// description. Only size, classification and structured-input problems
/// end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer is smaller than the selected layout requires
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Minimum number of bytes the layout needs
        expected: usize,
        /// Number of bytes provided
        actual: usize,
    },

    /// Module family could not be determined
    #[error("unknown module type")]
    UnknownModuleType,

    /// A structured (JSON) field could not be turned back into bytes
    #[error("malformed structured input for '{field}': {reason}")]
    MalformedStructuredInput {
        /// Key of the offending field
        field: String,
        /// What was wrong with it
        reason: String,
    },
}

impl DecodeError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedStructuredInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`DecodeError`]
pub type Result<T> = std::result::Result<T, DecodeError>;
