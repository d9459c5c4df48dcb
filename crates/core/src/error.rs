//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures at decode/configuration
/// boundaries. The aging rules themselves are total over their input and
/// never take this path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed policy flag).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A document could not be decoded (e.g. malformed catalog JSON).
    #[error("decode failed: {0}")]
    Decode(String),

    /// A value could not be encoded into its output representation.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
