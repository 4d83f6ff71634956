//! Typed faults returned by the collaborators of the issuance coordinator
//!
//! Each gateway reports failure through exactly one of these types. The
//! coordinator is the only place they are turned into response codes.

use thiserror::Error;

/// Any fault raised by the backing key-value store
///
/// Every store fault collapses into this one type; callers only need to know
/// that the cache could not answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cache error: {message}")]
pub struct CacheError {
    pub message: String,
}

impl CacheError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Delivery failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The mail channel answered and refused the message
    #[error("Delivery rejected: {message}")]
    Rejected { message: String },

    /// The mail channel misbehaved in a way it is not expected to
    #[error("Unexpected delivery fault: {message}")]
    Unexpected { message: String },
}

impl DeliveryError {
    pub fn rejected(message: impl Into<String>) -> Self {
        DeliveryError::Rejected {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        DeliveryError::Unexpected {
            message: message.into(),
        }
    }

    /// Whether this is an ordinary refusal rather than a fault
    pub fn is_rejection(&self) -> bool {
        matches!(self, DeliveryError::Rejected { .. })
    }
}

/// The code generator could not produce a code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Code generation failed: {message}")]
pub struct GeneratorError {
    pub message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
