//! Error taxonomy of the issuance flow.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CacheError, DeliveryError, GeneratorError};

use thiserror::Error;

use crate::domain::value_objects::ErrorCode;

/// Everything that can stop an issuance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssuanceError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Issuance panicked: {message}")]
    Panicked { message: String },
}

impl IssuanceError {
    /// Response code reported for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            IssuanceError::Cache(_) => ErrorCode::CacheError,
            IssuanceError::Delivery(e) if e.is_rejection() => ErrorCode::DeliveryError,
            IssuanceError::Delivery(_)
            | IssuanceError::Generator(_)
            | IssuanceError::InvalidRequest { .. }
            | IssuanceError::Panicked { .. } => ErrorCode::Exception,
        }
    }
}

pub type IssuanceResult<T> = Result<T, IssuanceError>;
