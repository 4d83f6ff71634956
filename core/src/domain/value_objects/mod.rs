//! Value objects representing immutable domain concepts.

pub mod verification;

// Re-export commonly used types
pub use verification::{ErrorCode, VerificationRequest, VerificationResponse};
