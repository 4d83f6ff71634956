//! Domain entities representing core business objects.

pub mod verification_code;

// Re-export commonly used types
pub use verification_code::{
    code_key, masked_key, validity_minutes, VerificationRecord, CODE_PREFIX, CODE_TTL_SECONDS,
};
