//! # VerifyServer Core
//! 
//! Core issuance logic and domain layer for the VerifyServer backend.
//! This crate contains the verification domain types, the gateway traits the
//! issuance coordinator consumes, the code generator, and the error taxonomy.
//! It performs no I/O of its own.

pub mod domain;
pub mod services;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use errors::*;
