//! Verification route handlers
//!
//! This module contains the code issuance endpoint.

pub mod get_verify_code;

pub use get_verify_code::{get_verify_code, AppState};
