//! Wire shapes of `GetVerifyCode`
//!
//! The domain request and response already carry the wire layout
//! (`{"email": ...}` in, `{"email": ..., "error": <int>}` out).

pub use vs_core::domain::value_objects::{
    VerificationRequest as GetVerifyCodeRequest, VerificationResponse as GetVerifyCodeResponse,
};
