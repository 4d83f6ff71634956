//! Data transfer objects for the HTTP surface

pub mod health;
pub mod verify;

pub use health::HealthResponse;
pub use verify::{GetVerifyCodeRequest, GetVerifyCodeResponse};
