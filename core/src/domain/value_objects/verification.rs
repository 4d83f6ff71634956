//! Request and response value objects for the `GetVerifyCode` operation.

use serde::{Deserialize, Serialize};

/// Outcome of an issuance, carried in the response rather than as a
/// transport failure
///
/// On the wire the code is an integer: `SUCCESS = 0`, `CACHE_ERROR = 1`,
/// `EXCEPTION = 2`, `DELIVERY_ERROR = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ErrorCode {
    /// Code found or created, delivery attempted
    Success,
    /// Cache read or write failed; nothing was delivered
    CacheError,
    /// Any other fault during issuance
    Exception,
    /// Delivery was rejected (strict delivery policy only)
    DeliveryError,
}

impl ErrorCode {
    /// Numeric wire value
    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::CacheError => 1,
            ErrorCode::Exception => 2,
            ErrorCode::DeliveryError => 3,
        }
    }

    /// Symbolic name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Success => "SUCCESS",
            ErrorCode::CacheError => "CACHE_ERROR",
            ErrorCode::Exception => "EXCEPTION",
            ErrorCode::DeliveryError => "DELIVERY_ERROR",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::CacheError),
            2 => Ok(ErrorCode::Exception),
            3 => Ok(ErrorCode::DeliveryError),
            other => Err(format!("Unknown error code: {}", other)),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming `GetVerifyCode` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Address to issue a code for; format is not validated here
    pub email: String,
}

impl VerificationRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// Outgoing `GetVerifyCode` response
///
/// Built once by the issuance coordinator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// The requested address, echoed back
    pub email: String,

    /// Outcome of the issuance
    #[serde(rename = "error")]
    pub error_code: ErrorCode,
}

impl VerificationResponse {
    pub fn new(email: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            email: email.into(),
            error_code,
        }
    }

    pub fn success(email: impl Into<String>) -> Self {
        Self::new(email, ErrorCode::Success)
    }

    pub fn is_success(&self) -> bool {
        self.error_code.is_success()
    }
}
