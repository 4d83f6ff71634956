//! Verification record entity for email-based code issuance.
//!
//! A record only ever lives in the cache: its key is derived from the email
//! address, its value is the issued code, and the cache's TTL ends its life.

use serde::{Deserialize, Serialize};
use vs_shared::mask_email;

/// Namespace prefix for every verification record key
pub const CODE_PREFIX: &str = "code_";

/// Lifetime of an issued code in seconds (10 minutes)
///
/// The delivery message states the validity window in minutes derived from
/// this value through [`validity_minutes`].
pub const CODE_TTL_SECONDS: u64 = 600;

/// Build the cache key for an email address
///
/// The email is used verbatim, so every issuance for the same address lands
/// on the same key.
pub fn code_key(email: &str) -> String {
    format!("{}{}", CODE_PREFIX, email)
}

/// Log-safe rendering of a cache key
///
/// Record keys embed the full address, so the address part goes through
/// [`mask_email`]. Keys outside the record namespace are masked whole.
pub fn masked_key(key: &str) -> String {
    match key.strip_prefix(CODE_PREFIX) {
        Some(email) => format!("{}{}", CODE_PREFIX, mask_email(email)),
        None => mask_email(key),
    }
}

/// Validity window of an issued code, in whole minutes
pub const fn validity_minutes() -> u64 {
    CODE_TTL_SECONDS / 60
}

/// A verification code bound to an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Cache key (`code_` + email)
    pub key: String,

    /// The issued code
    pub code: String,

    /// Time-to-live applied when the record is written
    pub ttl_seconds: u64,
}

impl VerificationRecord {
    /// Creates a record for `email` holding `code` with the fixed TTL
    pub fn new(email: &str, code: impl Into<String>) -> Self {
        Self {
            key: code_key(email),
            code: code.into(),
            ttl_seconds: CODE_TTL_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_key_is_prefixed_verbatim() {
        assert_eq!(code_key("new@example.com"), "code_new@example.com");
        assert_eq!(code_key("Mixed@Example.COM"), "code_Mixed@Example.COM");
    }

    #[test]
    fn test_masked_key_hides_the_address() {
        assert_eq!(masked_key("code_john@example.com"), "code_j***@example.com");
        assert!(!masked_key("code_john@example.com").contains("john"));
        assert_eq!(masked_key("code_"), "code_<empty>");
        assert_eq!(masked_key("session_token"), "***");
    }

    #[test]
    fn test_record_uses_fixed_ttl() {
        let record = VerificationRecord::new("seen@example.com", "abc123");
        assert_eq!(record.key, "code_seen@example.com");
        assert_eq!(record.code, "abc123");
        assert_eq!(record.ttl_seconds, 600);
    }

    #[test]
    fn test_validity_minutes_tracks_ttl() {
        assert_eq!(validity_minutes(), 10);
        assert_eq!(validity_minutes() * 60, CODE_TTL_SECONDS);
    }
}
