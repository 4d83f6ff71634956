//! Mail Service Interface
//!
//! Defines the trait for mail service implementations that deliver
//! verification codes to email addresses.

use async_trait::async_trait;
use vs_core::domain::entities::verification_code::validity_minutes;

use crate::InfrastructureError;

/// Subject line of every verification mail
pub const VERIFICATION_SUBJECT: &str = "Verification code / 校验码";

/// Mail service trait for sending messages
///
/// Implementations include:
/// - SMTP relay via `lettre`
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a plain-text mail
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient's address
    /// * `subject` - Subject line
    /// * `body` - Plain-text body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier of the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError>;

    /// Send a verification code
    ///
    /// Uses the fixed subject and the standard body, see
    /// [`verification_body`].
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        self.send_mail(to, VERIFICATION_SUBJECT, &verification_body(code)).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}

/// Body of the verification mail for `code`
///
/// The stated validity window follows the cache TTL.
pub fn verification_body(code: &str) -> String {
    let minutes = validity_minutes();
    format!(
        "Your verification code is {code}. Please complete your registration within {minutes} minutes.\n\
         校验码为 {code}，请在 {minutes} 分钟内完成注册。"
    )
}
