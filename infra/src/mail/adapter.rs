//! Mail Service Trait Adapter
//!
//! Bridges any infrastructure [`MailService`] to the core
//! `MailServiceTrait` consumed by the verification service.

use async_trait::async_trait;
use vs_core::errors::DeliveryError;
use vs_core::services::verification::MailServiceTrait;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Adapter that implements the core MailServiceTrait for a mail service
pub struct MailServiceAdapter<S: ?Sized> {
    inner: Box<S>,
}

impl<S: MailService + ?Sized> MailServiceAdapter<S> {
    /// Wrap a mail service
    pub fn new(inner: Box<S>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

/// Classify an infrastructure failure for the verification flow
///
/// A send that the mail layer reports as failed is an ordinary rejection.
/// Anything else means the mail layer itself is broken.
pub(crate) fn to_delivery_error(error: InfrastructureError) -> DeliveryError {
    match error {
        InfrastructureError::Mail(message) => DeliveryError::rejected(message),
        other => DeliveryError::unexpected(other.to_string()),
    }
}

#[async_trait]
impl<S: MailService + ?Sized> MailServiceTrait for MailServiceAdapter<S> {
    async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<String, DeliveryError> {
        self.inner
            .send_verification_code(recipient, code)
            .await
            .map_err(to_delivery_error)
    }
}

