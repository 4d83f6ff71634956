//! Mail Service Module
//!
//! This module provides mail service implementations for delivering
//! verification codes.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all mail providers
//! - **Mock Implementation**: Logged, in-memory outbox for development
//! - **SMTP Support**: Delivery through an SMTP relay via `lettre`
//! - **Adapter**: Bridges any provider to the core delivery gateway

pub mod adapter;
pub mod mail_service;
pub mod mock_mail;

// SMTP mail service (feature-gated)
#[cfg(feature = "smtp-mail")]
pub mod smtp;

// Re-export commonly used types
pub use adapter::MailServiceAdapter;
pub use mail_service::{verification_body, MailService, VERIFICATION_SUBJECT};
pub use mock_mail::{MockMailService, RecordedMail};

#[cfg(feature = "smtp-mail")]
pub use smtp::SmtpMailService;

use vs_shared::config::{MailConfig, MailProvider};

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// Falls back to the mock implementation when the SMTP provider is selected
/// but its configuration is incomplete or invalid.
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
///
/// # Returns
///
/// A boxed mail service implementation
pub fn create_mail_service(config: &MailConfig) -> Box<dyn MailService> {
    match config.provider {
        MailProvider::Mock => Box::new(MockMailService::new()),
        MailProvider::Smtp => create_smtp_service(config),
    }
}

#[cfg(feature = "smtp-mail")]
fn create_smtp_service(config: &MailConfig) -> Box<dyn MailService> {
    if !config.has_smtp_relay() {
        tracing::warn!("SMTP provider selected but SMTP_HOST is not set, using mock implementation");
        return Box::new(MockMailService::new());
    }

    match SmtpMailService::new(config) {
        Ok(service) => Box::new(service),
        Err(e) => {
            tracing::error!("Failed to initialize SMTP mail service: {}", e);
            tracing::warn!("Falling back to mock mail service");
            Box::new(MockMailService::new())
        }
    }
}

#[cfg(not(feature = "smtp-mail"))]
fn create_smtp_service(_config: &MailConfig) -> Box<dyn MailService> {
    tracing::warn!("SMTP mail requires the smtp-mail feature, using mock implementation");
    Box::new(MockMailService::new())
}
