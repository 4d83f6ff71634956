//! SMTP Mail Service Implementation
//!
//! Sends verification mails through an SMTP relay using `lettre`.
//! The session is protected according to [`SmtpSecurity`]: implicit TLS,
//! STARTTLS (required, not opportunistic) or, for local relays, nothing.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use vs_shared::config::{MailConfig, SmtpSecurity};
use vs_shared::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// SMTP mail service
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    security: SmtpSecurity,
}

impl SmtpMailService {
    /// Build the SMTP transport from configuration
    ///
    /// No connection is opened here; the first send connects.
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.smtp_host.trim().is_empty() {
            return Err(InfrastructureError::Config("SMTP host is not set".to_string()));
        }

        let from = config.from_address.parse::<Mailbox>().map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid sender address '{}': {}",
                config.from_address, e
            ))
        })?;

        let host = config.smtp_host.as_str();
        let builder = match config.smtp_security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(host),
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host),
            SmtpSecurity::Plain => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)),
        }
        .map_err(|e| InfrastructureError::Config(format!("Invalid TLS setup for '{}': {}", host, e)))?;

        let mut builder = builder
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            if config.smtp_security == SmtpSecurity::Plain {
                warn!(
                    provider = "smtp",
                    host = %config.smtp_host,
                    "SMTP credentials will be sent without encryption"
                );
            }
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        info!(
            provider = "smtp",
            host = %config.smtp_host,
            port = config.smtp_port,
            security = ?config.smtp_security,
            "SMTP mail service configured"
        );

        Ok(Self {
            transport: builder.build(),
            from,
            security: config.smtp_security,
        })
    }

    pub fn security(&self) -> SmtpSecurity {
        self.security
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, InfrastructureError> {
        let recipient = to.parse::<Mailbox>().map_err(|e| {
            InfrastructureError::Mail(format!("Invalid recipient address: {}", e))
        })?;

        Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let message = self.build_message(to, subject, body)?;

        debug!(provider = "smtp", email = %mask_email(to), "Sending mail");

        match self.transport.send(message).await {
            Ok(response) => {
                let message_id = response
                    .message()
                    .next()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("smtp_{}", Uuid::new_v4()));

                info!(
                    target: "mail_service",
                    provider = "smtp",
                    email = %mask_email(to),
                    message_id = %message_id,
                    "Mail sent successfully"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    target: "mail_service",
                    provider = "smtp",
                    email = %mask_email(to),
                    error = %e,
                    permanent = e.is_permanent(),
                    "SMTP relay did not accept the mail"
                );
                Err(InfrastructureError::Mail(format!("SMTP send failed: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
