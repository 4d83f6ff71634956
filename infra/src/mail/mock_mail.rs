//! Mock Mail Service Implementation
//!
//! Logs verification mails instead of sending them. Used in development and
//! whenever no SMTP relay is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use vs_shared::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// A mail recorded by [`MockMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock mail service for development and testing
///
/// Clones share the same counter and outbox.
#[derive(Clone, Default)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Every mail accepted so far
    outbox: Arc<Mutex<Vec<RecordedMail>>>,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter and outbox
    pub fn reset(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.clear();
        }
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Mails accepted so far, oldest first
    pub fn sent(&self) -> Vec<RecordedMail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                provider = "mock",
                email = %mask_email(to),
                "Mock mail service simulating failure"
            );
            return Err(InfrastructureError::Mail(
                "Simulated mail sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(RecordedMail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }

        info!(
            target: "mail_service",
            provider = "mock",
            email = %mask_email(to),
            message_id = %message_id,
            message_number = count,
            body_length = body.len(),
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
