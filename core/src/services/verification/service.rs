//! Issuance coordinator for email verification codes

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use vs_shared::mask_email;

use crate::domain::entities::verification_code::{code_key, VerificationRecord};
use crate::domain::value_objects::{VerificationRequest, VerificationResponse};
use crate::errors::{CacheError, IssuanceError, IssuanceResult};

use super::config::{DeliveryPolicy, IssuanceStrategy, VerificationServiceConfig};
use super::generator::UuidCodeGenerator;
use super::traits::{CacheServiceTrait, CodeGenerator, MailServiceTrait, StoreOutcome};

/// Verification service issuing codes to email addresses
///
/// A second request for the same address while its record is alive gets the
/// same code again. Every outcome, including collaborator panics, ends up in
/// the response's error code.
pub struct VerificationService<C, M, G = UuidCodeGenerator>
where
    C: CacheServiceTrait,
    M: MailServiceTrait,
    G: CodeGenerator,
{
    /// Cache gateway holding the live records
    cache_service: Arc<C>,
    /// Mail gateway delivering the codes
    mail_service: Arc<M>,
    /// Source of fresh codes
    code_generator: G,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<C, M> VerificationService<C, M, UuidCodeGenerator>
where
    C: CacheServiceTrait,
    M: MailServiceTrait,
{
    /// Create a new verification service issuing UUID codes
    ///
    /// # Arguments
    ///
    /// * `cache_service` - Cache gateway implementation
    /// * `mail_service` - Mail gateway implementation
    /// * `config` - Service configuration
    pub fn new(
        cache_service: Arc<C>,
        mail_service: Arc<M>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self::with_generator(cache_service, mail_service, UuidCodeGenerator::new(), config)
    }
}

impl<C, M, G> VerificationService<C, M, G>
where
    C: CacheServiceTrait,
    M: MailServiceTrait,
    G: CodeGenerator,
{
    /// Create a verification service with a custom code generator
    pub fn with_generator(
        cache_service: Arc<C>,
        mail_service: Arc<M>,
        code_generator: G,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            cache_service,
            mail_service,
            code_generator,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Handle a `GetVerifyCode` request
    pub async fn get_verify_code(&self, request: VerificationRequest) -> VerificationResponse {
        self.issue(&request.email).await
    }

    /// Issue (or re-issue) a verification code for `email`
    ///
    /// This method:
    /// 1. Looks up a live code under `code_` + email
    /// 2. On a miss, generates a code and stores it for 600 seconds
    /// 3. Sends the code by mail
    ///
    /// A cache fault aborts before anything is sent. No step is retried.
    ///
    /// # Returns
    ///
    /// The response echoing `email` with the outcome's error code. This
    /// method never fails.
    pub async fn issue(&self, email: &str) -> VerificationResponse {
        let result = match AssertUnwindSafe(self.try_issue(email)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(IssuanceError::Panicked {
                message: panic_message(panic.as_ref()),
            }),
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    email = %mask_email(email),
                    event = "code_issued",
                    "Verification code issued"
                );
                VerificationResponse::success(email)
            }
            Err(error) => {
                let error_code = error.error_code();
                tracing::error!(
                    email = %mask_email(email),
                    error = %error,
                    error_code = %error_code,
                    event = "code_issue_failed",
                    "Verification code issuance failed"
                );
                VerificationResponse::new(email, error_code)
            }
        }
    }

    /// Check whether `email` currently has a live code
    pub async fn has_live_code(&self, email: &str) -> Result<bool, CacheError> {
        self.cache_service.exists(&code_key(email)).await
    }

    /// Remaining lifetime of the live code for `email`, in seconds
    pub async fn code_ttl(&self, email: &str) -> Result<Option<u64>, CacheError> {
        self.cache_service.ttl(&code_key(email)).await
    }

    /// Whether the cache backend answers
    pub async fn cache_healthy(&self) -> bool {
        match self.cache_service.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::warn!(error = %e, event = "cache_health_failed", "Cache health check failed");
                false
            }
        }
    }

    async fn try_issue(&self, email: &str) -> IssuanceResult<()> {
        if email.is_empty() {
            return Err(IssuanceError::InvalidRequest {
                message: "email is empty".to_string(),
            });
        }

        let code = self.resolve_code(email).await?;
        self.deliver(email, &code).await
    }

    /// Find the live code for `email` or create and persist a new one
    async fn resolve_code(&self, email: &str) -> IssuanceResult<String> {
        let key = code_key(email);

        if let Some(existing) = self.cache_service.lookup(&key).await? {
            tracing::debug!(
                email = %mask_email(email),
                event = "code_reused",
                "Reusing live verification code"
            );
            return Ok(existing);
        }

        let record = VerificationRecord::new(email, self.code_generator.new_code()?);

        match self.config.strategy {
            IssuanceStrategy::CheckThenSet => {
                self.cache_service
                    .store_with_ttl(&record.key, &record.code, record.ttl_seconds)
                    .await?;
            }
            IssuanceStrategy::SetIfAbsent => {
                let outcome = self
                    .cache_service
                    .store_if_absent(&record.key, &record.code, record.ttl_seconds)
                    .await?;
                if let StoreOutcome::Existing(winner) = outcome {
                    // A concurrent call stored first; deliver its code
                    tracing::debug!(
                        email = %mask_email(email),
                        event = "code_store_lost_race",
                        "Concurrent issuance stored first, reusing its code"
                    );
                    return Ok(winner);
                }
            }
        }

        tracing::debug!(
            email = %mask_email(email),
            ttl_seconds = record.ttl_seconds,
            event = "code_stored",
            "Stored new verification code"
        );
        Ok(record.code)
    }

    async fn deliver(&self, email: &str, code: &str) -> IssuanceResult<()> {
        match self.mail_service.send_verification_code(email, code).await {
            Ok(message_id) => {
                tracing::debug!(
                    email = %mask_email(email),
                    message_id = %message_id,
                    event = "code_delivered",
                    "Verification mail sent"
                );
                Ok(())
            }
            Err(e) if e.is_rejection() && self.config.delivery_policy == DeliveryPolicy::BestEffort => {
                tracing::warn!(
                    email = %mask_email(email),
                    error = %e,
                    event = "code_delivery_failed",
                    "Verification mail was not delivered; reporting success"
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
