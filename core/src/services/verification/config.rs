//! Configuration for the verification service

use vs_shared::config::VerificationConfig;

pub use vs_shared::config::{DeliveryPolicy, IssuanceStrategy};

/// Configuration for the verification service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// How a fresh code is written on a cache miss
    pub strategy: IssuanceStrategy,
    /// Whether a rejected delivery changes the response
    pub delivery_policy: DeliveryPolicy,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            strategy: IssuanceStrategy::CheckThenSet,
            delivery_policy: DeliveryPolicy::BestEffort,
        }
    }
}

impl From<VerificationConfig> for VerificationServiceConfig {
    fn from(config: VerificationConfig) -> Self {
        Self {
            strategy: config.strategy,
            delivery_policy: config.delivery_policy,
        }
    }
}
