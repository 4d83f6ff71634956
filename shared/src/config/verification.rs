//! Verification code issuance policy configuration

use serde::{Deserialize, Serialize};

use super::{parse_env, ConfigError};

/// How a code is persisted when no live record exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssuanceStrategy {
    /// Lookup, then store on miss. Two concurrent first calls for the same
    /// address can both store; the last write wins.
    CheckThenSet,
    /// One atomic "set with TTL if absent, else return existing" round-trip.
    SetIfAbsent,
}

impl std::str::FromStr for IssuanceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "check-then-set" => Ok(IssuanceStrategy::CheckThenSet),
            "set-if-absent" => Ok(IssuanceStrategy::SetIfAbsent),
            _ => Err(format!("Invalid issuance strategy: {}", s)),
        }
    }
}

/// Whether a failed delivery changes the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPolicy {
    /// A rejected delivery is logged and the call still reports success.
    BestEffort,
    /// A rejected delivery is reported as `DELIVERY_ERROR`.
    Strict,
}

impl std::str::FromStr for DeliveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best-effort" => Ok(DeliveryPolicy::BestEffort),
            "strict" => Ok(DeliveryPolicy::Strict),
            _ => Err(format!("Invalid delivery policy: {}", s)),
        }
    }
}

/// Issuance policy settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationConfig {
    #[serde(default = "default_strategy")]
    pub strategy: IssuanceStrategy,

    #[serde(default = "default_delivery_policy")]
    pub delivery_policy: DeliveryPolicy,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            delivery_policy: default_delivery_policy(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    ///
    /// A value that names no known strategy or policy is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            strategy: parse_env("VERIFY_ISSUANCE_STRATEGY")?.unwrap_or_else(default_strategy),
            delivery_policy: parse_env("VERIFY_DELIVERY_POLICY")?.unwrap_or_else(default_delivery_policy),
        })
    }
}

fn default_strategy() -> IssuanceStrategy {
    IssuanceStrategy::CheckThenSet
}

fn default_delivery_policy() -> DeliveryPolicy {
    DeliveryPolicy::BestEffort
}
