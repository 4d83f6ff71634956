//! Verification service module for email-based code issuance
//!
//! This module provides the issuance workflow:
//! - Reuse of a live code for the same address
//! - Code generation and cache persistence with a fixed TTL
//! - Delivery through the mail gateway
//! - Mapping of every outcome to a response error code

mod config;
mod generator;
mod service;
mod traits;


pub use config::{DeliveryPolicy, IssuanceStrategy, VerificationServiceConfig};
pub use generator::UuidCodeGenerator;
pub use service::VerificationService;
pub use traits::{CacheServiceTrait, CodeGenerator, MailServiceTrait, StoreOutcome};
