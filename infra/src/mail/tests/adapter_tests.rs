//! Tests for the core trait adapter

use vs_core::services::verification::MailServiceTrait;

use crate::mail::adapter::{to_delivery_error, MailServiceAdapter};
use crate::mail::{MailService, MockMailService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_adapter_delivers_through_inner_service() {
    let mock = MockMailService::new();
    let adapter = MailServiceAdapter::new(Box::new(mock.clone()));

    let message_id = adapter
        .send_verification_code("user@example.com", "abc123")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(adapter.provider_name(), "Mock");
    assert!(mock.sent()[0].body.contains("abc123"));
}

#[tokio::test]
async fn test_adapter_over_trait_object() {
    let boxed: Box<dyn MailService> = Box::new(MockMailService::new());
    let adapter = MailServiceAdapter::new(boxed);

    assert!(adapter
        .send_verification_code("user@example.com", "abc123")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_send_failure_is_a_rejection() {
    let mock = MockMailService::new();
    mock.set_simulate_failure(true);
    let adapter = MailServiceAdapter::new(Box::new(mock));

    let error = adapter
        .send_verification_code("user@example.com", "abc123")
        .await
        .unwrap_err();

    assert!(error.is_rejection());
}

#[test]
fn test_non_mail_failure_is_unexpected() {
    let error = to_delivery_error(InfrastructureError::Config("broken".to_string()));
    assert!(!error.is_rejection());

    let error = to_delivery_error(InfrastructureError::Mail("550".to_string()));
    assert!(error.is_rejection());
}
