//! Tests for the mock mail service and provider selection

use vs_shared::config::{MailConfig, MailProvider, SmtpSecurity};

use crate::mail::{create_mail_service, verification_body, MailService, MockMailService, VERIFICATION_SUBJECT};

#[tokio::test]
async fn test_mock_mail_send_success() {
    let service = MockMailService::new();

    let message_id = service
        .send_mail("user@example.com", "Subject", "Body")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    let sent = service.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "user@example.com");
    assert_eq!(sent[0].subject, "Subject");
}

#[tokio::test]
async fn test_mock_mail_simulated_failure() {
    let service = MockMailService::new();
    service.set_simulate_failure(true);

    let result = service.send_mail("user@example.com", "Subject", "Body").await;

    assert!(result.is_err());
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent().is_empty());
}

#[tokio::test]
async fn test_verification_mail_uses_fixed_template() {
    let service = MockMailService::new();

    service
        .send_verification_code("user@example.com", "abc123")
        .await
        .unwrap();

    let sent = service.sent();
    assert_eq!(sent[0].subject, VERIFICATION_SUBJECT);
    assert_eq!(sent[0].body, verification_body("abc123"));
}

#[tokio::test]
async fn test_clones_share_outbox() {
    let service = MockMailService::new();
    let clone = service.clone();

    clone.send_mail("a@example.com", "s", "b").await.unwrap();

    assert_eq!(service.get_message_count(), 1);
    service.reset();
    assert_eq!(clone.get_message_count(), 0);
    assert!(clone.sent().is_empty());
}

#[test]
fn test_body_states_ten_minute_window() {
    let body = verification_body("abc123");

    assert!(body.contains("abc123"));
    assert!(body.contains("10 minutes"));
    assert!(body.contains("10 分钟"));
}

#[test]
fn test_create_mock_provider() {
    let config = MailConfig::default();

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_smtp_without_host_falls_back_to_mock() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp_host: String::new(),
        ..MailConfig::default()
    };

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[cfg(feature = "smtp-mail")]
#[tokio::test]
async fn test_smtp_with_host_is_selected() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp_host: "localhost".to_string(),
        ..MailConfig::default()
    };

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "SMTP");
}

#[cfg(feature = "smtp-mail")]
#[test]
fn test_smtp_with_invalid_sender_falls_back_to_mock() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp_host: "localhost".to_string(),
        from_address: "not an address".to_string(),
        ..MailConfig::default()
    };

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[cfg(feature = "smtp-mail")]
#[tokio::test]
async fn test_smtp_is_selected_for_every_security_mode() {
    for security in [SmtpSecurity::Tls, SmtpSecurity::StartTls, SmtpSecurity::Plain] {
        let config = MailConfig {
            provider: MailProvider::Smtp,
            smtp_host: "smtp.example.com".to_string(),
            smtp_security: security,
            smtp_port: security.default_port(),
            smtp_username: Some("mailer".to_string()),
            smtp_password: Some("secret".to_string()),
            ..MailConfig::default()
        };

        let service = create_mail_service(&config);
        assert_eq!(service.provider_name(), "SMTP", "security {:?}", security);
    }
}

#[cfg(feature = "smtp-mail")]
#[tokio::test]
async fn test_smtp_transport_keeps_configured_security() {
    use crate::mail::SmtpMailService;

    let config = MailConfig {
        provider: MailProvider::Smtp,
        smtp_host: "smtp.example.com".to_string(),
        smtp_security: SmtpSecurity::Tls,
        smtp_port: 465,
        ..MailConfig::default()
    };
    let service = SmtpMailService::new(&config).unwrap();
    assert_eq!(service.security(), SmtpSecurity::Tls);

    let service = SmtpMailService::new(&MailConfig { smtp_security: SmtpSecurity::default(), ..config }).unwrap();
    assert_eq!(service.security(), SmtpSecurity::StartTls);
}
