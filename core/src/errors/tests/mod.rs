//! Unit tests for the issuance error taxonomy

use crate::domain::value_objects::ErrorCode;
use crate::errors::{CacheError, DeliveryError, GeneratorError, IssuanceError};

#[test]
fn test_cache_error_maps_to_cache_error_code() {
    let error: IssuanceError = CacheError::new("connection refused").into();
    assert_eq!(error.error_code(), ErrorCode::CacheError);
    assert_eq!(error.to_string(), "Cache error: connection refused");
}

#[test]
fn test_generator_error_maps_to_exception() {
    let error: IssuanceError = GeneratorError::new("entropy source unavailable").into();
    assert_eq!(error.error_code(), ErrorCode::Exception);
}

#[test]
fn test_delivery_errors_are_distinguished() {
    let rejected: IssuanceError = DeliveryError::rejected("550 mailbox unavailable").into();
    assert_eq!(rejected.error_code(), ErrorCode::DeliveryError);

    let unexpected: IssuanceError = DeliveryError::unexpected("malformed reply").into();
    assert_eq!(unexpected.error_code(), ErrorCode::Exception);
}

#[test]
fn test_invalid_request_and_panic_map_to_exception() {
    let invalid = IssuanceError::InvalidRequest {
        message: "email is empty".to_string(),
    };
    assert_eq!(invalid.error_code(), ErrorCode::Exception);

    let panicked = IssuanceError::Panicked {
        message: "boom".to_string(),
    };
    assert_eq!(panicked.error_code(), ErrorCode::Exception);
}
