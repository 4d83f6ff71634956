use actix_web::error::PayloadError;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use std::sync::Arc;

use vs_core::domain::value_objects::ErrorCode;
use vs_core::services::verification::{CacheServiceTrait, MailServiceTrait, VerificationService};
use vs_shared::config::DEFAULT_MAX_PAYLOAD_SIZE;
use vs_shared::mask_email;

use crate::dto::verify::{GetVerifyCodeRequest, GetVerifyCodeResponse};

/// Application state that holds shared services
pub struct AppState<C, M>
where
    C: CacheServiceTrait,
    M: MailServiceTrait,
{
    pub verification_service: Arc<VerificationService<C, M>>,

    /// Largest request body read before the request is refused
    pub max_payload_size: usize,
}

impl<C, M> AppState<C, M>
where
    C: CacheServiceTrait,
    M: MailServiceTrait,
{
    pub fn new(verification_service: Arc<VerificationService<C, M>>) -> Self {
        Self {
            verification_service,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }
}

enum BodyRejection {
    Oversized,
    Unreadable(PayloadError),
}

/// Read the whole body, stopping as soon as it grows past `limit`
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, BodyRejection> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(BodyRejection::Unreadable)?;
        if body.len() + chunk.len() > limit {
            return Err(BodyRejection::Oversized);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Handler for POST /api/v1/verify/get-verify-code
///
/// Issues (or re-sends) a verification code to the given address.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// Always `200 OK`; the outcome is carried in `error`
/// (0 success, 1 cache error, 2 exception, 3 delivery error).
///
/// ```json
/// { "email": "user@example.com", "error": 0 }
/// ```
///
/// A body that is not a JSON object with a string `email`, or that is larger
/// than [`AppState::max_payload_size`], is answered with `error: 2` and an
/// empty `email`.
pub async fn get_verify_code<C, M>(
    state: web::Data<AppState<C, M>>,
    payload: web::Payload,
) -> HttpResponse
where
    C: CacheServiceTrait + 'static,
    M: MailServiceTrait + 'static,
{
    let body = match read_body(payload, state.max_payload_size).await {
        Ok(body) => body,
        Err(BodyRejection::Oversized) => {
            tracing::warn!(
                limit = state.max_payload_size,
                event = "oversized_request",
                "Rejecting get-verify-code request body over the size limit"
            );
            return HttpResponse::Ok().json(GetVerifyCodeResponse::new("", ErrorCode::Exception));
        }
        Err(BodyRejection::Unreadable(e)) => {
            tracing::warn!(
                error = %e,
                event = "unreadable_request",
                "Failed to read get-verify-code request body"
            );
            return HttpResponse::Ok().json(GetVerifyCodeResponse::new("", ErrorCode::Exception));
        }
    };

    let request = match serde_json::from_slice::<GetVerifyCodeRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(
                error = %e,
                body_length = body.len(),
                event = "malformed_request",
                "Rejecting unparseable get-verify-code request"
            );
            return HttpResponse::Ok().json(GetVerifyCodeResponse::new("", ErrorCode::Exception));
        }
    };

    tracing::info!(
        email = %mask_email(&request.email),
        event = "get_verify_code",
        "Processing get-verify-code request"
    );

    let response = state.verification_service.get_verify_code(request).await;
    HttpResponse::Ok().json(response)
}
