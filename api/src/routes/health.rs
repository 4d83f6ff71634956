use actix_web::{web, HttpResponse};

use vs_core::services::verification::{CacheServiceTrait, MailServiceTrait};

use crate::dto::HealthResponse;
use crate::routes::verify::AppState;

/// Health check endpoint handler
///
/// Reports `503` when the cache backend does not answer.
pub async fn health_check<C, M>(state: web::Data<AppState<C, M>>) -> HttpResponse
where
    C: CacheServiceTrait + 'static,
    M: MailServiceTrait + 'static,
{
    let cache_healthy = state.verification_service.cache_healthy().await;
    let body = HealthResponse::new(cache_healthy);

    if cache_healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
