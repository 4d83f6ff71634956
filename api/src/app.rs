//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`].

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use vs_core::services::verification::{CacheServiceTrait, MailServiceTrait};

use crate::routes::health::health_check;
use crate::routes::verify::get_verify_code;

pub use crate::routes::verify::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<C, M>(
    app_state: web::Data<AppState<C, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CacheServiceTrait + 'static,
    M: MailServiceTrait + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        // One span per request
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check::<C, M>))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/verify")
                    .route("/get-verify-code", web::post().to(get_verify_code::<C, M>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
