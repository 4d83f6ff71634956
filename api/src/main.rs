use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use vs_api::{create_app, telemetry, AppState};
use vs_core::services::verification::{
    CacheServiceTrait, VerificationService, VerificationServiceConfig,
};
use vs_infra::cache::{MemoryCache, RedisClient, RedisVerificationCache};
use vs_infra::mail::{create_mail_service, MailService, MailServiceAdapter};
use vs_shared::config::{AppConfig, CacheBackend, Environment};

type MailGateway = MailServiceAdapter<dyn MailService>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables: the environment-specific file first, then `.env`
    let environment = Environment::from_env().context("invalid ENVIRONMENT")?;
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        strategy = ?config.verification.strategy,
        delivery_policy = ?config.verification.delivery_policy,
        "Starting VerifyServer"
    );

    let mail = Arc::new(MailServiceAdapter::new(create_mail_service(&config.mail)));
    tracing::info!(provider = mail.provider_name(), "Mail service ready");
    if config.environment.is_production() && mail.provider_name() == "Mock" {
        tracing::warn!("Mock mail service in production; no verification mail will be delivered");
    }

    match config.cache.backend {
        CacheBackend::Redis => {
            let client = RedisClient::new(&config.cache)
                .await
                .context("failed to connect to Redis")?;
            let cache = Arc::new(RedisVerificationCache::new(client));
            serve(&config, cache, mail).await
        }
        CacheBackend::Memory => {
            if config.environment.is_production() {
                tracing::warn!("In-memory cache in production; codes are not shared between instances");
            }
            tracing::warn!("Using in-memory cache; codes are lost on restart");
            serve(&config, Arc::new(MemoryCache::new()), mail).await
        }
    }
}

async fn serve<C>(config: &AppConfig, cache: Arc<C>, mail: Arc<MailGateway>) -> anyhow::Result<()>
where
    C: CacheServiceTrait + 'static,
{
    let verification_service = Arc::new(VerificationService::new(
        cache,
        mail,
        VerificationServiceConfig::from(config.verification),
    ));
    let app_state = web::Data::new(
        AppState::new(verification_service).with_max_payload_size(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let server_config = config.server.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .keep_alive(std::time::Duration::from_secs(server_config.keep_alive))
        .shutdown_timeout(server_config.shutdown_timeout)
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.run().await.context("server terminated with an error")?;

    tracing::info!("Server stopped, releasing cache and mail clients");
    Ok(())
}
