use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use suvidha_api::app;
use suvidha_api::handlers::not_found;
use suvidha_api::middleware::{create_cors, RequestIdRootSpan};
use suvidha_api::routes::AppState;
use suvidha_api::telemetry::init_tracing;
use suvidha_core::services::{VerificationProvider, VerificationService, VerificationServiceConfig};
use suvidha_infra::create_verification_provider;
use suvidha_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        provider = %config.verification.provider,
        "Starting Jan Suvidha verification API"
    );

    let provider = create_verification_provider(&config.verification)
        .context("failed to initialize verification provider")?;
    let service: Arc<VerificationService<dyn VerificationProvider>> = Arc::new(
        VerificationService::new(provider, VerificationServiceConfig::from(&config.verification)),
    );
    let state = web::Data::new(AppState::new(service));

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(create_cors(&cors_config))
            .wrap(TracingLogger::<RequestIdRootSpan>::new())
            .configure(app::configure(state.clone(), max_payload_size))
            .default_service(web::route().to(not_found))
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    tracing::info!(address = %bind_address, "Server listening");

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
