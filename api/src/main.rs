use actix_web::{web, HttpServer};
use anyhow::Context;
use ov_api::{create_app, telemetry, AppState};
use ov_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        "Starting OTP verification API"
    );

    let store = ov_infra::build_store(&config.rate_limit)
        .await
        .context("Failed to initialize rate limit store")?;

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let app_state = web::Data::new(AppState::new(config, store));

    tracing::info!(
        address = %bind_address,
        prefix = %app_state.config.server.api_prefix,
        rate_limit_enabled = app_state.config.rate_limit.enabled,
        "Server will bind to address"
    );

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
