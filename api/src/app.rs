//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpRequest, HttpResponse,
};
use ov_core::services::{RateLimitStore, RateLimiter, VerificationService};
use ov_shared::config::AppConfig;
use ov_shared::errors::NotFoundResponse;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::middleware::{create_cors, SecurityHeaders, VerifyRateLimit};
use crate::routes::{health_check, verify_code};

/// Shared state handed to every worker
pub struct AppState {
    pub verification: Arc<VerificationService>,
    pub rate_limiter: Arc<RateLimiter>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services from configuration around an already built counter store
    pub fn new(config: AppConfig, store: Arc<dyn RateLimitStore>) -> Self {
        let verification = VerificationService::new(config.verification.clone());
        let rate_limiter = RateLimiter::new(store, config.rate_limit.clone());
        Self {
            verification: Arc::new(verification),
            rate_limiter: Arc::new(rate_limiter),
            config: Arc::new(config),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let config = Arc::clone(&app_state.config);
    let rate_limit = VerifyRateLimit::new(
        Arc::clone(&app_state.rate_limiter),
        config.server.trust_proxy,
        config.environment,
    );
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Middleware runs bottom-up: security headers, CORS, then request spans
        .wrap(SecurityHeaders::for_environment(config.environment))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope(&config.server.api_prefix).service(
                web::resource("/verify")
                    .route(web::post().to(verify_code).wrap(rate_limit))
                    .default_service(web::to(not_found)),
            ),
        )
        // Default 404 handler
        .default_service(web::to(not_found))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    HttpResponse::NotFound().json(NotFoundResponse::for_path(path))
}
