//! Shared helpers for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use ov_api::AppState;
use ov_infra::InMemoryRateLimitStore;
use ov_shared::config::{AppConfig, RateLimitConfig};

pub const VERIFY_PATH: &str = "/api/v1/verify";

/// Production configuration with a quota of `max_requests` per 15 minutes
pub fn config_with_limit(max_requests: u32) -> AppConfig {
    let mut config = AppConfig::production();
    config.rate_limit = RateLimitConfig::new(max_requests, 900);
    config
}

/// Production configuration with rate limiting switched off
pub fn config_without_limit() -> AppConfig {
    let mut config = AppConfig::production();
    config.rate_limit = RateLimitConfig::disabled();
    config
}

pub fn app_state(config: AppConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        config,
        Arc::new(InMemoryRateLimitStore::new()),
    ))
}

pub fn verify_body(code: &str) -> serde_json::Value {
    serde_json::json!({ "code": code })
}

pub async fn read_json<B>(response: ServiceResponse<B>) -> serde_json::Value
where
    B: MessageBody,
{
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
