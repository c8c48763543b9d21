//! # Infrastructure Layer
//!
//! Concrete counter stores for the verification rate limiter.
//!
//! ## Features
//!
//! - `redis-store`: Enable the Redis-backed store (default)

use std::sync::Arc;

use ov_core::services::RateLimitStore;
use ov_shared::config::RateLimitConfig;

/// Rate limit module - counter store implementations
pub mod rate_limit;

pub use rate_limit::InMemoryRateLimitStore;
#[cfg(feature = "redis-store")]
pub use rate_limit::RedisRateLimitStore;

/// Build the counter store selected by the configuration.
///
/// Counters go to Redis when a URL is configured, otherwise to process
/// memory. A configured but unreachable Redis is an error.
pub async fn build_store(
    config: &RateLimitConfig,
) -> Result<Arc<dyn RateLimitStore>, InfrastructureError> {
    match config.redis_url.as_deref() {
        #[cfg(feature = "redis-store")]
        Some(url) => {
            let store = RedisRateLimitStore::connect(url).await?;
            tracing::info!("Rate limit counters stored in Redis");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "redis-store"))]
        Some(_) => Err(InfrastructureError::Config(
            "REDIS_URL is set but the redis-store feature is disabled".to_string(),
        )),
        None => {
            tracing::info!("Rate limit counters stored in memory");
            Ok(Arc::new(InMemoryRateLimitStore::new()))
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-store")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
