//! Counter stores backing [`ov_core::services::RateLimiter`]

mod memory;
#[cfg(feature = "redis-store")]
mod redis_store;

#[cfg(test)]
mod tests;

pub use memory::InMemoryRateLimitStore;
#[cfg(feature = "redis-store")]
pub use redis_store::RedisRateLimitStore;
