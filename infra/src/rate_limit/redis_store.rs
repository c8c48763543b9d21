//! Redis-backed counter store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use ov_core::services::{RateLimitHit, RateLimitStore};
use redis::aio::MultiplexedConnection;

use crate::InfrastructureError;

/// Fixed-window counters shared through Redis.
///
/// Each key holds an integer counter whose expiry marks the end of the
/// window, so every process pointed at the same Redis shares one quota.
#[derive(Clone)]
pub struct RedisRateLimitStore {
    connection: MultiplexedConnection,
}

impl RedisRateLimitStore {
    pub async fn connect(url: &str) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self::new(connection))
    }

    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimitStore {
    async fn hit(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<RateLimitHit, String> {
        let mut conn = self.connection.clone();
        let window_ms = window.num_milliseconds().max(1);

        let count: u64 = redis::cmd("INCR")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Failed to increment counter: {}", e))?;

        if count == 1 {
            redis::cmd("PEXPIRE")
                .arg(key)
                .arg(window_ms)
                .query_async::<_, ()>(&mut conn)
                .await
                .map_err(|e| format!("Failed to set window expiry: {}", e))?;
        }

        let ttl_ms: i64 = redis::cmd("PTTL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Failed to read window expiry: {}", e))?;

        // Expiry lost between INCR and PEXPIRE; start the window over
        let ttl_ms = if ttl_ms < 0 {
            redis::cmd("PEXPIRE")
                .arg(key)
                .arg(window_ms)
                .query_async::<_, ()>(&mut conn)
                .await
                .map_err(|e| format!("Failed to set window expiry: {}", e))?;
            window_ms
        } else {
            ttl_ms
        };

        Ok(RateLimitHit {
            count,
            reset_at: now + Duration::milliseconds(ttl_ms),
        })
    }

    async fn reset(&self, key: &str) -> Result<(), String> {
        let mut conn = self.connection.clone();
        redis::cmd("DEL")
            .arg(key)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| format!("Failed to reset counter: {}", e))
    }
}
