//! Fixed-window rate limiter

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use ov_shared::config::RateLimitConfig;

use crate::errors::{DomainError, DomainResult};

use super::store::RateLimitStore;

/// Quota state returned for an admitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Requests allowed per window
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// When the current window ends
    pub reset_at: DateTime<Utc>,
}

/// Rate limiter keyed by client address
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn window(&self) -> Duration {
        let seconds = i64::try_from(self.config.window_seconds).unwrap_or(i64::MAX);
        Duration::seconds(seconds.min(i64::MAX / 1000))
    }

    fn key_for(&self, client: &str) -> String {
        format!("{}:{}", self.config.key_prefix, client)
    }

    /// Count a request from `client` against its quota
    pub async fn check(&self, client: &str) -> DomainResult<RateLimitDecision> {
        self.check_at(client, Utc::now()).await
    }

    /// Same as [`check`](Self::check) with an explicit clock
    pub async fn check_at(
        &self,
        client: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<RateLimitDecision> {
        let limit = self.config.max_requests;
        if !self.config.enabled {
            return Ok(RateLimitDecision {
                limit,
                remaining: limit,
                reset_at: now,
            });
        }

        let hit = self
            .store
            .hit(&self.key_for(client), self.window(), now)
            .await
            .map_err(|e| DomainError::internal(format!("Rate limit store error: {}", e)))?;

        if hit.count > u64::from(limit) {
            tracing::warn!(
                client = %client,
                count = hit.count,
                limit,
                reset_at = %hit.reset_at,
                "Verification rate limit exceeded"
            );
            return Err(DomainError::RateLimited {
                limit,
                reset_at: hit.reset_at,
                retry_after: self.format_retry_time(hit.reset_at),
            });
        }

        let remaining = u32::try_from(u64::from(limit) - hit.count).unwrap_or(0);
        Ok(RateLimitDecision {
            limit,
            remaining,
            reset_at: hit.reset_at,
        })
    }

    /// Clear the quota for `client`
    pub async fn reset(&self, client: &str) -> DomainResult<()> {
        self.store
            .reset(&self.key_for(client))
            .await
            .map_err(|e| DomainError::internal(format!("Rate limit store error: {}", e)))
    }

    /// Render `at` as 12-hour clock time in the configured display offset
    pub fn format_retry_time(&self, at: DateTime<Utc>) -> String {
        let offset = FixedOffset::east_opt(self.config.display_utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix());
        at.with_timezone(&offset).format("%I:%M %p").to_string()
    }
}
