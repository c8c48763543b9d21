//! Counter storage trait for the rate limiter

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// Counter state after recording one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitHit {
    /// Requests recorded in the current window, this one included
    pub count: u64,
    /// When the current window ends
    pub reset_at: DateTime<Utc>,
}

/// Fixed-window counter storage.
///
/// A window starts with the first request for a key and lasts `window`;
/// every request inside it increments the same counter.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Record one request for `key` and return the updated counter
    async fn hit(&self, key: &str, window: Duration, now: DateTime<Utc>)
        -> Result<RateLimitHit, String>;

    /// Forget the counter for `key`
    async fn reset(&self, key: &str) -> Result<(), String>;
}
