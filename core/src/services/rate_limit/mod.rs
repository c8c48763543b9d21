//! Per-client request quota for the verify endpoint
//!
//! Counters live behind [`RateLimitStore`] so the same limiter runs against
//! process memory or a shared Redis instance.

mod limiter;
mod store;


pub use limiter::{RateLimitDecision, RateLimiter};
pub use store::{RateLimitHit, RateLimitStore};
