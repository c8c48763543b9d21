//! Business services containing domain logic and use cases.

pub mod rate_limit;
pub mod verification;

// Re-export commonly used types
pub use rate_limit::{RateLimitDecision, RateLimitHit, RateLimitStore, RateLimiter};
pub use verification::{VerificationService, VerifyCodeResult, VERIFICATION_SUCCESS_MESSAGE};
