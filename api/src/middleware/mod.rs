pub mod client_ip;
pub mod cors;
pub mod rate_limit;
pub mod security;

pub use cors::create_cors;
pub use rate_limit::VerifyRateLimit;
pub use security::SecurityHeaders;
