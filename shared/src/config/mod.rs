//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `rate_limit` - Per-address request quota for the verify endpoint
//! - `server` - HTTP server and CORS configuration
//! - `verification` - The domain rule applied to well-formed codes
//!
//! Every section can be built from the process environment (`from_env`) or
//! from an arbitrary key lookup (`from_source`), which keeps tests free of
//! global environment mutation.

pub mod environment;
pub mod rate_limit;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use rate_limit::RateLimitConfig;
pub use server::{CorsConfig, ServerConfig};
pub use verification::{VerificationConfig, CODE_LENGTH};

/// Key lookup used by every `from_source` constructor
pub type ConfigSource<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Parse a value from the source, falling back to `default` when it is
/// missing or malformed
pub(crate) fn parse_or<T: FromStr>(source: ConfigSource<'_>, key: &str, default: T) -> T {
    source(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean flag accepting `true/false`, `1/0`, `yes/no`
pub(crate) fn flag_or(source: ConfigSource<'_>, key: &str, default: bool) -> bool {
    match source(key).map(|value| value.trim().to_lowercase()) {
        Some(value) if matches!(value.as_str(), "true" | "1" | "yes" | "on") => true,
        Some(value) if matches!(value.as_str(), "false" | "0" | "no" | "off") => false,
        _ => default,
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Domain rule configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            cors: CorsConfig::development(),
            rate_limit: RateLimitConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            rate_limit: RateLimitConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_source(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source(source: ConfigSource<'_>) -> Self {
        let environment = Environment::from_source(source);
        Self {
            environment,
            server: ServerConfig::from_source(source),
            cors: CorsConfig::from_source(source, environment),
            rate_limit: RateLimitConfig::from_source(source),
            verification: VerificationConfig::from_source(source),
            logging: LoggingConfig::from_source(source, environment),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
