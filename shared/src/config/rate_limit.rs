//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

use super::{flag_or, parse_or, ConfigSource};

/// Fixed-window quota applied per client address on the verify endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Requests allowed per address per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// UTC offset (minutes) used to render the retry-after time
    #[serde(default = "default_display_offset")]
    pub display_utc_offset_minutes: i32,

    /// Redis URL for shared counters; in-memory counters when absent
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Key prefix for stored counters
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            display_utc_offset_minutes: default_display_offset(),
            redis_url: None,
            key_prefix: default_key_prefix(),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_seconds: u64) -> Self {
        Self {
            max_requests,
            window_seconds,
            ..Default::default()
        }
    }

    pub fn from_source(source: ConfigSource<'_>) -> Self {
        let defaults = Self::default();
        Self {
            enabled: flag_or(source, "RATE_LIMIT_ENABLED", defaults.enabled),
            max_requests: parse_or(source, "RATE_LIMIT_MAX_REQUESTS", defaults.max_requests),
            window_seconds: parse_or(source, "RATE_LIMIT_WINDOW_SECONDS", defaults.window_seconds),
            display_utc_offset_minutes: parse_or(
                source,
                "RATE_LIMIT_DISPLAY_UTC_OFFSET_MINUTES",
                defaults.display_utc_offset_minutes,
            ),
            redis_url: source("REDIS_URL").filter(|url| !url.trim().is_empty()),
            key_prefix: source("RATE_LIMIT_KEY_PREFIX").unwrap_or(defaults.key_prefix),
        }
    }

    /// Disabled limiter, used by tests that exercise the verify flow only
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_requests() -> u32 {
    10
}

fn default_window_seconds() -> u64 {
    15 * 60 // 15 minutes
}

fn default_display_offset() -> i32 {
    5 * 60 + 45 // UTC+05:45
}

fn default_key_prefix() -> String {
    String::from("rate_limit:verify")
}
