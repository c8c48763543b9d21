//! Client configuration

use std::env;
use std::time::Duration;

use ov_shared::config::ConfigSource;

/// Default base URL of the verification API
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the `/verify` path is appended to
    pub api_url: String,

    /// Whole-request timeout
    pub timeout: Duration,

    /// Pause between showing success and navigating away
    pub transition_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            transition_delay: Duration::from_millis(400),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Load from `OTP_API_URL`, `OTP_API_TIMEOUT_MS` and `OTP_TRANSITION_DELAY_MS`
    pub fn from_env() -> Self {
        Self::from_source(&|key| env::var(key).ok())
    }

    pub fn from_source(source: ConfigSource<'_>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str| {
            source(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
        };
        Self {
            api_url: source("OTP_API_URL")
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            timeout: millis("OTP_API_TIMEOUT_MS").unwrap_or(defaults.timeout),
            transition_delay: millis("OTP_TRANSITION_DELAY_MS")
                .unwrap_or(defaults.transition_delay),
        }
    }

    /// Full URL of the verify endpoint
    pub fn verify_url(&self) -> String {
        format!("{}/verify", self.api_url.trim_end_matches('/'))
    }
}
