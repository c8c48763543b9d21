//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{flag_or, parse_or, ConfigSource, Environment};

/// Origin of the hosted code entry client
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://otp-code-henna.vercel.app";

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Path prefix the verification routes are mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client address
    #[serde(default)]
    pub trust_proxy: bool,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0,
            api_prefix: default_api_prefix(),
            trust_proxy: false,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_source(source: ConfigSource<'_>) -> Self {
        let defaults = Self::default();
        Self {
            host: source("HOST").unwrap_or(defaults.host),
            port: parse_or(source, "PORT", defaults.port),
            workers: parse_or(source, "WORKERS", defaults.workers),
            api_prefix: source("API_PREFIX")
                .map(|prefix| normalize_prefix(&prefix))
                .unwrap_or(defaults.api_prefix),
            trust_proxy: flag_or(source, "TRUST_PROXY", defaults.trust_proxy),
            max_payload_size: parse_or(source, "MAX_PAYLOAD_SIZE", defaults.max_payload_size),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age: 3600,
        }
    }

    /// `ALLOWED_ORIGINS` (comma separated) overrides the environment preset
    pub fn from_source(source: ConfigSource<'_>, env: Environment) -> Self {
        let preset = if env.is_development() {
            Self::development()
        } else {
            Self::default()
        };

        let allowed_origins = source("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(preset.allowed_origins);

        Self {
            allowed_origins,
            max_age: parse_or(source, "CORS_MAX_AGE", preset.max_age),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn default_api_prefix() -> String {
    String::from("/api/v1")
}

fn default_max_payload_size() -> usize {
    4 * 1024
}

fn default_max_age() -> usize {
    86400 // 24 hours
}
