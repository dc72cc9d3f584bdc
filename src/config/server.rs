//! HTTP listener settings for the quote service

use serde::{Deserialize, Deserializer};
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Origin of the local calculator form allowed by default.
pub const DEFAULT_FORM_ORIGIN: &str = "http://localhost:8501";

/// Where the service listens and how it treats requests.
///
/// | Key                    | Default                                           |
/// |------------------------|---------------------------------------------------|
/// | `host`                 | `0.0.0.0`                                         |
/// | `port`                 | `8080`                                            |
/// | `environment`          | `development`                                     |
/// | `log_level`            | `info,consilius_pricing=debug,tower_http=info`    |
/// | `request_timeout_secs` | `60` (PDF conversion runs inside the request)     |
/// | `cors_origins`         | `http://localhost:8501` (comma-separated list)    |
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects JSON logs in production
    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Browser origins allowed to call the API
    #[serde(
        default = "default_cors_origins",
        deserialize_with = "comma_separated"
    )]
    pub cors_origins: Vec<String>,
}

/// Deployment the service runs in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Port must be non-zero, the timeout within 1..=300 seconds, and every
    /// CORS origin an http(s) URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(ValidationError::InvalidCorsOrigin(origin.clone()));
        }
        self.bind_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,consilius_pricing=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_cors_origins() -> Vec<String> {
    vec![DEFAULT_FORM_ORIGIN.to_string()]
}

/// `"a, b,,c"` -> `["a", "b", "c"]`
fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect())
}
