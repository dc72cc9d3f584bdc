//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) using the `config` and `dotenvy` crates. Variables carry the
//! `CONSILIUS` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use consilius_pricing::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.bind_addr().unwrap());
//! ```

mod documents;
mod error;
mod pricing;
mod server;
mod storage;

pub use documents::DocumentsConfig;
pub use error::{ConfigError, ValidationError};
pub use pricing::PricingConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Margin bounds, surcharge bounds and multiplier tables
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Pandoc settings and proposal wording
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Quote log and catalog locations
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CONSILIUS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONSILIUS__PRICING__AVERAGE_MARGIN=0.12` -> `pricing.average_margin = 0.12`
    /// - `CONSILIUS__STORAGE__QUOTE_LOG_PATH=/data/log.csv`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSILIUS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.pricing.validate()?;
        self.documents.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 8] = [
        "CONSILIUS__SERVER__PORT",
        "CONSILIUS__SERVER__CORS_ORIGINS",
        "CONSILIUS__STORAGE__MAX_STORED_QUOTES",
        "CONSILIUS__SERVER__ENVIRONMENT",
        "CONSILIUS__PRICING__AVERAGE_MARGIN",
        "CONSILIUS__PRICING__SURCHARGE_MAX",
        "CONSILIUS__DOCUMENTS__DEFAULT_PROPOSER",
        "CONSILIUS__STORAGE__QUOTE_LOG_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:8501"]);
        assert_eq!(config.storage.max_stored_quotes, 1_000);
        assert_eq!(config.pricing, PricingConfig::default());
        assert_eq!(config.storage.quote_log_path, PathBuf::from("orcamentos_log.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pricing_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONSILIUS__PRICING__AVERAGE_MARGIN", "0.12");
        env::set_var("CONSILIUS__PRICING__SURCHARGE_MAX", "0.2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pricing.average_margin, 0.12);
        assert_eq!(config.pricing.surcharge_max, 0.2);
        assert_eq!(config.pricing.margin_policy().margins.average, 0.12);
    }

    #[test]
    fn test_documents_and_storage_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONSILIUS__DOCUMENTS__DEFAULT_PROPOSER", "Consilius Jr");
        env::set_var("CONSILIUS__STORAGE__QUOTE_LOG_PATH", "/tmp/consilius/log.csv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.documents.default_proposer, "Consilius Jr");
        assert_eq!(
            config.storage.quote_log_path,
            PathBuf::from("/tmp/consilius/log.csv")
        );
    }

    #[test]
    fn test_cors_origins_from_comma_list() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "CONSILIUS__SERVER__CORS_ORIGINS",
            "https://consilius.com.br, http://localhost:8501",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.server.cors_origins,
            vec!["https://consilius.com.br", "http://localhost:8501"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quote_capacity_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONSILIUS__STORAGE__MAX_STORED_QUOTES", "25");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().storage.max_stored_quotes, 25);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONSILIUS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONSILIUS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.documents.pdf_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPdfTimeout));
    }
}
