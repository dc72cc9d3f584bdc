//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::adapters::quote_store::DEFAULT_MAX_QUOTES;

use super::error::ValidationError;

/// File locations used by the service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// CSV file receiving one row per client proposal
    #[serde(default = "default_quote_log_path")]
    pub quote_log_path: PathBuf,

    /// YAML service catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Calculated quotes kept in memory; the oldest is dropped beyond this
    #[serde(default = "default_max_stored_quotes")]
    pub max_stored_quotes: usize,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quote_log_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.quote_log_path"));
        }
        if self.max_stored_quotes == 0 {
            return Err(ValidationError::InvalidQuoteCapacity);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            quote_log_path: default_quote_log_path(),
            catalog_path: None,
            max_stored_quotes: default_max_stored_quotes(),
        }
    }
}

fn default_quote_log_path() -> PathBuf {
    PathBuf::from("orcamentos_log.csv")
}

fn default_max_stored_quotes() -> usize {
    DEFAULT_MAX_QUOTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_log_and_builtin_catalog() {
        let config = StorageConfig::default();
        assert_eq!(config.quote_log_path, PathBuf::from("orcamentos_log.csv"));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.max_stored_quotes, 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_log_path_is_rejected() {
        let config = StorageConfig {
            quote_log_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_quote_capacity_is_rejected() {
        let config = StorageConfig {
            max_stored_quotes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidQuoteCapacity));
    }
}
