//! Configuration module for Agentmon
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`AGENTMON_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use agentmon::config::MonitorConfig;
//!
//! // Load defaults
//! let config = MonitorConfig::default();
//! assert_eq!(config.api.base_url, "http://localhost:8000");
//!
//! // Parse from TOML
//! let toml = r#"
//! [api]
//! base_url = "http://monitor.internal:9000"
//! "#;
//! let config: MonitorConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.api.base_url, "http://monitor.internal:9000");
//! ```

pub mod api;
pub mod error;
pub mod logging;

pub use api::{ApiConfig, FallbackConfig};
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Agentmon client.
///
/// Aggregates the backend endpoint settings, the synthetic-fallback policy,
/// and logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Backend API endpoints
    pub api: ApiConfig,
    /// Synthetic-data fallback policy
    pub fallback: FallbackConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl MonitorConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from a path only if the file exists, falling back to defaults.
    ///
    /// Used by CLI commands where the config file is optional.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(Some(path)).unwrap_or_default()
    }

    /// Apply environment variable overrides
    ///
    /// Supports AGENTMON_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("AGENTMON_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var("AGENTMON_WS_URL") {
            self.api.ws_url = url;
        }
        if let Ok(timeout) = std::env::var("AGENTMON_REQUEST_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_seconds = t;
            }
        }
        if let Ok(fallback) = std::env::var("AGENTMON_FALLBACK") {
            match fallback.to_lowercase().as_str() {
                "true" => self.fallback.enabled = true,
                "false" => self.fallback.enabled = false,
                _ => {}
            }
        }
        if let Ok(level) = std::env::var("AGENTMON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("AGENTMON_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "base URL must start with http:// or https://".to_string(),
            });
        }
        if self.api.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "api.request_timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_monitor_config_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.fallback.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_parse_minimal_toml() {
        let toml = r#"
        [api]
        base_url = "http://10.0.0.5:8000"
        "#;

        let config: MonitorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.ws_url, "ws://localhost:8000"); // Default
    }

    #[test]
    fn test_config_parse_fallback_section() {
        let toml = r#"
        [fallback]
        enabled = false
        "#;

        let config: MonitorConfig = toml::from_str(toml).unwrap();
        assert!(!config.fallback.enabled);
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[api]\nbase_url = \"http://example.com\"").unwrap();

        let config = MonitorConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.api.base_url, "http://example.com");
    }

    #[test]
    fn test_config_missing_file_error() {
        let result = MonitorConfig::load(Some(Path::new("/nonexistent/agentmon.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_load_or_default_missing_file() {
        let config = MonitorConfig::load_or_default(Path::new("/nonexistent/agentmon.toml"));
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_config_env_override_api_url() {
        std::env::set_var("AGENTMON_API_URL", "http://override:9000");
        let config = MonitorConfig::default().with_env_overrides();
        std::env::remove_var("AGENTMON_API_URL");

        assert_eq!(config.api.base_url, "http://override:9000");
    }

    #[test]
    fn test_config_env_override_fallback() {
        std::env::set_var("AGENTMON_FALLBACK", "false");
        let config = MonitorConfig::default().with_env_overrides();
        assert!(!config.fallback.enabled);

        // Only "true"/"false" are recognized; anything else keeps the default
        std::env::set_var("AGENTMON_FALLBACK", "1");
        let config = MonitorConfig::default().with_env_overrides();
        std::env::remove_var("AGENTMON_FALLBACK");
        assert!(config.fallback.enabled);
    }

    #[test]
    fn test_config_env_invalid_timeout_ignored() {
        std::env::set_var("AGENTMON_REQUEST_TIMEOUT", "not-a-number");
        let config = MonitorConfig::default().with_env_overrides();
        std::env::remove_var("AGENTMON_REQUEST_TIMEOUT");

        // Should keep default, not crash
        assert_eq!(config.api.request_timeout_seconds, 10);
    }

    #[test]
    fn test_config_env_override_log_format() {
        std::env::set_var("AGENTMON_LOG_FORMAT", "json");
        let config = MonitorConfig::default().with_env_overrides();
        std::env::remove_var("AGENTMON_LOG_FORMAT");

        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let mut config = MonitorConfig::default();
        config.api.base_url = String::new();

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "api.base_url"
        ));
    }

    #[test]
    fn test_config_validation_bad_scheme() {
        let mut config = MonitorConfig::default();
        config.api.base_url = "ftp://example.com".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = MonitorConfig::default();
        config.api.request_timeout_seconds = 0;

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field.contains("timeout")
        ));
    }

    #[test]
    fn test_config_load_none_returns_defaults() {
        let config = MonitorConfig::load(None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.fallback.enabled);
    }
}
