//! Configuration management for `TravelRec`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelRecError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TravelRec` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelRecConfig {
    /// External catalog source
    #[serde(default)]
    pub data: DataSourceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web server configuration
    #[serde(default)]
    pub web: WebConfig,
}

/// External catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// URL or file path of a JSON catalog; the built-in catalog is used when unset
    pub source: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_data_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// Directory of static frontend files
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

// Default value functions
fn default_data_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_web_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            source: None,
            timeout_seconds: default_data_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl TravelRecConfig {
    /// Load configuration from a file (default location if `None`) and environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELREC_WEB__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRAVELREC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelRecConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelrec").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.data.timeout_seconds == 0 {
            self.data.timeout_seconds = default_data_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.web.static_dir.is_empty() {
            self.web.static_dir = default_static_dir();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_data_source()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_data_source(&self) -> Result<()> {
        if let Some(source) = &self.data.source {
            if source.trim().is_empty() {
                return Err(TravelRecError::config(
                    "Data source cannot be empty if provided. Either remove it or set a URL or file path."
                ).into());
            }
        }
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.data.timeout_seconds > 300 {
            return Err(TravelRecError::config(
                "Data source timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.web.port == 0 {
            return Err(TravelRecError::config("Web port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelRecError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelRecError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = TravelRecConfig::default();
        assert!(config.data.source.is_none());
        assert_eq!(config.data.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.web.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelRecConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TravelRecConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelRecConfig::default();
        config.data.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_blank_source() {
        let mut config = TravelRecConfig::default();
        config.data.source = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.data.source = Some("https://example.com/travel.json".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_defaults() {
        let mut config = TravelRecConfig::default();
        config.data.timeout_seconds = 0;
        config.logging.level.clear();
        config.apply_defaults();
        assert_eq!(config.data.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("travelrec-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[data]\nsource = \"catalog.json\"\n\n[web]\nport = 9123\n",
        )
        .unwrap();

        let config = TravelRecConfig::load_from_path(Some(path.clone())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.data.source.as_deref(), Some("catalog.json"));
        assert_eq!(config.web.port, 9123);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelRecConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelrec"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
