//! Configuration management for `wherenow`
//!
//! Handles loading configuration from an optional file and environment
//! variables, and provides validation for all configuration settings.
//! API credentials are never compiled in; they must come from one of
//! those sources.

use crate::WhereNowError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `wherenow`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// IP geolocation service configuration
    #[serde(default)]
    pub location: LocationConfig,
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Timezone API configuration
    #[serde(default)]
    pub timezone: TimezoneConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// IP geolocation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Base URL of the ip-api compatible service
    #[serde(default = "default_location_base_url")]
    pub base_url: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// weatherapi.com key
    pub api_key: Option<String>,
    /// Base URL for weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Place queried for the forecast. The resolved coordinates are not used.
    #[serde(default = "default_weather_query")]
    pub query: String,
}

/// Timezone API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimezoneConfig {
    /// Google Maps timezone API key
    pub api_key: Option<String>,
    /// Base URL for the timezone API
    #[serde(default = "default_timezone_base_url")]
    pub base_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_location_base_url() -> String {
    "http://ip-api.com".to_string()
}

fn default_weather_base_url() -> String {
    "http://api.weatherapi.com/v1".to_string()
}

fn default_weather_query() -> String {
    "Jaipur".to_string()
}

fn default_timezone_base_url() -> String {
    "https://maps.googleapis.com/maps/api/timezone".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_location_base_url(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            query: default_weather_query(),
        }
    }
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_timezone_base_url(),
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

impl AppConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WHERENOW_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("WHERENOW")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wherenow").join("config.toml"))
    }

    /// Apply default values to fields that were supplied empty
    pub fn apply_defaults(&mut self) {
        if self.location.base_url.is_empty() {
            self.location.base_url = default_location_base_url();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.query.is_empty() {
            self.weather.query = default_weather_query();
        }
        if self.timezone.base_url.is_empty() {
            self.timezone.base_url = default_timezone_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Reject keys that are present but blank
    pub fn validate_api_keys(&self) -> Result<()> {
        for (name, key) in [
            ("weather.api_key", &self.weather.api_key),
            ("timezone.api_key", &self.timezone.api_key),
        ] {
            if key.as_deref().is_some_and(|k| k.trim().is_empty()) {
                return Err(WhereNowError::config(format!(
                    "{name} cannot be empty if provided. Either remove it or provide a valid key."
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Both API keys must be present before any request is made
    pub fn require_keys(&self) -> crate::Result<()> {
        self.weather.api_key()?;
        self.timezone.api_key()?;
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WhereNowError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WhereNowError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("location.base_url", &self.location.base_url),
            ("weather.base_url", &self.weather.base_url),
            ("timezone.base_url", &self.timezone.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WhereNowError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

impl WeatherConfig {
    pub fn api_key(&self) -> crate::Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| WhereNowError::config("weather.api_key is not set"))
    }
}

impl TimezoneConfig {
    pub fn api_key(&self) -> crate::Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| WhereNowError::config("timezone.api_key is not set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.location.base_url, "http://ip-api.com");
        assert_eq!(config.weather.base_url, "http://api.weatherapi.com/v1");
        assert_eq!(config.weather.query, "Jaipur");
        assert_eq!(
            config.timezone.base_url,
            "https://maps.googleapis.com/maps/api/timezone"
        );
        assert_eq!(config.logging.level, "warn");
        assert!(config.weather.api_key.is_none());
        assert!(config.timezone.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid_but_lacks_keys() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let err = config.require_keys().unwrap_err();
        assert!(err.to_string().contains("weather.api_key"));
    }

    #[test]
    fn test_require_keys_checks_timezone_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("weather-key".to_string());
        let err = config.require_keys().unwrap_err();
        assert!(err.to_string().contains("timezone.api_key"));

        config.timezone.api_key = Some("timezone-key".to_string());
        assert!(config.require_keys().is_ok());
    }

    #[test]
    fn test_config_validation_blank_api_key() {
        let mut config = AppConfig::default();
        config.timezone.api_key = Some("   ".to_string());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timezone.api_key"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = AppConfig::default();
        config.weather.base_url = "ftp://api.weatherapi.com/v1".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("weather.base_url"));
    }

    #[test]
    fn test_apply_defaults_fills_blank_values() {
        let mut config = AppConfig::default();
        config.weather.query = String::new();
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.weather.query, "Jaipur");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[weather]
api_key = "file-weather-key"
query = "Udaipur"

[timezone]
api_key = "file-timezone-key"

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.weather.api_key().unwrap(), "file-weather-key");
        assert_eq!(config.weather.query, "Udaipur");
        assert_eq!(config.timezone.api_key.as_deref(), Some("file-timezone-key"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.location.base_url, "http://ip-api.com");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AppConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("wherenow"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
