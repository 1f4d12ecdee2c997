//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `SHIPPING_RATES_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SHIPPING_RATES_CONFIG_FILE` | TOML config file | `shipping-rates.toml` |
//! | `SHIPPING_RATES_LOG_LEVEL` | Log level | `info` |
//! | `SHIPPING_RATES_LOG_FORMAT` | Log format (json/pretty) | `pretty` |
//! | `SHIPPING_RATES_ROUNDING` | Major-to-minor rounding mode | `half_away_from_zero` |
//! | `SHIPPING_RATES_DEFAULT_CURRENCY` | Currency for requests without one | unset |
//! | `SHIPPING_RATES_ENVIRONMENT` | Deployment environment | `development` |
//!
//! # Examples
//!
//! ```no_run
//! use shipping_rates::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("rounding: {}", config.pricing.rounding);
//! # Ok::<(), shipping_rates::config::ConfigError>(())
//! ```

use crate::application::services::RankingKind;
use crate::domain::value_objects::{ArithmeticError, CurrencyCode, Rounding};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    Json,
    /// Pretty format (human-readable).
    #[default]
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            include_target: true,
        }
    }
}

// ============================================================================
// Pricing Configuration
// ============================================================================

/// Pricing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rounding mode for major-unit amounts.
    #[serde(default)]
    pub rounding: Rounding,

    /// Currency applied to requests that name none.
    #[serde(default)]
    pub default_currency: Option<String>,

    /// Default ranking strategy.
    #[serde(default)]
    pub ranking: RankingKind,
}

impl PricingConfig {
    /// Returns the parsed default currency, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured code is not a valid currency.
    pub fn default_currency_code(&self) -> Result<Option<CurrencyCode>, ConfigError> {
        self.default_currency
            .as_deref()
            .map(CurrencyCode::new)
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                field: "pricing.default_currency".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            pricing: PricingConfig::default(),
            service_name: default_service_name(),
            environment: default_environment(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("SHIPPING_RATES_CONFIG_FILE")
            .unwrap_or_else(|_| "shipping-rates.toml".to_string());
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path` if it exists, then applies
    /// environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or an override is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    ///
    /// # Errors
    ///
    /// Returns an error if the rounding override is not a known mode.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Logging configuration
        if let Some(level) = lookup("SHIPPING_RATES_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("SHIPPING_RATES_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            };
        }

        // Pricing configuration
        if let Some(rounding) = lookup("SHIPPING_RATES_ROUNDING") {
            self.pricing.rounding = rounding.parse().map_err(|e: ArithmeticError| {
                ConfigError::InvalidValue {
                    field: "pricing.rounding".to_string(),
                    message: format!("'{rounding}': {e}"),
                }
            })?;
        }
        if let Some(currency) = lookup("SHIPPING_RATES_DEFAULT_CURRENCY")
            && !currency.trim().is_empty()
        {
            self.pricing.default_currency = Some(currency);
        }

        // Service configuration
        if let Some(env) = lookup("SHIPPING_RATES_ENVIRONMENT") {
            self.environment = env;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        self.pricing.default_currency_code()?;

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "shipping-rates".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}
