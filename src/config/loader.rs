//! Configuration Loader
//!
//! Loads and validates configuration from a TOML file. Every section is
//! optional; a missing file yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::domain::settings::{MAX_REFRESH_INTERVAL_SECS, MIN_REFRESH_INTERVAL_SECS};

pub const DEFAULT_CONFIG_PATH: &str = "config/screener.toml";

/// Env var overriding `[storage].data_dir`
pub const ENV_DATA_DIR: &str = "SCREENER_DATA_DIR";
/// Env var overriding `[api].dexscreener_url`
pub const ENV_DEXSCREENER_URL: &str = "DEXSCREENER_API_URL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure matching screener.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub refresh: RefreshSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Upstream API configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// DexScreener `latest/dex` base URL
    pub dexscreener_url: String,
    /// CoinGecko v3 base URL
    pub coingecko_url: String,
    /// RugCheck v1 base URL
    pub rugcheck_url: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Response cache TTL for searches
    pub cache_ttl_secs: u64,
    /// Response cache TTL for the pump feed
    pub pump_cache_ttl_secs: u64,
    /// Cache TTL for security reports
    pub security_cache_ttl_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            dexscreener_url: "https://api.dexscreener.com/latest/dex".to_string(),
            coingecko_url: "https://api.coingecko.com/api/v3".to_string(),
            rugcheck_url: "https://api.rugcheck.xyz/v1".to_string(),
            timeout_secs: 15,
            cache_ttl_secs: 60,
            pump_cache_ttl_secs: 30,
            security_cache_ttl_secs: 300,
        }
    }
}

impl ApiSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn pump_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.pump_cache_ttl_secs)
    }

    pub fn security_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.security_cache_ttl_secs)
    }
}

/// Polling configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshSection {
    /// Seed for the persisted auto-refresh interval on first run
    pub interval_secs: u64,
    /// Poll the pump feed instead of keyword searches
    pub pump_mode: bool,
    /// Publish a notification when a coin is classified hot
    pub notify_hot: bool,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            pump_mode: false,
            notify_hot: true,
        }
    }
}

impl RefreshSection {
    /// Interval clamped to 30-300 seconds
    pub fn interval(&self) -> Duration {
        Duration::from_secs(
            self.interval_secs
                .clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS),
        )
    }
}

/// Persistence configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory for state files; `~` is expanded
    pub data_dir: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl StorageSection {
    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir).to_string())
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load from `path` if it exists, otherwise defaults; then apply env overrides
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut config = if path.exists() {
        load_config(path)?
    } else {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        Config::default()
    };

    config.apply_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Apply env-style overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.storage.data_dir = dir;
        }
        if let Some(url) = lookup(ENV_DEXSCREENER_URL).filter(|v| !v.trim().is_empty()) {
            self.api.dexscreener_url = url;
        }
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("dexscreener_url", &self.api.dexscreener_url),
            ("coingecko_url", &self.api.coingecko_url),
            ("rugcheck_url", &self.api.rugcheck_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_dir cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
