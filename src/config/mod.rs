//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    load_config, load_config_or_default, ApiSection, Config, ConfigError, LoggingSection, RefreshSection,
    StorageSection, DEFAULT_CONFIG_PATH,
};
