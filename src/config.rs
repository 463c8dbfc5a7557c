//! Configuration management
//!
//! Settings come from built-in defaults, overridden by an optional
//! `config.toml` in the working directory.

use config::{Config, File};
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config";
const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path to the `username:password` file
    pub accounts_file: String,

    /// Re-read the accounts file before every query
    pub reload_each_query: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accounts_file: DEFAULT_ACCOUNTS_FILE.to_string(),
            reload_each_query: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file stem (the file may be absent)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("accounts_file", DEFAULT_ACCOUNTS_FILE)?
            .set_default("reload_each_query", true)?
            .add_source(File::with_name(config_path).required(false))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.accounts_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "accounts_file cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Get the accounts file as a PathBuf
    pub fn accounts_path(&self) -> PathBuf {
        PathBuf::from(&self.accounts_file)
    }
}
