//! # rubli-config
//!
//! Layered configuration loading for RUBLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RUBLI_*` prefix, `__` as separator)
//! 2. Project-level `.rubli/config.toml`
//! 3. User-level `~/.config/rubli/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RUBLI_API__BASE_URL` -> `api.base_url`,
//! `RUBLI_GENERAL__TOP_N` -> `general.top_n`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rubli_config::RubliConfig;
//!
//! let config = RubliConfig::load_with_dotenv().expect("config");
//! println!("API root: {}", config.api.api_root());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RubliConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RubliConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".rubli/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RUBLI_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rubli").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = RubliConfig::default();
        assert_eq!(config.api.base_path, "/api/v1");
        assert_eq!(config.general.top_n, 15);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: RubliConfig = RubliConfig::figment().extract()?;
            assert_eq!(config.api.timeout_secs, 30);
            assert_eq!(config.general.per_page, 50);
            Ok(())
        });
    }
}
