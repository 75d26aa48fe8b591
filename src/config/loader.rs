//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. An optional TOML file supplied by the embedding application
//! 3. Environment variables (ETHOSCAN_* prefix, e.g. ETHOSCAN_LLM__API_KEY)
//!
//! The loaded configuration is validated before it is returned, so a missing
//! credential fails here, at startup, rather than mid-request.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use super::types::Config;
use crate::types::{EthoscanError, Result};

/// Environment variable prefix; `__` separates nesting levels so field names
/// containing underscores (api_key, timeout_secs) map correctly.
const ENV_PREFIX: &str = "ETHOSCAN_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and the environment.
    pub fn load() -> Result<Config> {
        Self::figment(None).and_then(Self::extract)
    }

    /// Load configuration from defaults, a TOML file, and the environment.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        debug!("Loading config from: {}", path.display());
        Self::figment(Some(path)).and_then(Self::extract)
    }

    fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = file {
            if !path.exists() {
                return Err(EthoscanError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true)))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| EthoscanError::Config(format!("configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }
}
