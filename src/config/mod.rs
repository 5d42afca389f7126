mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

/// Environment variable holding the inference provider's bearer token.
pub const API_KEY_ENV: &str = "HUGGING_FACE_API_KEY";

/// Default configuration file, optional when `CONFIG_PATH` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let config = resolve(env::var("CONFIG_PATH").ok()).await?;

    Ok(apply_env_overrides(config, |key| env::var(key).ok()))
}

/// Loads an explicitly requested file, failing if it is missing. Without one,
/// `config.yaml` is read when present and defaults are used otherwise.
pub async fn resolve(config_path: Option<String>) -> Result<Config> {
    match config_path {
        Some(path) => load_from_path(&path).await,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await
        }
        None => Ok(Config::default()),
    }
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies environment overrides on top of file configuration.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
        config.inference.api_key = Some(key);
    }
    config
}
