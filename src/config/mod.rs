mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads `.env`, the YAML file at `CONFIG_PATH` (default `config.yaml`) and
/// the environment overrides, in that order.
///
/// A missing YAML file is not an error; every field has a default except the
/// inference location and model, which are checked when the service is built.
pub async fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from: {}", path.display());
    }

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let yaml = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            None
        }
        Err(e) => return Err(e.into()),
    };

    Config::from_sources(yaml.as_deref(), |key| env::var(key).ok())
}

impl Config {
    /// Builds a configuration from optional YAML text and an environment
    /// lookup. Values from `lookup` override the file.
    pub fn from_sources<F>(yaml: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = match yaml {
            Some(contents) if !contents.trim().is_empty() => serde_yaml::from_str(contents)?,
            _ => Config::default(),
        };

        let var = |key: &str| lookup(key).filter(|value| types::non_empty(value).is_some());

        if let Some(id) = var("RUNPOD_ID") {
            config.inference.runpod_id = Some(id);
        }
        if let Some(url) = var("RUNPOD_URL") {
            config.inference.base_url = Some(url);
        }
        if let Some(model) = var("EEVE_MODEL") {
            config.inference.model = Some(model);
        }
        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| crate::Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        Ok(config)
    }
}
