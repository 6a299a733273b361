mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable holding the upstream API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Loads `.env`, the optional YAML file and environment overrides, then validates.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    load_with(|key| env::var(key).ok(), DEFAULT_CONFIG_PATH).await
}

/// Same as [`load`] with an explicit variable lookup and fallback file.
///
/// A `CONFIG_PATH` that cannot be read is an error; a missing `default_path`
/// just means every setting takes its default.
pub async fn load_with<F>(lookup: F, default_path: &str) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => from_file(&path).await?,
        None if Path::new(default_path).exists() => from_file(default_path).await?,
        None => {
            debug!("No configuration file at {}, using defaults", default_path);
            Config::default()
        }
    };

    config.apply_env(lookup)?;
    config.validate()?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overlays values from `lookup` (normally the process environment).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR) {
            self.llm.api_key = key.trim().to_string();
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        if let Some(provider) = lookup("LLM_PROVIDER") {
            self.llm.provider = provider.parse().map_err(Error::config)?;
        }
        if let Some(base_url) = lookup("LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("LLM_MODEL") {
            self.llm.model = model;
        }
        if lookup("DEBUG").is_some_and(|v| is_truthy(&v)) {
            self.server.logs.level = "debug".to_string();
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.is_empty() {
            return Err(Error::config(format!(
                "No {} found in environment variables",
                API_KEY_VAR
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }

        let generation = &self.llm.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(Error::config(format!(
                "temperature must be between 0 and 2, got {}",
                generation.temperature
            )));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(Error::config(format!(
                "top_p must be between 0 and 1, got {}",
                generation.top_p
            )));
        }
        if generation.top_k == 0 {
            return Err(Error::config("top_k must be at least 1"));
        }
        if generation.max_output_tokens == 0 {
            return Err(Error::config("max_output_tokens must be at least 1"));
        }

        Ok(())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
