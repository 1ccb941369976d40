mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies `PORT` and `GOOGLE_OAUTH_ACCESS_TOKEN` from the given lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        if let Some(token) = lookup("GOOGLE_OAUTH_ACCESS_TOKEN").filter(|t| !t.is_empty()) {
            if self.prediction.access_token.is_none() {
                self.prediction.access_token = Some(token.clone());
            }
            if self.storage.access_token.is_none() {
                self.storage.access_token = Some(token);
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("prediction.project_id", &self.prediction.project_id),
            ("prediction.region", &self.prediction.region),
            ("prediction.endpoint_id", &self.prediction.endpoint_id),
            ("storage.bucket", &self.storage.bucket),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}
