use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub prediction: PredictionConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    pub project_id: String,
    pub region: String,
    pub endpoint_id: String,
    /// Overrides the regional `https://{region}-aiplatform.googleapis.com` host.
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    #[serde(default = "default_storage_api_base")]
    pub api_base: String,
    #[serde(default = "default_public_base")]
    pub public_base: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl PredictionConfig {
    pub fn api_base(&self) -> String {
        match &self.api_base {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => format!("https://{}-aiplatform.googleapis.com", self.region),
        }
    }

    /// Fully-qualified endpoint resource name.
    pub fn endpoint_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/endpoints/{}",
            self.project_id, self.region, self.endpoint_id
        )
    }

    pub fn predict_url(&self) -> String {
        format!("{}/v1/{}:predict", self.api_base(), self.endpoint_name())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl StorageConfig {
    pub fn upload_url(&self) -> String {
        format!(
            "{}/upload/storage/v1/b/{}/o",
            self.api_base.trim_end_matches('/'),
            self.bucket
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_storage_api_base() -> String {
    "https://storage.googleapis.com".to_string()
}

fn default_public_base() -> String {
    "https://storage.googleapis.com".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
