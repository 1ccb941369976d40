use crate::{Error, Result, config::StorageConfig, prediction::truncate_text};
use async_trait::async_trait;
use tracing::debug;

/// Writes named bytes and returns the canonical location of the stored object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, name: &str, content_type: &str) -> Result<String>;
}

/// Cloud Storage JSON API, simple media upload. Existing objects are overwritten.
pub struct GcsObjectStore {
    client: reqwest::Client,
    bucket: String,
    upload_url: String,
    access_token: Option<String>,
}

impl GcsObjectStore {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        debug!("Creating storage client for bucket: {}", config.bucket);

        Ok(Self {
            client: builder.build()?,
            bucket: config.bucket.clone(),
            upload_url: config.upload_url(),
            access_token: config.access_token.clone(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn object_path(&self, name: &str) -> String {
        format!("gs://{}/{}", self.bucket, name)
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn upload(&self, bytes: Vec<u8>, name: &str, content_type: &str) -> Result<String> {
        debug!(
            "Uploading {} bytes to bucket {} as {}",
            bytes.len(),
            self.bucket,
            name
        );

        let mut req_builder = self
            .client
            .post(&self.upload_url)
            .query(&[("uploadType", "media"), ("name", name)])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes);
        if let Some(token) = &self.access_token {
            req_builder = req_builder.bearer_auth(token);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| Error::storage(format!("Failed to reach storage endpoint: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::storage(format!(
                "Upload of {} failed ({}): {}",
                name,
                status.as_u16(),
                truncate_text(&body, 512)
            )));
        }

        let path = self.object_path(name);
        debug!("Stored object at {}", path);
        Ok(path)
    }
}
