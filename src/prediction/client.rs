use super::types::*;
use crate::{Error, Result, config::PredictionConfig};
use async_trait::async_trait;
use tracing::debug;

/// Submits instances plus parameters to a hosted model and returns its predictions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse>;
}

pub struct VertexPredictionClient {
    client: reqwest::Client,
    predict_url: String,
    access_token: Option<String>,
}

impl VertexPredictionClient {
    pub fn new(config: &PredictionConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        debug!("Creating prediction client for: {}", config.endpoint_name());

        Ok(Self {
            client: builder.build()?,
            predict_url: config.predict_url(),
            access_token: config.access_token.clone(),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl PredictionClient for VertexPredictionClient {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse> {
        debug!(
            "Submitting prediction with {} instances to {}",
            request.instances.len(),
            self.predict_url
        );

        let mut req_builder = self.client.post(&self.predict_url).json(&request);
        if let Some(token) = &self.access_token {
            req_builder = req_builder.bearer_auth(token);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| Error::prediction(format!("Failed to reach prediction endpoint: {}", e)))?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::prediction(format!(
                "Prediction request failed ({}): {}",
                status.as_u16(),
                truncate_text(&body, 512)
            )));
        }

        let parsed: PredictResponse = serde_json::from_str(&body)?;

        debug!(
            "Received prediction response with {} predictions",
            parsed.predictions.len()
        );

        Ok(parsed)
    }
}

pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> PredictionConfig {
        PredictionConfig {
            project_id: "test-project".to_string(),
            region: "europe-west4".to_string(),
            endpoint_id: "42".to_string(),
            api_base: None,
            access_token: Some("token".to_string()),
            request_timeout_secs: Some(30),
        }
    }

    #[test]
    fn test_client_targets_regional_endpoint() {
        let client = VertexPredictionClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.predict_url(),
            "https://europe-west4-aiplatform.googleapis.com/v1/projects/test-project/locations/europe-west4/endpoints/42:predict"
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefgh", 3), "abc...");
    }
}
