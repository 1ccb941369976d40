use super::artifact::{Clock, SystemClock, artifact_file_name, decode_image, public_url};
use super::stage::{GenerationEvent, GenerationStateMachine};
use crate::{
    Error, Result,
    config::StorageConfig,
    prediction::{PredictRequest, PredictionClient, PredictionParameters},
    storage::{ObjectStore, PNG_CONTENT_TYPE},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub file_name: String,
    pub gcs_path: String,
    pub public_url: String,
}

/// Runs validate -> predict -> decode -> store for a single prompt.
pub struct ImageGenerator {
    predictor: Arc<dyn PredictionClient>,
    store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
    parameters: PredictionParameters,
    bucket: String,
    public_base: String,
}

impl ImageGenerator {
    pub fn new(
        predictor: Arc<dyn PredictionClient>,
        store: Arc<dyn ObjectStore>,
        storage: &StorageConfig,
    ) -> Self {
        Self {
            predictor,
            store,
            clock: Arc::new(SystemClock),
            parameters: PredictionParameters::default(),
            bucket: storage.bucket.clone(),
            public_base: storage.public_base.clone(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn parameters(&self) -> &PredictionParameters {
        &self.parameters
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let mut machine = GenerationStateMachine::new();

        match self.run(prompt, &mut machine).await {
            Ok(image) => {
                info!("Image generated: {}", image.gcs_path);
                Ok(image)
            }
            Err(e) => {
                machine.fail(&e);
                Err(e)
            }
        }
    }

    async fn run(&self, prompt: &str, machine: &mut GenerationStateMachine) -> Result<GeneratedImage> {
        validate_prompt(prompt)?;
        machine.transition(GenerationEvent::PromptAccepted)?;

        let request = PredictRequest::for_prompt(prompt, self.parameters);
        let response = self.predictor.predict(request).await?;
        // Only the first prediction is used.
        let prediction = response
            .predictions
            .into_iter()
            .next()
            .ok_or(Error::NoPredictions)?;
        machine.transition(GenerationEvent::PredictionReturned)?;

        let bytes = decode_image(&prediction.output)?;
        debug!("Decoded {} image bytes", bytes.len());
        machine.transition(GenerationEvent::ImageDecoded)?;

        let file_name = artifact_file_name(prompt, self.clock.now());
        let gcs_path = self
            .store
            .upload(bytes, &file_name, PNG_CONTENT_TYPE)
            .await?;
        machine.transition(GenerationEvent::ObjectStored)?;

        let public_url = public_url(&self.public_base, &self.bucket, &gcs_path);
        machine.transition(GenerationEvent::ResponseBuilt)?;

        Ok(GeneratedImage {
            file_name,
            gcs_path,
            public_url,
        })
    }
}

pub fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(Error::missing_prompt());
    }
    Ok(())
}
