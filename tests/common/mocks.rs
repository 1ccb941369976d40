use async_trait::async_trait;
use imagegen_gateway::{
    Error, Result,
    prediction::{PredictRequest, PredictResponse, Prediction, PredictionClient},
    storage::ObjectStore,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock prediction endpoint for testing
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    pub requests: Arc<Mutex<Vec<PredictRequest>>>,
    pub outputs: Vec<String>,
    pub error: Option<String>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            outputs: Vec::new(),
            error: None,
        }
    }

    pub fn with_output(mut self, encoded: impl Into<String>) -> Self {
        self.outputs.push(encoded.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<PredictRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn predict(&self, request: PredictRequest) -> Result<PredictResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::prediction(error.clone()));
        }

        Ok(PredictResponse {
            predictions: self
                .outputs
                .iter()
                .map(|output| Prediction {
                    output: output.clone(),
                })
                .collect(),
            deployed_model_id: None,
        })
    }
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadCall {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// In-memory bucket; a second upload under the same name replaces the first.
#[derive(Debug, Clone)]
pub struct MockObjectStore {
    pub bucket: String,
    pub uploads: Arc<Mutex<Vec<UploadCall>>>,
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub error: Option<String>,
}

impl MockObjectStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            uploads: Arc::new(Mutex::new(Vec::new())),
            objects: Arc::new(Mutex::new(HashMap::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn get_uploads(&self) -> Vec<UploadCall> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn object(&self, name: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(name).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn upload(&self, bytes: Vec<u8>, name: &str, content_type: &str) -> Result<String> {
        self.uploads.lock().unwrap().push(UploadCall {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.clone(),
        });

        if let Some(ref error) = self.error {
            return Err(Error::storage(error.clone()));
        }

        self.objects.lock().unwrap().insert(name.to_string(), bytes);
        Ok(format!("gs://{}/{}", self.bucket, name))
    }
}
