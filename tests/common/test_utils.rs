use super::mocks::{MockObjectStore, MockPredictionClient};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{NaiveDate, NaiveDateTime};
use imagegen_gateway::{
    config::{Config, LogsConfig, PredictionConfig, ServerConfig, StorageConfig},
    generation::{Clock, ImageGenerator},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "test-images-bucket";
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-payload";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        prediction: PredictionConfig {
            project_id: "test-project".to_string(),
            region: "us-central1".to_string(),
            endpoint_id: "1234567890".to_string(),
            api_base: None,
            access_token: None,
            request_timeout_secs: None,
        },
        storage: StorageConfig {
            bucket: TEST_BUCKET.to_string(),
            api_base: "https://storage.googleapis.com".to_string(),
            public_base: "https://storage.googleapis.com".to_string(),
            access_token: None,
            request_timeout_secs: None,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

pub fn encoded_png() -> String {
    BASE64.encode(PNG_BYTES)
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(14, 30, 9)
            .unwrap(),
    ))
}

pub fn create_generator(
    predictor: &MockPredictionClient,
    store: &MockObjectStore,
) -> ImageGenerator {
    let config = create_test_config();
    ImageGenerator::new(
        Arc::new(predictor.clone()),
        Arc::new(store.clone()),
        &config.storage,
    )
}

pub fn create_test_app(predictor: &MockPredictionClient, store: &MockObjectStore) -> Router {
    server::router(AppState::new(create_generator(predictor, store)))
}

pub fn create_test_app_with_clock(
    predictor: &MockPredictionClient,
    store: &MockObjectStore,
) -> Router {
    let generator = create_generator(predictor, store).with_clock(fixed_clock());
    server::router(AppState::new(generator))
}

pub fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-image")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
