use super::types::{ErrorResponse, GenerateImageRequest, GenerateImageResponse, SUCCESS_MESSAGE};
use crate::{Error, ErrorKind, generation::ImageGenerator};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ImageGenerator>,
}

impl AppState {
    pub fn new(generator: ImageGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

pub async fn generate_image(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();

    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected request {}: {}", request_id, e);
            return Err(error_response(&e));
        }
    };

    info!(
        "Received image request {} for prompt: {}",
        request_id, request.prompt
    );

    match state.generator.generate(&request.prompt).await {
        Ok(image) => {
            info!("Request {} stored image at {}", request_id, image.gcs_path);
            Ok(Json(GenerateImageResponse {
                message: SUCCESS_MESSAGE.to_string(),
                gcs_path: image.gcs_path,
                public_url: image.public_url,
            }))
        }
        Err(e) => {
            error!("Failed to generate image for request {}: {}", request_id, e);
            Err(error_response(&e))
        }
    }
}

/// Body must be a JSON object with a non-empty string `prompt`.
pub fn parse_request(body: &[u8]) -> crate::Result<GenerateImageRequest> {
    let value: Value = serde_json::from_slice(body).map_err(|_| Error::missing_prompt())?;

    match value.get("prompt") {
        Some(Value::String(prompt)) if !prompt.trim().is_empty() => Ok(GenerateImageRequest {
            prompt: prompt.clone(),
        }),
        _ => Err(Error::missing_prompt()),
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::UpstreamEmpty | ErrorKind::UpstreamFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn error_response(e: &Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(e.kind()),
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
