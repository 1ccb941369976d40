use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Image generated successfully";

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub message: String,
    pub gcs_path: String,
    pub public_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
