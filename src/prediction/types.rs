use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInstance {
    pub text: String,
}

/// Generation parameters sent with every prediction. Not derived from input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionParameters {
    pub height: u32,
    pub width: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
}

impl Default for PredictionParameters {
    fn default() -> Self {
        Self {
            height: 768,
            width: 768,
            num_inference_steps: 25,
            guidance_scale: 7.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictionInstance>,
    pub parameters: PredictionParameters,
}

impl PredictRequest {
    pub fn for_prompt(prompt: &str, parameters: PredictionParameters) -> Self {
        Self {
            instances: vec![PredictionInstance {
                text: prompt.to_string(),
            }],
            parameters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Base64-encoded image bytes.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_model_id: Option<String>,
}
