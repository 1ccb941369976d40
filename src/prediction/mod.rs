mod client;
mod types;

pub use client::{PredictionClient, VertexPredictionClient};
pub(crate) use client::truncate_text;
#[cfg(test)]
pub use client::MockPredictionClient;
pub use types::{
    PredictRequest, PredictResponse, Prediction, PredictionInstance, PredictionParameters,
};
