use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const MISSING_PROMPT: &str = "Missing 'prompt' in request payload";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("No predictions received from the endpoint.")]
    NoPredictions,

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification the HTTP layer maps onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller sent an unusable request; nothing was attempted upstream.
    Validation,
    /// Prediction call succeeded but returned zero predictions.
    UpstreamEmpty,
    /// Anything raised by a collaborator or while handling its output.
    UpstreamFailure,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_prompt() -> Self {
        Self::Validation(MISSING_PROMPT.to_string())
    }

    pub fn prediction(msg: impl Into<String>) -> Self {
        Self::Prediction(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NoPredictions => ErrorKind::UpstreamEmpty,
            Self::Config(_)
            | Self::Prediction(_)
            | Self::Storage(_)
            | Self::Decode(_)
            | Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Io(_)
            | Self::Network(_)
            | Self::AddrParse(_)
            | Self::InvalidTransition { .. }
            | Self::Internal(_) => ErrorKind::UpstreamFailure,
        }
    }
}
