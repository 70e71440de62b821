use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Audio data too large: {size} bytes exceeds the {max} byte limit")]
    InputTooLarge { size: usize, max: usize },
    #[error("No transcription available")]
    NoTranscription,
    #[error("API error: {0}")]
    Upstream(String),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_)
            | ServiceError::InputTooLarge { .. }
            | ServiceError::NoTranscription => StatusCode::BAD_REQUEST,
            ServiceError::Upstream(_) | ServiceError::Request(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
