use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fg_db::StorageError;
use fg_gen::GenerationError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("Resource not found")]
    NotFound,
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Generation(GenerationError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Generation(GenerationError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to show to clients. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Storage(_) => "Failed to access flashcard storage".to_string(),
            Self::Generation(GenerationError::Timeout) => {
                "Flashcard generation timed out".to_string()
            }
            Self::Generation(GenerationError::Unavailable(_)) => {
                "Flashcard generation is temporarily unavailable".to_string()
            }
            Self::Generation(_) => "Flashcard generation failed".to_string(),
            Self::NotFound => "The requested resource was not found".to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");
        Self::Validation("Invalid JSON body".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{self}");
        } else {
            tracing::debug!(status = status.as_u16(), "{self}");
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
