use axum::{Router, http::StatusCode, routing::get};

use crate::{error::ApiError, flashcard, page, state::ApiState};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(page::routes())
        .merge(flashcard::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> ApiError {
    ApiError::NotFound
}
