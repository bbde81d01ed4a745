use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use fg_db::NewFlashcard;

use crate::{ApiState, error::ApiError, metrics, validation};

use super::model::{GenerateRequest, GeneratedFlashcards, StoredFlashcards};

/// Create the flashcard routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/generate-flashcards", post(generate_flashcards))
        .route("/get-flashcards", get(get_flashcards))
}

/// Generate flashcards from the submitted text and store them
async fn generate_flashcards(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GeneratedFlashcards>, ApiError> {
    let Json(payload) = payload?;
    let text = validation::validate_text(payload.text.as_deref(), state.max_text_length)?;

    let provider = state.generator.name();
    let pairs = match state.generator.generate(text).await {
        Ok(pairs) => {
            metrics::record_generation(provider, pairs.len(), true);
            pairs
        }
        Err(e) => {
            metrics::record_generation(provider, 0, false);
            return Err(e.into());
        }
    };

    if pairs.is_empty() {
        tracing::info!(provider, "Generator returned no flashcards");
        return Ok(Json(GeneratedFlashcards { flashcards: pairs }));
    }

    let cards: Vec<NewFlashcard> = pairs
        .iter()
        .map(|pair| NewFlashcard::new(pair.question.as_str(), pair.answer.as_str()))
        .collect();

    let start = Instant::now();
    let result = state.store.insert_all(&cards).await;
    metrics::record_db_query("insert_flashcards", start.elapsed().as_secs_f64(), result.is_ok());
    let ids = result?;

    tracing::info!(provider, count = ids.len(), "Stored generated flashcards");

    Ok(Json(GeneratedFlashcards { flashcards: pairs }))
}

/// List every stored flashcard, newest first
async fn get_flashcards(State(state): State<ApiState>) -> Result<Json<StoredFlashcards>, ApiError> {
    let start = Instant::now();
    let result = state.store.list_all().await;
    metrics::record_db_query("list_flashcards", start.elapsed().as_secs_f64(), result.is_ok());

    Ok(Json(StoredFlashcards {
        flashcards: result?,
    }))
}
