use fg_db::Flashcard;
use fg_gen::QaPair;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-flashcards`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Study notes to turn into flashcards
    #[serde(default)]
    pub text: Option<String>,
}

/// Freshly generated pairs, as returned by `POST /generate-flashcards`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFlashcards {
    pub flashcards: Vec<QaPair>,
}

/// Stored flashcards, newest first, as returned by `GET /get-flashcards`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFlashcards {
    pub flashcards: Vec<Flashcard>,
}
