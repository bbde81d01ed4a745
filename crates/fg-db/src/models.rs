use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Flashcard model - a persisted question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Flashcard {
    /// Assigned by the database, increases with every insert
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Set by the database at insertion
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a flashcard, id and timestamp are assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
}

impl NewFlashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Reject blank fields before they reach the table's CHECK constraints.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.question.trim().is_empty() {
            return Err(StorageError::EmptyField("question"));
        }
        if self.answer.trim().is_empty() {
            return Err(StorageError::EmptyField("answer"));
        }
        Ok(())
    }
}
