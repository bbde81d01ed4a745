//! In-memory flashcard store.
//!
//! Follows the same validation and ordering rules as the Postgres store so
//! handler tests can run without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    error::StorageError,
    models::{Flashcard, NewFlashcard},
    store::FlashcardStore,
};

#[derive(Debug, Default)]
struct Inner {
    cards: Vec<Flashcard>,
    next_id: i64,
}

/// Thread-safe in-memory store using RwLock.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlashcardStore {
    inner: Arc<RwLock<Inner>>,
    failing: bool,
}

impl MemoryFlashcardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with [`StorageError::Unavailable`].
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Unavailable(
                "connection refused (memory store)".to_string(),
            ));
        }
        Ok(())
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("memory store lock poisoned".to_string())
    }

    fn push(inner: &mut Inner, card: &NewFlashcard) -> i64 {
        inner.next_id += 1;
        inner.cards.push(Flashcard {
            id: inner.next_id,
            question: card.question.clone(),
            answer: card.answer.clone(),
            created_at: Utc::now(),
        });
        inner.next_id
    }
}

#[async_trait]
impl FlashcardStore for MemoryFlashcardStore {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        self.check_available()
    }

    async fn insert(&self, question: &str, answer: &str) -> Result<i64, StorageError> {
        self.check_available()?;
        let card = NewFlashcard::new(question, answer);
        card.validate()?;

        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(Self::push(&mut inner, &card))
    }

    async fn insert_all(&self, cards: &[NewFlashcard]) -> Result<Vec<i64>, StorageError> {
        self.check_available()?;
        for card in cards {
            card.validate()?;
        }

        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(cards.iter().map(|card| Self::push(&mut inner, card)).collect())
    }

    async fn list_all(&self) -> Result<Vec<Flashcard>, StorageError> {
        self.check_available()?;
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;

        let mut cards = inner.cards.clone();
        cards.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(cards)
    }

    async fn count(&self) -> Result<i64, StorageError> {
        self.check_available()?;
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.cards.len() as i64)
    }
}
