//! The storage seam used by request handlers.
//!
//! [`FlashcardStore`] is the only way handlers touch persisted state.
//! [`PgFlashcardStore`] backs it with the `flashcards` table; every call takes
//! its own connection (or transaction) from the pool and hands it back when
//! the call returns, on success and on error alike.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::StorageError,
    models::{Flashcard, NewFlashcard},
    repositories::flashcard,
};

#[async_trait]
pub trait FlashcardStore: Send + Sync {
    /// Create the database and the `flashcards` table if absent.
    async fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Append one flashcard and return its id.
    async fn insert(&self, question: &str, answer: &str) -> Result<i64, StorageError>;

    /// Append every flashcard atomically, returning ids in input order.
    async fn insert_all(&self, cards: &[NewFlashcard]) -> Result<Vec<i64>, StorageError>;

    /// Every stored flashcard, newest first.
    async fn list_all(&self) -> Result<Vec<Flashcard>, StorageError>;

    async fn count(&self) -> Result<i64, StorageError>;
}

/// PostgreSQL-backed flashcard store
#[derive(Debug, Clone)]
pub struct PgFlashcardStore {
    pool: PgPool,
    database_url: String,
}

impl PgFlashcardStore {
    pub fn new(pool: PgPool, database_url: impl Into<String>) -> Self {
        Self {
            pool,
            database_url: database_url.into(),
        }
    }

    /// Create the database if needed, then open a pool against it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        crate::ensure_database(database_url).await?;
        let pool = crate::create_pool(database_url, max_connections).await?;
        Ok(Self::new(pool, database_url))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FlashcardStore for PgFlashcardStore {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        crate::ensure_db_and_migrate(&self.database_url, &self.pool).await
    }

    async fn insert(&self, question: &str, answer: &str) -> Result<i64, StorageError> {
        NewFlashcard::new(question, answer).validate()?;
        let id = flashcard::insert_flashcard(&self.pool, question, answer).await?;
        tracing::debug!(id, "Inserted flashcard");
        Ok(id)
    }

    async fn insert_all(&self, cards: &[NewFlashcard]) -> Result<Vec<i64>, StorageError> {
        for card in cards {
            card.validate()?;
        }

        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(cards.len());
        for card in cards {
            ids.push(flashcard::insert_flashcard(&mut *tx, &card.question, &card.answer).await?);
        }
        tx.commit().await?;

        tracing::debug!(count = ids.len(), "Inserted flashcards");
        Ok(ids)
    }

    async fn list_all(&self) -> Result<Vec<Flashcard>, StorageError> {
        Ok(flashcard::list_flashcards(&self.pool).await?)
    }

    async fn count(&self) -> Result<i64, StorageError> {
        Ok(flashcard::count_flashcards(&self.pool).await?)
    }
}
