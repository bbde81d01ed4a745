use sqlx::{Executor, Postgres};

use crate::models::Flashcard;

pub async fn insert_flashcard<'e, E>(
    executor: E,
    question: &str,
    answer: &str,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO flashcards (question, answer)
            VALUES ($1, $2)
            RETURNING id
        "#,
    )
    .bind(question)
    .bind(answer)
    .fetch_one(executor)
    .await
}

/// All flashcards, newest first.
pub async fn list_flashcards<'e, E>(executor: E) -> Result<Vec<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, created_at
            FROM flashcards
            ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn count_flashcards<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM flashcards
        "#,
    )
    .fetch_one(executor)
    .await
}
