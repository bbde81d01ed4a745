pub mod error;
#[cfg(feature = "testkit")]
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StorageError;
#[cfg(feature = "testkit")]
pub use memory::MemoryFlashcardStore;
pub use models::{Flashcard, NewFlashcard};
pub use store::{FlashcardStore, PgFlashcardStore};

use std::time::Duration;

use sqlx::{PgPool, Postgres, migrate::MigrateDatabase, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool.
///
/// Opens one connection before returning, so an unreachable server fails
/// here (after the acquire timeout) rather than on the first query.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Create the database named in `database_url` if it does not exist yet.
pub async fn ensure_database(database_url: &str) -> Result<(), StorageError> {
    if !Postgres::database_exists(database_url).await? {
        tracing::info!("Database not found, creating it");
        Postgres::create_database(database_url).await?;
    }

    Ok(())
}

/// Ensure the database exists and run migrations in this crate's `migrations/` folder.
///
/// Safe to call on every start: both steps are no-ops once applied.
pub async fn ensure_db_and_migrate(database_url: &str, pool: &PgPool) -> Result<(), StorageError> {
    ensure_database(database_url).await?;

    // Run migrations bundled at compile time from `migrations/`
    sqlx::migrate!().run(pool).await?;

    Ok(())
}
