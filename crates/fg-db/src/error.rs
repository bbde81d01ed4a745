use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
