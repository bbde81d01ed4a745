use std::sync::Arc;

use fg_db::{FlashcardStore, PgFlashcardStore};
use fg_gen::FlashcardGenerator;

use crate::{ApiConfig, config::Environment};

/// Shared handler state. Holds no mutable data of its own: the store owns
/// persisted state and the generator is stateless between calls.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn FlashcardStore>,
    pub generator: Arc<dyn FlashcardGenerator>,
    pub max_text_length: usize,
    pub environment: Environment,
}

impl ApiState {
    /// Connect to Postgres, bootstrap the schema and build the configured generator.
    pub async fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let store =
            PgFlashcardStore::connect(&config.database_url()?, config.db_max_connections).await?;
        store.ensure_schema().await?;
        tracing::info!("Database ready");

        let generator = fg_gen::build_generator(&config.generator_config())?;

        Ok(Self::from_parts(config, Arc::new(store), generator))
    }

    /// Assemble state from already-built components.
    pub fn from_parts(
        config: &ApiConfig,
        store: Arc<dyn FlashcardStore>,
        generator: Arc<dyn FlashcardGenerator>,
    ) -> Self {
        Self {
            store,
            generator,
            max_text_length: config.max_text_length,
            environment: config.env,
        }
    }
}
