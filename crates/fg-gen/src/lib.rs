//! Flashcard generation providers.
//!
//! A provider turns free text into question/answer pairs. Callers depend on
//! the [`FlashcardGenerator`] trait only; which implementation runs is
//! decided once at startup by [`build_generator`].

pub mod config;
pub mod error;
pub mod inference;
pub mod stub;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use config::{GeneratorConfig, InferenceConfig, ProviderKind};
pub use error::GenerationError;
pub use inference::InferenceGenerator;
pub use stub::StubGenerator;

/// A generated question/answer pair that has not been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Turns free text into question/answer pairs.
///
/// Implementations never write to storage; persisting the result is the
/// caller's job.
#[async_trait]
pub trait FlashcardGenerator: Send + Sync {
    /// Provider name for logging and metrics.
    fn name(&self) -> &'static str;

    /// Generate zero or more pairs from non-empty `text`.
    async fn generate(&self, text: &str) -> Result<Vec<QaPair>, GenerationError>;
}

/// Build the configured generation provider.
pub fn build_generator(
    config: &GeneratorConfig,
) -> Result<Arc<dyn FlashcardGenerator>, GenerationError> {
    let generator: Arc<dyn FlashcardGenerator> = match config.provider {
        ProviderKind::Stub => Arc::new(StubGenerator),
        ProviderKind::Inference => Arc::new(InferenceGenerator::new(&config.inference)?),
    };

    tracing::info!(provider = generator.name(), "Flashcard generator initialized");
    Ok(generator)
}
