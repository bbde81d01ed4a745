use async_trait::async_trait;

use crate::{FlashcardGenerator, GenerationError, QaPair};

/// Returns the same three sample pairs for any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGenerator;

/// The fixed output of [`StubGenerator`].
pub fn sample_pairs() -> Vec<QaPair> {
    vec![
        QaPair::new("What is the capital of France?", "Paris"),
        QaPair::new("What is 2 + 2?", "4"),
        QaPair::new("What is the largest planet in our solar system?", "Jupiter"),
    ]
}

#[async_trait]
impl FlashcardGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, _text: &str) -> Result<Vec<QaPair>, GenerationError> {
        Ok(sample_pairs())
    }
}
