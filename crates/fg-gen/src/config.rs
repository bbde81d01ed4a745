//! Generation provider configuration.

use serde::Deserialize;

/// Hosted extractive question-answering model used by default.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/deepset/roberta-base-squad2";

/// Questions asked of every input text by the inference provider.
pub const DEFAULT_SEED_QUESTIONS: &[&str] = &[
    "Who is the text about?",
    "What is the main subject of the text?",
    "When did it happen?",
    "Where did it happen?",
    "Why is it significant?",
];

/// Which provider backs flashcard generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Fixed sample output, ignores the input text.
    #[default]
    Stub,
    /// Hosted question-answering model.
    Inference,
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub provider: ProviderKind,
    pub inference: InferenceConfig,
}

/// Settings for [`crate::InferenceGenerator`].
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub api_url: String,
    /// Bearer token; required when the inference provider is selected.
    pub api_token: Option<String>,
    /// Upper bound on pairs returned per call.
    pub max_pairs: usize,
    /// Answers scored below this are dropped.
    pub min_score: f64,
    /// Per-request timeout.
    pub timeout_secs: u64,
    pub seed_questions: Vec<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_MODEL_URL.to_string(),
            api_token: None,
            max_pairs: 5,
            min_score: 0.1,
            timeout_secs: 30,
            seed_questions: DEFAULT_SEED_QUESTIONS
                .iter()
                .map(|q| (*q).to_string())
                .collect(),
        }
    }
}
