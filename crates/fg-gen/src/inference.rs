//! Hosted question-answering provider.
//!
//! Asks a fixed list of seed questions against the input text using an
//! extractive QA model (Hugging Face Inference API request shape) and keeps
//! the confident, distinct answers. One request per seed question, no
//! retries; the first failing request fails the whole call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{FlashcardGenerator, GenerationError, InferenceConfig, QaPair};

#[derive(Debug, Clone)]
pub struct InferenceGenerator {
    client: Client,
    api_url: String,
    api_token: String,
    seed_questions: Vec<String>,
    max_pairs: usize,
    min_score: f64,
}

impl InferenceGenerator {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MissingCredential`] if no token is set.
    pub fn new(config: &InferenceConfig) -> Result<Self, GenerationError> {
        let api_token = config
            .api_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_token,
            seed_questions: config.seed_questions.clone(),
            max_pairs: config.max_pairs,
            min_score: config.min_score,
        })
    }

    async fn ask(&self, question: &str, context: &str) -> Result<QaAnswer, GenerationError> {
        let request = QaRequest {
            inputs: QaInputs { question, context },
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(if status == StatusCode::SERVICE_UNAVAILABLE {
                GenerationError::Unavailable(message)
            } else {
                GenerationError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct QaAnswer {
    answer: String,
    score: f64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Prefer the API's `{"error": ...}` message, fall back to the raw body.
async fn error_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body)
}

/// Trimmed answer if it is non-blank and scored at least `min_score`.
fn accepted_answer(answer: &QaAnswer, min_score: f64) -> Option<&str> {
    let text = answer.answer.trim();
    (!text.is_empty() && answer.score >= min_score).then_some(text)
}

/// Case-insensitive match against answers already kept, Unicode-aware.
fn is_duplicate(pairs: &[QaPair], answer: &str) -> bool {
    let answer = answer.to_lowercase();
    pairs.iter().any(|p| p.answer.to_lowercase() == answer)
}

#[async_trait]
impl FlashcardGenerator for InferenceGenerator {
    fn name(&self) -> &'static str {
        "inference"
    }

    async fn generate(&self, text: &str) -> Result<Vec<QaPair>, GenerationError> {
        let mut pairs: Vec<QaPair> = Vec::new();

        for question in &self.seed_questions {
            if pairs.len() >= self.max_pairs {
                break;
            }

            let answer = self.ask(question, text).await?;
            let Some(accepted) = accepted_answer(&answer, self.min_score) else {
                tracing::debug!(question = %question, score = answer.score, "Dropped answer");
                continue;
            };

            if is_duplicate(&pairs, accepted) {
                continue;
            }
            pairs.push(QaPair::new(question.as_str(), accepted));
        }

        tracing::debug!(count = pairs.len(), "Generated flashcards from inference");
        Ok(pairs)
    }
}
