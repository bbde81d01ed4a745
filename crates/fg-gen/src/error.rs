use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Inference API token is not configured")]
    MissingCredential,
    #[error("Inference request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Inference request timed out")]
    Timeout,
    #[error("Inference API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Inference model unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid inference response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}
