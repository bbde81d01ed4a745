use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use fg_api::{ApiConfig, ApiState, middleware};
use fg_db::{FlashcardStore, MemoryFlashcardStore};
use fg_gen::{FlashcardGenerator, GenerationError, QaPair, StubGenerator};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;

/// Generator doubles for handler tests
pub enum TestGenerator {
    Stub,
    Empty,
    Failing,
    TimingOut,
}

struct EmptyGenerator;

#[async_trait]
impl FlashcardGenerator for EmptyGenerator {
    fn name(&self) -> &'static str {
        "empty"
    }

    async fn generate(&self, _text: &str) -> Result<Vec<QaPair>, GenerationError> {
        Ok(Vec::new())
    }
}

struct FailingGenerator;

#[async_trait]
impl FlashcardGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _text: &str) -> Result<Vec<QaPair>, GenerationError> {
        Err(GenerationError::Status {
            status: 500,
            message: "model crashed".to_string(),
        })
    }
}

struct TimingOutGenerator;

#[async_trait]
impl FlashcardGenerator for TimingOutGenerator {
    fn name(&self) -> &'static str {
        "timing_out"
    }

    async fn generate(&self, _text: &str) -> Result<Vec<QaPair>, GenerationError> {
        Err(GenerationError::Timeout)
    }
}

/// Test state builder backed by the in-memory store
pub struct TestStateBuilder {
    store: MemoryFlashcardStore,
    generator: TestGenerator,
    vars: Vec<(String, String)>,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            store: MemoryFlashcardStore::new(),
            generator: TestGenerator::Stub,
            vars: Vec::new(),
        }
    }

    /// Use a specific store, e.g. to inspect it after requests
    pub fn store(mut self, store: MemoryFlashcardStore) -> Self {
        self.store = store;
        self
    }

    pub fn generator(mut self, generator: TestGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Set a configuration variable, e.g. `MAX_TEXT_LENGTH`
    pub fn var(mut self, key: &str, value: &str) -> Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> ApiState {
        let config = ApiConfig::from_vars(self.vars).expect("Invalid test configuration");

        let generator: Arc<dyn FlashcardGenerator> = match self.generator {
            TestGenerator::Stub => Arc::new(StubGenerator),
            TestGenerator::Empty => Arc::new(EmptyGenerator),
            TestGenerator::Failing => Arc::new(FailingGenerator),
            TestGenerator::TimingOut => Arc::new(TimingOutGenerator),
        };
        let store: Arc<dyn FlashcardStore> = Arc::new(self.store);

        ApiState::from_parts(&config, store, generator)
    }

    /// Build the full application router, middleware included
    pub fn build_app(self) -> Router {
        let state = self.build();
        let environment = state.environment;
        let app = fg_api::router::router().with_state(state);
        middleware::apply(app, environment, vec!["http://localhost:3000".to_string()])
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.post_raw(uri, "application/json", json_body).await
    }

    /// Send a POST request with an arbitrary body and content type
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(body.into())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
