use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common::{TestClient, TestStateBuilder};

#[tokio::test]
async fn test_landing_page() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    let response = client.get("/").await;
    response.assert_status(StatusCode::OK);
    assert!(
        response
            .header("content-type")
            .is_some_and(|ct| ct.starts_with("text/html"))
    );

    let page = response.text();
    assert!(page.contains("<textarea id=\"study-notes\""));
    assert!(page.contains("/static/script.js"));
}

#[tokio::test]
async fn test_script_is_served() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    let response = client.get("/static/script.js").await;
    response.assert_status(StatusCode::OK);
    assert!(
        response
            .header("content-type")
            .is_some_and(|ct| ct.starts_with("text/javascript"))
    );
    assert!(response.text().contains("/generate-flashcards"));
}

#[tokio::test]
async fn test_health() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    let response = client.get("/flashcards/42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "The requested resource was not found" })
    );
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    let response = client.get("/health").await;
    let generated = response.header("x-request-id").unwrap();
    assert_eq!(generated.len(), 36);

    let request = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-abc-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = client.request(request).await;
    assert_eq!(response.header("x-request-id"), Some("trace-abc-123"));
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let client = TestClient::new(TestStateBuilder::new().build_app());

    for uri in ["/", "/get-flashcards"] {
        let response = client.get(uri).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
        assert_eq!(response.header("x-frame-options"), Some("DENY"));
        assert_eq!(response.header("referrer-policy"), Some("no-referrer"));
        assert!(
            response
                .header("content-security-policy")
                .is_some_and(|csp| csp.starts_with("default-src 'self'"))
        );
        assert_eq!(response.header("strict-transport-security"), None);
    }
}

#[tokio::test]
async fn test_hsts_in_production() {
    let client = TestClient::new(
        TestStateBuilder::new()
            .var("ENVIRONMENT", "production")
            .build_app(),
    );

    let response = client.get("/get-flashcards").await;
    response.assert_status(StatusCode::OK);
    assert!(response.header("strict-transport-security").is_some());
}
