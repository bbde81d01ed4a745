//! Request ID middleware.
//!
//! Every request gets an id, taken from the client's `X-Request-ID` header
//! when present and valid, otherwise a fresh UUID. The id is attached to the
//! request's tracing span and echoed in the response headers.

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the request ID
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest client-supplied id that is accepted as-is
const MAX_REQUEST_ID_LEN: usize = 128;

pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("X-Request-ID", "test-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "test-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_oversized_request_id_is_replaced() {
        let oversized = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("X-Request-ID", oversized.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
