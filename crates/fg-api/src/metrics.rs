//! Prometheus metrics for monitoring API performance and health.

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Configure histogram buckets for request duration (in seconds)
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ],
    )?;

    // Install the exporter and get the handle
    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(req.extensions().get::<MatchedPath>());

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .increment(1.0);

    let response = next.run(req).await;

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .decrement(1.0);

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Label requests by their route template so unknown paths share one series
fn route_label(matched: Option<&MatchedPath>) -> String {
    matched.map_or_else(|| "unmatched".to_string(), |m| m.as_str().to_string())
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record database query metrics
pub fn record_db_query(query_name: &str, duration_secs: f64, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        "db_queries_total",
        "query" => query_name.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "db_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Record one generation call and how many pairs it produced
pub fn record_generation(provider: &'static str, pairs: usize, success: bool) {
    let status = if success { "success" } else { "failure" };

    counter!(
        "flashcard_generations_total",
        "provider" => provider,
        "status" => status
    )
    .increment(1);

    if success {
        counter!("flashcards_generated_total", "provider" => provider).increment(pairs as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_route_label_without_match() {
        assert_eq!(route_label(None), "unmatched");
    }

    #[tokio::test]
    async fn test_track_metrics_passes_response_through() {
        // No recorder installed: metrics calls are no-ops
        let app = Router::new()
            .route("/get-flashcards", get(|| async { "ok" }))
            .layer(middleware::from_fn(track_metrics));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/get-flashcards")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
