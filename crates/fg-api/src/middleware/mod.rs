pub mod cors;
pub mod request_id;
pub mod security_headers;

use axum::{Router, middleware};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{config::Environment, metrics};

/// Wrap a router with the HTTP stack shared by every endpoint.
///
/// Outermost first: request id, metrics, tracing, CORS, security headers.
pub fn apply<S>(router: Router<S>, environment: Environment, allowed_origins: Vec<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let router = security_headers::apply(router, environment);

    router
        .layer(cors::create_cors_layer(allowed_origins))
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware))
}
