//! Landing page. Both files are embedded at compile time.

use axum::{
    Router,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::ApiState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const SCRIPT_JS: &str = include_str!("../../assets/script.js");

/// Create the landing page routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
