use axum::{Router, routing::get};
use fg_api::{
    config::ApiConfig, metrics, middleware, router, state::ApiState, tracing::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(config.env);
    let metrics_handle = metrics::init_metrics()?;

    // Connects to the database and bootstraps the schema before serving
    let state = ApiState::new(&config).await?;

    let metrics_router = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = router::router().with_state(state).merge(metrics_router);
    let app = middleware::apply(app, config.env, config.parsed_allowed_origins());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, environment = ?config.env, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
