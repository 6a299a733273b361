pub mod handlers;
pub mod types;

use crate::{Result, assistant::Assistant, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Chat messages have no size bound.
        .route(
            "/chat",
            post(handlers::chat).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = Assistant::new(config.llm.clone())?;
    info!(
        "Assistant ready (temperature={}, top_p={}, top_k={}, max_output_tokens={})",
        assistant.config().generation.temperature,
        assistant.config().generation.top_p,
        assistant.config().generation.top_k,
        assistant.config().generation.max_output_tokens
    );

    let app_state = AppState {
        assistant: Arc::new(assistant),
    };
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
