pub mod handlers;
pub mod types;

use crate::{Result, config::Config, inference::HuggingFaceClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tutor", post(handlers::tutor))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize inference client
    let client = HuggingFaceClient::new(config.inference.clone())?;
    info!("Inference endpoint: {}", client.endpoint());

    let app_state = AppState {
        client: Arc::new(client),
        tutor: Arc::new(config.tutor.clone()),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
