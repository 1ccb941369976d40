pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    generation::ImageGenerator,
    prediction::VertexPredictionClient,
    storage::GcsObjectStore,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const GENERATE_IMAGE_PATH: &str = "/generate-image";

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route(GENERATE_IMAGE_PATH, post(handlers::generate_image))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize upstream clients
    let predictor = VertexPredictionClient::new(&config.prediction)?;
    let store = GcsObjectStore::new(&config.storage)?;

    info!(
        "Using prediction endpoint {} and bucket {}",
        config.prediction.endpoint_name(),
        config.storage.bucket
    );

    let generator = ImageGenerator::new(Arc::new(predictor), Arc::new(store), &config.storage);
    let app = router(handlers::AppState::new(generator));

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
