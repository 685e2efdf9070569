pub mod handlers;
pub mod types;

use crate::{config::Config, tarot::TarotService, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/api/interpret", post(handlers::interpret))
        .route("/api/followup", post(handlers::followup))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Fails on missing inference settings before the listener is bound
    let service = TarotService::from_config(&config)?;

    let app_state = handlers::AppState {
        service: Arc::new(service),
        model: config.inference.model()?.to_string(),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
