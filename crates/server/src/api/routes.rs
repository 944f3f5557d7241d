use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{figma, handlers};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Export steps, each self-contained
        .route("/figma/file", post(figma::fetch_file))
        .route("/figma/image_nodes", post(figma::image_nodes))
        .route("/figma/image", post(figma::image_urls))
        .route("/figma/image_download", post(figma::image_download))
        .route("/figma/summary", post(figma::summary))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
