//! TranSECT Storage Gateway
//!
//! Accepts image uploads into S3-compatible object storage, lists previously
//! uploaded images as public URLs, and serves the gallery view model.

pub mod api;
pub mod config;
pub mod error;
pub mod storage;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use transect_viz::PlotCatalog;

use crate::config::Config;
use crate::storage::ImageStore;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub config: Config,
    pub catalog: PlotCatalog,
}

/// Build the gateway router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/upload", post(api::images::upload_image))
        .route("/images", get(api::images::list_images))
        .route("/gallery", get(api::gallery::gallery_view))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// GET / - Liveness probe
async fn health() -> &'static str {
    "Server is running!"
}
