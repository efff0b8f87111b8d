//! Slice Viewer API Service Library
//!
//! HTTP surface over the compositor: viewport figures, slice property and
//! visibility broadcasts, health and metrics.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router with its middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Figures
        .route("/figure/dual", post(handlers::figure::dual_figure_handler))
        .route("/figure/:viewport", post(handlers::figure::figure_handler))
        .route("/color-scale", get(handlers::figure::color_scale_handler))
        // Slice broadcasts
        .route(
            "/slices/properties",
            post(handlers::slices::properties_handler),
        )
        .route(
            "/slices/visibility",
            post(handlers::slices::visibility_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
