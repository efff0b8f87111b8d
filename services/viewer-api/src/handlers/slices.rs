//! Slice representation broadcast handlers.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use compositor::{broadcast_properties, ensure_unique_identities, resolve_representation_visibility};
use metrics::counter;
use serde::Deserialize;
use tracing::debug;
use viewer_common::{
    InteractionMode, RepresentationVisibility, SliceIdentity, SliceProperties, ViewerError,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /slices/properties`.
#[derive(Debug, Deserialize)]
pub struct PropertiesRequest {
    pub color_level: f64,
    pub color_window: f64,
    /// Falls back to the configured slice opacity.
    #[serde(default)]
    pub opacity: Option<f64>,
    pub slice_ids: Vec<SliceIdentity>,
}

/// Request body for `POST /slices/visibility`.
#[derive(Debug, Deserialize)]
pub struct VisibilityRequest {
    #[serde(default)]
    pub slice_id: Option<SliceIdentity>,
    pub mode: String,
    pub slice_ids: Vec<SliceIdentity>,
}

/// POST /slices/properties - Apply one window/opacity setting to every slice
pub async fn properties_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<PropertiesRequest>,
) -> Result<Json<Vec<SliceProperties>>, ApiError> {
    ensure_unique_identities(&request.slice_ids)?;

    let opacity = request.opacity.unwrap_or(state.config.slice.opacity);
    if !(0.0..=1.0).contains(&opacity) {
        return Err(ViewerError::invalid_parameter(
            "opacity",
            format!("{} is outside [0, 1]", opacity),
        )
        .into());
    }

    debug!(
        count = request.slice_ids.len(),
        color_level = request.color_level,
        color_window = request.color_window,
        opacity,
        "Slice properties request"
    );
    counter!("viewer_slice_broadcasts_total", "kind" => "properties").increment(1);

    Ok(Json(broadcast_properties(
        request.color_level,
        request.color_window,
        opacity,
        &request.slice_ids,
    )))
}

/// POST /slices/visibility - Resolve per-slice visibility for a mode
pub async fn visibility_handler(
    Json(request): Json<VisibilityRequest>,
) -> Result<Json<Vec<RepresentationVisibility>>, ApiError> {
    let mode: InteractionMode = request.mode.parse()?;
    ensure_unique_identities(&request.slice_ids)?;

    debug!(
        count = request.slice_ids.len(),
        mode = %mode,
        active = request.slice_id.as_ref().map(SliceIdentity::as_str),
        "Slice visibility request"
    );
    counter!("viewer_slice_broadcasts_total", "kind" => "visibility").increment(1);

    Ok(Json(resolve_representation_visibility(
        request.slice_id.as_ref(),
        mode,
        &request.slice_ids,
    )))
}
