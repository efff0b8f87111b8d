//! Viewport figure handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use compositor::{
    compose_dual, compose_viewport, contour_color_scale, ColorStop, DualFigure, Figure,
    MaskSelection, PixelBuffer, ViewportSources,
};
use metrics::counter;
use serde::Deserialize;
use tracing::debug;
use viewer_common::{ViewerResult, ViewportRole};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /figure/:viewport`.
#[derive(Debug, Deserialize)]
pub struct FigureRequest {
    #[serde(default)]
    pub primary_source: Option<PixelBuffer>,
    #[serde(default)]
    pub support_source: Option<PixelBuffer>,
    #[serde(default)]
    pub contour_line_width: Option<f64>,
    pub mask_type: String,
    pub mask_format: String,
}

/// Request body for `POST /figure/dual`.
#[derive(Debug, Deserialize)]
pub struct DualFigureRequest {
    #[serde(default)]
    pub main: ViewportSources,
    #[serde(default)]
    pub support: ViewportSources,
    #[serde(default)]
    pub contour_line_width: Option<f64>,
    pub mask_type: String,
    pub mask_format: String,
}

fn record_figure(role: ViewportRole, figure: &Figure) {
    let overlay = figure
        .as_ready()
        .map(|f| f.overlay.kind().as_str())
        .unwrap_or("not_ready");
    counter!(
        "viewer_figures_composed_total",
        "role" => role.as_str(),
        "overlay" => overlay
    )
    .increment(1);
}

/// Stroke width for a selection. The configured range only binds contour
/// overlays; other overlays never draw a stroke.
fn stroke_width_for(
    state: &AppState,
    selection: MaskSelection,
    requested: Option<f64>,
) -> ViewerResult<f64> {
    let contour = &state.config.contour;
    match selection {
        MaskSelection::Contour(_) => contour.resolve_line_width(requested),
        MaskSelection::Hidden | MaskSelection::Filled(_) => {
            Ok(requested.unwrap_or(contour.default_line_width))
        }
    }
}

/// POST /figure/:viewport - Compose one viewport
pub async fn figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(viewport): Path<String>,
    Json(request): Json<FigureRequest>,
) -> Result<Json<Figure>, ApiError> {
    let role: ViewportRole = viewport.parse()?;

    if request.primary_source.is_none() || request.support_source.is_none() {
        debug!(role = %role, "Viewport sources not ready");
        record_figure(role, &Figure::NotReady);
        return Ok(Json(Figure::NotReady));
    }

    let selection = MaskSelection::parse(&request.mask_type, &request.mask_format)?;
    let stroke_width = stroke_width_for(&state, selection, request.contour_line_width)?;

    debug!(
        role = %role,
        mask_type = %selection.mask_type(),
        stroke_width,
        "Figure request"
    );

    let figure = compose_viewport(
        request.primary_source.as_ref(),
        request.support_source.as_ref(),
        selection,
        stroke_width,
        role,
    )?;
    record_figure(role, &figure);

    Ok(Json(figure))
}

fn is_ready(sources: &ViewportSources) -> bool {
    sources.primary_source.is_some() && sources.support_source.is_some()
}

/// POST /figure/dual - Compose both viewports from one mask selection
pub async fn dual_figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<DualFigureRequest>,
) -> Result<Json<DualFigure>, ApiError> {
    if !is_ready(&request.main) && !is_ready(&request.support) {
        debug!("Neither viewport has its sources yet");
        let figures = DualFigure {
            main: Figure::NotReady,
            support: Figure::NotReady,
        };
        record_figure(ViewportRole::Main, &figures.main);
        record_figure(ViewportRole::Support, &figures.support);
        return Ok(Json(figures));
    }

    let selection = MaskSelection::parse(&request.mask_type, &request.mask_format)?;
    let stroke_width = stroke_width_for(&state, selection, request.contour_line_width)?;

    let figures = compose_dual(&request.main, &request.support, selection, stroke_width)?;
    record_figure(ViewportRole::Main, &figures.main);
    record_figure(ViewportRole::Support, &figures.support);

    Ok(Json(figures))
}

/// GET /color-scale - The contour overlay color scale
pub async fn color_scale_handler() -> Json<&'static [ColorStop]> {
    Json(contour_color_scale())
}
