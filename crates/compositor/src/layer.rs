//! Declarative chart layers and the builders that produce them.
//!
//! A layer is the JSON trace object a chart front end renders as-is. The
//! engine never rasterizes anything: image layers carry an already-encoded
//! source, contour layers carry a pre-sampled scalar field plus the
//! contouring parameters.

use serde::{Deserialize, Serialize};
use tracing::trace;
use viewer_common::{ViewerError, ViewerResult};

use crate::color_scale::{contour_color_scale, ColorStop};

/// First iso-level drawn on a scalar field.
pub const CONTOUR_LEVEL_START: f64 = 0.0;
/// Last iso-level drawn on a scalar field.
pub const CONTOUR_LEVEL_END: f64 = 6.0;
/// Spacing between iso-levels. Just under 1 so each unit-distance band of a
/// label field (up to 6 labels) gets its own stroke.
pub const CONTOUR_LEVEL_STEP: f64 = 0.999;

/// Opaque encoded image source (typically a PNG `data:` URI), or the
/// serialized scalar grid when the overlay is drawn as contours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixelBuffer(pub String);

impl PixelBuffer {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PixelBuffer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A 2D grid of samples; `None` marks a missing sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScalarField {
    rows: Vec<Vec<Option<f64>>>,
}

impl ScalarField {
    /// Parse a field serialized as a JSON array of numeric rows.
    ///
    /// Every row must have the same number of columns.
    pub fn from_json(json: &str) -> ViewerResult<Self> {
        let rows: Vec<Vec<Option<f64>>> = serde_json::from_str(json)?;

        if let Some(first) = rows.first() {
            let width = first.len();
            if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
                return Err(ViewerError::MalformedField(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }
}

/// How an image layer's pixels are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum TraceKind {
    Image,
    Contour,
}

/// Hover interaction is disabled on every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum HoverInfo {
    Skip,
}

/// Pixel payload of an image layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageData {
    /// Encoded image source
    #[serde(rename = "source")]
    Source(PixelBuffer),
    /// Raw pixel rows; only ever empty, for the placeholder
    #[serde(rename = "z")]
    Pixels(Vec<Vec<u8>>),
}

/// An image trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLayer {
    #[serde(rename = "type")]
    kind: TraceKind,
    #[serde(flatten)]
    pub data: ImageData,
    #[serde(rename = "colormodel")]
    pub color_model: ColorModel,
    #[serde(rename = "hoverinfo")]
    hover_info: HoverInfo,
}

impl ImageLayer {
    fn new(data: ImageData, color_model: ColorModel) -> Self {
        Self {
            kind: TraceKind::Image,
            data,
            color_model,
            hover_info: HoverInfo::Skip,
        }
    }
}

/// Contour coloring mode; only line strokes are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContourColoring {
    Lines,
}

/// Iso-level configuration of a contour trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContourLevels {
    pub coloring: ContourColoring,
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

/// Stroke configuration of a contour trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContourLine {
    pub width: f64,
    pub smoothing: f64,
}

/// A contour trace drawn over a scalar field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourLayer {
    #[serde(rename = "type")]
    kind: TraceKind,
    pub z: ScalarField,
    pub contours: ContourLevels,
    pub line: ContourLine,
    #[serde(rename = "showscale")]
    pub show_scale: bool,
    #[serde(rename = "hoverinfo")]
    hover_info: HoverInfo,
    #[serde(rename = "colorscale")]
    pub color_scale: &'static [ColorStop],
}

/// A renderable layer.
///
/// Serialized untagged: each inner struct carries its own `type` field, and a
/// placeholder is an (empty) image trace on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Layer {
    Image(ImageLayer),
    Contour(ContourLayer),
    Placeholder(ImageLayer),
}

/// Discriminant of a [`Layer`], for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Image,
    Contour,
    Placeholder,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Image => "image",
            LayerKind::Contour => "contour",
            LayerKind::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Image(_) => LayerKind::Image,
            Layer::Contour(_) => LayerKind::Contour,
            Layer::Placeholder(_) => LayerKind::Placeholder,
        }
    }
}

/// Wrap an encoded image source as an image layer.
///
/// The buffer is not inspected; shape problems surface in the renderer.
pub fn build_image_layer(source: &PixelBuffer, color_model: ColorModel) -> Layer {
    Layer::Image(ImageLayer::new(
        ImageData::Source(source.clone()),
        color_model,
    ))
}

/// Build a contour layer from a JSON-serialized scalar field.
pub fn build_contour_layer(serialized_field: &str, stroke_width: f64) -> ViewerResult<Layer> {
    let field = ScalarField::from_json(serialized_field)?;

    trace!(
        width = field.width(),
        height = field.height(),
        stroke_width,
        "Built contour layer"
    );

    Ok(Layer::Contour(ContourLayer {
        kind: TraceKind::Contour,
        z: field,
        contours: ContourLevels {
            coloring: ContourColoring::Lines,
            start: CONTOUR_LEVEL_START,
            end: CONTOUR_LEVEL_END,
            size: CONTOUR_LEVEL_STEP,
        },
        line: ContourLine {
            width: stroke_width,
            smoothing: 0.0,
        },
        show_scale: false,
        hover_info: HoverInfo::Skip,
        color_scale: contour_color_scale(),
    }))
}

/// An inert image layer that keeps a figure at two layers when no overlay
/// applies.
pub fn build_placeholder_layer() -> Layer {
    Layer::Placeholder(ImageLayer::new(ImageData::Pixels(Vec::new()), ColorModel::Rgb))
}
