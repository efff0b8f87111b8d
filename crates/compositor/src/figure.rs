//! Viewport figure composition.
//!
//! Each viewport renders exactly two layers: the slice image as the primary
//! layer and the mask overlay (or a placeholder) on top. Both viewports share
//! one static layout.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;
use viewer_common::{ViewerResult, ViewportRole};

use crate::color_scale::Rgba;
use crate::layer::{build_image_layer, ColorModel, Layer, PixelBuffer};
use crate::resolver::{resolve_overlay, MaskSelection};

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub b: u32,
    pub l: u32,
    pub r: u32,
    pub t: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLayout {
    pub visible: bool,
}

/// Chart layout shared by both viewports.
#[derive(Debug, PartialEq, Serialize)]
pub struct FigureLayout {
    pub margin: Margin,
    #[serde(rename = "paper_bgcolor")]
    pub paper_background: Rgba,
    #[serde(rename = "plot_bgcolor")]
    pub plot_background: Rgba,
    /// Deliberately unknown template name, which strips the charting
    /// library's default decoration.
    pub template: &'static str,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
}

static FIGURE_LAYOUT: FigureLayout = FigureLayout {
    margin: Margin { b: 1, l: 1, r: 1, t: 1 },
    paper_background: Rgba::transparent(),
    plot_background: Rgba::transparent(),
    template: "...",
    xaxis: AxisLayout { visible: false },
    yaxis: AxisLayout { visible: false },
};

pub fn figure_layout() -> &'static FigureLayout {
    &FIGURE_LAYOUT
}

/// A ready-to-render viewport: the slice image under its overlay.
///
/// Serialized as `{"data": [primary, overlay], "layout": {...}}`; renderers
/// must keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportFigure {
    pub role: ViewportRole,
    pub primary: Layer,
    pub overlay: Layer,
    pub layout: &'static FigureLayout,
}

impl ViewportFigure {
    /// Layers in render order.
    pub fn layers(&self) -> [&Layer; 2] {
        [&self.primary, &self.overlay]
    }
}

impl Serialize for ViewportFigure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewportFigure", 2)?;
        state.serialize_field("data", &self.layers())?;
        state.serialize_field("layout", self.layout)?;
        state.end()
    }
}

/// Result of composing a viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Upstream image data has not loaded yet; renders as an empty chart.
    NotReady,
    Ready(ViewportFigure),
}

impl Figure {
    pub fn is_ready(&self) -> bool {
        matches!(self, Figure::Ready(_))
    }

    pub fn as_ready(&self) -> Option<&ViewportFigure> {
        match self {
            Figure::Ready(figure) => Some(figure),
            Figure::NotReady => None,
        }
    }
}

/// `NotReady` serializes as `{}`.
impl Serialize for Figure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Figure::NotReady => serializer.serialize_map(Some(0))?.end(),
            Figure::Ready(figure) => figure.serialize(serializer),
        }
    }
}

/// Compose the figure for one viewport.
///
/// Returns [`Figure::NotReady`] when either source is missing rather than a
/// partial figure. Errors come only from the overlay (see
/// [`resolve_overlay`]).
pub fn compose_viewport(
    primary_source: Option<&PixelBuffer>,
    support_source: Option<&PixelBuffer>,
    selection: MaskSelection,
    stroke_width: f64,
    role: ViewportRole,
) -> ViewerResult<Figure> {
    let (primary_source, support_source) = match (primary_source, support_source) {
        (Some(primary), Some(support)) => (primary, support),
        _ => {
            debug!(
                role = %role,
                has_primary = primary_source.is_some(),
                has_support = support_source.is_some(),
                "Viewport sources not ready"
            );
            return Ok(Figure::NotReady);
        }
    };

    let primary = build_image_layer(primary_source, ColorModel::Rgb);
    let overlay = resolve_overlay(selection, support_source, stroke_width)?;

    debug!(role = %role, overlay = %overlay.kind(), "Composed viewport figure");

    Ok(Figure::Ready(ViewportFigure {
        role,
        primary,
        overlay,
        layout: figure_layout(),
    }))
}

/// Image sources for one viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSources {
    #[serde(default)]
    pub primary_source: Option<PixelBuffer>,
    #[serde(default)]
    pub support_source: Option<PixelBuffer>,
}

/// Figures for both viewports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualFigure {
    pub main: Figure,
    pub support: Figure,
}

/// Compose both viewports from one mask selection and stroke width, so the
/// two can only differ in which image is primary.
pub fn compose_dual(
    main: &ViewportSources,
    support: &ViewportSources,
    selection: MaskSelection,
    stroke_width: f64,
) -> ViewerResult<DualFigure> {
    Ok(DualFigure {
        main: compose_viewport(
            main.primary_source.as_ref(),
            main.support_source.as_ref(),
            selection,
            stroke_width,
            ViewportRole::Main,
        )?,
        support: compose_viewport(
            support.primary_source.as_ref(),
            support.support_source.as_ref(),
            selection,
            stroke_width,
            ViewportRole::Support,
        )?,
    })
}
