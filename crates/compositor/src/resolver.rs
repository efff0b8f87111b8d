//! Overlay selection from mask-type and mask-format UI state.

use tracing::debug;
use viewer_common::{MaskFormat, MaskType, ViewerResult};

use crate::layer::{
    build_contour_layer, build_image_layer, build_placeholder_layer, ColorModel, Layer, PixelBuffer,
};

/// The resolved overlay for one viewport.
///
/// Built from raw UI state with [`MaskSelection::parse`]; once built, every
/// combination is valid and [`resolve_overlay`] cannot hit an unmatched case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskSelection {
    /// No overlay; the second layer is a placeholder.
    Hidden,
    /// Overlay the given mask as contour strokes.
    Contour(MaskType),
    /// Overlay the given mask as an RGBA image.
    Filled(MaskType),
}

impl MaskSelection {
    /// Combine a mask type with a mask format.
    pub fn new(mask_type: MaskType, mask_format: MaskFormat) -> Self {
        if !mask_type.is_present() {
            return MaskSelection::Hidden;
        }
        match mask_format {
            MaskFormat::Contour => MaskSelection::Contour(mask_type),
            MaskFormat::FilledMask => MaskSelection::Filled(mask_type),
        }
    }

    /// Parse wire ids for mask type and format.
    ///
    /// The format is only read when the mask type renders an overlay, so a
    /// hidden mask accepts any format string.
    pub fn parse(mask_type: &str, mask_format: &str) -> ViewerResult<Self> {
        let mask_type: MaskType = mask_type.parse()?;
        if !mask_type.is_present() {
            return Ok(MaskSelection::Hidden);
        }
        let mask_format: MaskFormat = mask_format.parse()?;
        Ok(Self::new(mask_type, mask_format))
    }

    pub fn mask_type(&self) -> MaskType {
        match self {
            MaskSelection::Hidden => MaskType::None,
            MaskSelection::Contour(t) | MaskSelection::Filled(t) => *t,
        }
    }
}

/// Build the overlay layer for a viewport.
///
/// Fails only when a contour overlay is requested and `overlay_source` is not
/// a valid serialized scalar field.
pub fn resolve_overlay(
    selection: MaskSelection,
    overlay_source: &PixelBuffer,
    stroke_width: f64,
) -> ViewerResult<Layer> {
    let layer = match selection {
        MaskSelection::Hidden => build_placeholder_layer(),
        MaskSelection::Contour(_) => build_contour_layer(overlay_source.as_str(), stroke_width)?,
        MaskSelection::Filled(_) => build_image_layer(overlay_source, ColorModel::Rgba),
    };

    debug!(
        mask_type = %selection.mask_type(),
        overlay = %layer.kind(),
        "Resolved overlay layer"
    );

    Ok(layer)
}
