//! Layer composition for the dual-viewport slice viewer.
//!
//! Turns slice image sources and mask UI state into declarative chart
//! figures:
//! - Contour color scale
//! - Image, contour and placeholder layer builders
//! - Overlay resolution from mask type/format
//! - Viewport figure composition
//! - Slice representation property/visibility broadcasts

pub mod broadcast;
pub mod color_scale;
pub mod figure;
pub mod layer;
pub mod resolver;

pub use broadcast::{
    broadcast_properties, ensure_unique_identities, resolve_representation_visibility,
    resolve_visibility,
};
pub use color_scale::{contour_color_scale, ColorStop, Rgba};
pub use figure::{
    compose_dual, compose_viewport, figure_layout, DualFigure, Figure, FigureLayout,
    ViewportFigure, ViewportSources,
};
pub use layer::{
    build_contour_layer, build_image_layer, build_placeholder_layer, ColorModel, Layer, LayerKind,
    PixelBuffer, ScalarField,
};
pub use resolver::{resolve_overlay, MaskSelection};
