//! Common test fixtures for slice viewer tests.
//!
//! This module provides pre-defined inputs that represent common scenarios
//! in the viewer's UI state.

/// Encoded image sources.
pub mod sources {
    /// A 1x1 grayscale slice image as a PNG data URI.
    pub const SLICE_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAAAAAA6fptVAAAACklEQVR4nGNgAAAAAgABSK+kcQAAAABJRU5ErkJggg==";

    /// A 1x1 RGBA mask image as a PNG data URI.
    pub const MASK_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR4nGP4z8DwHwAFAAH/iZk9HQAAAABJRU5ErkJggg==";

    /// A small label field serialized as JSON rows.
    pub const LABEL_FIELD_JSON: &str = "[[0,0,0,0],[0,1,1,0],[0,1,2,0],[0,0,0,0]]";

    /// Text that is not a serialized scalar field.
    pub const NOT_A_FIELD: &str = "{\"rows\": 3}";
}

/// Wire ids for mask type dropdowns.
pub mod mask_type {
    pub const NONE: &str = "main_page_none_mask";
    pub const ORGAN_RESAMPLED: &str = "main_page_organ_resampled_mask";
    pub const EVALUATION: &str = "main_page_evaluation_mask";
}

/// Wire ids for mask format dropdowns.
pub mod mask_format {
    pub const CONTOUR: &str = "main_page_contour";
    pub const MASK: &str = "main_page_mask";
    /// A format the viewer does not support.
    pub const UNSUPPORTED: &str = "main_page_checkerboard";
}

/// Wire ids for the slice interaction mode radio items.
pub mod mode {
    pub const MACRO: &str = "main_page_macro_mode";
    pub const MICRO: &str = "main_page_micro_mode";
}

/// Default contour line width used by the viewer.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
