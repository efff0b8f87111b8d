//! Contour stroke color scale.
//!
//! Hard-coded to the ITK-SNAP label look-up table so that contour strokes
//! use the same colors as filled segmentation masks: label 1 red, 2 green,
//! 3 blue, 4 yellow, 5 cyan, 6 magenta, background transparent.

use serde::{Serialize, Serializer};
use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// CSS functional notation, e.g. `rgba(255, 0, 0, 255)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A stop in a normalized color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1]
    pub position: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Serialized as a `[position, "rgba(...)"]` pair, the form chart
/// colorscales take.
impl Serialize for ColorStop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.position, self.color).serialize(serializer)
    }
}

static CONTOUR_COLOR_SCALE: [ColorStop; 7] = [
    ColorStop::new(0.0, Rgba::transparent()),
    ColorStop::new(0.167, Rgba::opaque(255, 0, 0)),
    ColorStop::new(0.333, Rgba::opaque(0, 255, 0)),
    ColorStop::new(0.5, Rgba::opaque(0, 0, 255)),
    ColorStop::new(0.667, Rgba::opaque(255, 255, 0)),
    ColorStop::new(0.833, Rgba::opaque(0, 255, 255)),
    ColorStop::new(1.0, Rgba::opaque(255, 0, 255)),
];

/// The color scale shared by every contour layer in both viewports.
pub fn contour_color_scale() -> &'static [ColorStop] {
    &CONTOUR_COLOR_SCALE
}
