//! Slice representation identities and broadcast properties.

use serde::{Deserialize, Serialize};

/// Unique identifier for one slice representation in the 3D view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceIdentity(pub String);

impl SliceIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SliceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SliceIdentity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Display window and opacity applied to every slice representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceProperties {
    /// Window level (center of the displayed intensity range)
    pub color_level: f64,

    /// Window width (extent of the displayed intensity range)
    pub color_window: f64,

    /// Opacity in [0, 1]
    pub opacity: f64,
}

impl SliceProperties {
    pub fn new(color_level: f64, color_window: f64, opacity: f64) -> Self {
        Self {
            color_level,
            color_window,
            opacity,
        }
    }
}

/// Visibility as consumed by a 3D slice representation: `1` shown, `0` hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationVisibility {
    pub visibility: u8,
}

impl RepresentationVisibility {
    pub fn is_visible(&self) -> bool {
        self.visibility != 0
    }
}

impl From<bool> for RepresentationVisibility {
    fn from(visible: bool) -> Self {
        Self {
            visibility: u8::from(visible),
        }
    }
}
