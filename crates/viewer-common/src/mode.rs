//! UI mode selections and their wire identifiers.
//!
//! The front end reports dropdown and radio selections as component ids
//! (e.g. `main_page_contour`). Each enumeration here parses those ids, plus a
//! short alias, and rejects anything else with a dedicated error instead of
//! falling through to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ViewerError, ViewerResult};

/// Which segmentation, if any, should be drawn over the slice image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskType {
    #[serde(rename = "main_page_none_mask")]
    None,
    #[serde(rename = "main_page_organ_resampled_mask")]
    OrganResampled,
    #[serde(rename = "main_page_evaluation_mask")]
    Evaluation,
}

impl MaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskType::None => "main_page_none_mask",
            MaskType::OrganResampled => "main_page_organ_resampled_mask",
            MaskType::Evaluation => "main_page_evaluation_mask",
        }
    }

    /// True for every mask type that renders an overlay.
    pub fn is_present(&self) -> bool {
        !matches!(self, MaskType::None)
    }
}

impl FromStr for MaskType {
    type Err = ViewerError;

    fn from_str(s: &str) -> ViewerResult<Self> {
        match s {
            "main_page_none_mask" | "none" => Ok(MaskType::None),
            "main_page_organ_resampled_mask" | "organ_resampled" => Ok(MaskType::OrganResampled),
            "main_page_evaluation_mask" | "evaluation" => Ok(MaskType::Evaluation),
            other => Err(ViewerError::UnsupportedMaskType(other.to_string())),
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a present mask is represented in the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskFormat {
    #[serde(rename = "main_page_contour")]
    Contour,
    #[serde(rename = "main_page_mask")]
    FilledMask,
}

impl MaskFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskFormat::Contour => "main_page_contour",
            MaskFormat::FilledMask => "main_page_mask",
        }
    }
}

impl FromStr for MaskFormat {
    type Err = ViewerError;

    fn from_str(s: &str) -> ViewerResult<Self> {
        match s {
            "main_page_contour" | "contour" => Ok(MaskFormat::Contour),
            "main_page_mask" | "filled_mask" | "mask" => Ok(MaskFormat::FilledMask),
            other => Err(ViewerError::UnsupportedMaskFormat(other.to_string())),
        }
    }
}

impl fmt::Display for MaskFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slice collection interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Every slice representation is shown.
    #[serde(rename = "main_page_macro_mode")]
    Macro,
    /// Only the active slice representation is shown.
    #[serde(rename = "main_page_micro_mode")]
    Micro,
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Macro => "main_page_macro_mode",
            InteractionMode::Micro => "main_page_micro_mode",
        }
    }
}

impl FromStr for InteractionMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> ViewerResult<Self> {
        match s {
            "main_page_macro_mode" | "macro" => Ok(InteractionMode::Macro),
            "main_page_micro_mode" | "micro" => Ok(InteractionMode::Micro),
            other => Err(ViewerError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two synchronized 2D viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportRole {
    Main,
    Support,
}

impl ViewportRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportRole::Main => "main",
            ViewportRole::Support => "support",
        }
    }
}

impl FromStr for ViewportRole {
    type Err = ViewerError;

    fn from_str(s: &str) -> ViewerResult<Self> {
        match s {
            "main" => Ok(ViewportRole::Main),
            "support" => Ok(ViewportRole::Support),
            other => Err(ViewerError::invalid_parameter(
                "viewport",
                format!("expected 'main' or 'support', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ViewportRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
