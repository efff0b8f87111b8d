//! Viewer API configuration loading and types.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use viewer_common::{ViewerError, ViewerResult};

/// Viewer configuration loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Contour overlay settings.
    #[serde(default)]
    pub contour: ContourSettings,

    /// Defaults for slice representation properties.
    #[serde(default)]
    pub slice: SliceDefaults,
}

impl ViewerConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Viewer config file {:?} does not exist, using defaults",
                path
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse viewer config: {:?}", path))?;

        tracing::info!(
            default_line_width = config.contour.default_line_width,
            "Loaded viewer config from {:?}",
            path
        );

        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured ranges are consistent.
    pub fn validate(&self) -> Result<()> {
        let contour = &self.contour;
        if !(contour.min_line_width >= 0.0 && contour.min_line_width <= contour.max_line_width) {
            bail!(
                "contour line width range [{}, {}] is invalid",
                contour.min_line_width,
                contour.max_line_width
            );
        }
        if !(contour.min_line_width..=contour.max_line_width).contains(&contour.default_line_width)
        {
            bail!(
                "default contour line width {} is outside [{}, {}]",
                contour.default_line_width,
                contour.min_line_width,
                contour.max_line_width
            );
        }
        if !(0.0..=1.0).contains(&self.slice.opacity) {
            bail!("default slice opacity {} is outside [0, 1]", self.slice.opacity);
        }
        Ok(())
    }
}

/// Contour overlay stroke settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourSettings {
    /// Stroke width used when a request does not carry one.
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Smallest accepted stroke width.
    #[serde(default)]
    pub min_line_width: f64,

    /// Largest accepted stroke width.
    #[serde(default = "default_max_line_width")]
    pub max_line_width: f64,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            default_line_width: default_line_width(),
            min_line_width: 0.0,
            max_line_width: default_max_line_width(),
        }
    }
}

impl ContourSettings {
    /// Pick the requested stroke width, or the default when none was sent.
    pub fn resolve_line_width(&self, requested: Option<f64>) -> ViewerResult<f64> {
        let width = requested.unwrap_or(self.default_line_width);
        if !width.is_finite() || width < self.min_line_width || width > self.max_line_width {
            return Err(ViewerError::invalid_parameter(
                "contour_line_width",
                format!(
                    "{} is outside [{}, {}]",
                    width, self.min_line_width, self.max_line_width
                ),
            ));
        }
        Ok(width)
    }
}

fn default_line_width() -> f64 {
    2.0
}

fn default_max_line_width() -> f64 {
    5.0
}

/// Slice representation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliceDefaults {
    /// Opacity used when a properties request does not carry one.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for SliceDefaults {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}
