//! Stickytab configuration (stickytab.toml)
//!
//! Every section and field is optional; missing values fall back to the
//! defaults native scroll views and the stock tab bar use.
//!
//! ```toml
//! [scroll]
//! rubber_band_constant = 0.55
//!
//! [scroll.decay]
//! resistance = 2.0
//!
//! [tab_bar]
//! height = 48.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stickytab_animation::{DecayConfig, SpringConfig, RUBBER_BAND_CONSTANT};
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the config back to TOML failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StickyConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub tab_bar: TabBarConfig,
    #[serde(default)]
    pub pane: PaneConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl StickyConfig {
    /// Parse from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load from a file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Scroll physics configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Rubber-band elasticity when dragging past the bounds (default: true)
    pub bounce_enabled: bool,
    /// Resistance constant for the rubber-band curve
    pub rubber_band_constant: f32,
    /// Momentum decay after release
    pub decay: DecayConfig,
    /// Spring pulling an overscrolled surface back into bounds
    pub spring: SpringConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bounce_enabled: true,
            rubber_band_constant: RUBBER_BAND_CONSTANT,
            decay: DecayConfig::default(),
            spring: SpringConfig::default(),
        }
    }
}

impl ScrollConfig {
    /// Config with rubber banding and spring-back disabled
    pub fn no_bounce() -> Self {
        Self {
            bounce_enabled: false,
            ..Default::default()
        }
    }
}

/// RGBA color, components in 0.0..=1.0
pub type Rgba = [f32; 4];

/// Tab bar appearance and sizing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TabBarConfig {
    /// Intrinsic bar height
    pub height: f32,
    /// Spacing between cells and at both ends of the strip
    pub cell_spacing: f32,
    /// Thickness of the bar's bottom border
    pub bottom_border_width: f32,
    /// Title font size (points)
    pub font_size: f32,
    /// Horizontal advance per title character for the stock measurer
    pub char_advance: f32,
    pub background_color: Rgba,
    pub bottom_border_color: Rgba,
    pub text_color: Rgba,
    pub selected_text_color: Rgba,
    /// Indicator under the selected cell
    pub selected_border_color: Rgba,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            height: 60.0,
            cell_spacing: 4.0,
            bottom_border_width: 2.0,
            font_size: 14.0,
            char_advance: 8.0,
            background_color: [0.97, 0.97, 0.97, 1.0],
            bottom_border_color: [0.92, 0.92, 0.92, 1.0],
            text_color: [0.4, 0.4, 0.4, 1.0],
            selected_text_color: [0.0, 0.0, 0.0, 1.0],
            selected_border_color: [0.0, 0.4, 0.4, 1.0],
        }
    }
}

/// Default chrome insets for panes that don't declare their own
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaneConfig {
    pub top_inset: f32,
    pub bottom_inset: f32,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            top_inset: 10.0,
            bottom_inset: 10.0,
        }
    }
}

/// Vertical pan recognizer configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Allow the vertical pan to recognize alongside other recognizers
    pub recognize_simultaneously: bool,
}
