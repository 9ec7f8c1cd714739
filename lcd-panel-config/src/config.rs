//! Panel layout configuration.
//!
//! Covers:
//! - the `PanelConfig` struct and its serde defaults
//! - builder-style `with_*` helpers
//! - semantic validation
//! - YAML file I/O (atomic write) and TOML parsing

use crate::error::ConfigError;
use crate::types::Color;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Geometry, colors and animation rate shared by every character panel of a
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Pixel rows per character cell; the last row is the cursor row
    #[serde(default = "crate::defaults::rows")]
    pub rows: usize,

    /// Pixel columns per character cell
    #[serde(default = "crate::defaults::columns")]
    pub columns: usize,

    /// Drawn width of one pixel
    #[serde(default = "crate::defaults::pixel_width")]
    pub pixel_width: f32,

    /// Drawn height of one pixel
    #[serde(default = "crate::defaults::pixel_height")]
    pub pixel_height: f32,

    /// Gap between neighbouring pixels, both axes
    #[serde(default = "crate::defaults::intra_spacing")]
    pub intra_spacing: f32,

    /// Color of a switched-off pixel
    #[serde(default = "crate::defaults::bar_color")]
    pub bar_color: Color,

    /// Color of a switched-on pixel
    #[serde(default = "crate::defaults::bar_glow_color")]
    pub bar_glow_color: Color,

    /// Blink half-period in milliseconds
    #[serde(default = "crate::defaults::blink_interval_ms")]
    pub blink_interval_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            rows: crate::defaults::rows(),
            columns: crate::defaults::columns(),
            pixel_width: crate::defaults::pixel_width(),
            pixel_height: crate::defaults::pixel_height(),
            intra_spacing: crate::defaults::intra_spacing(),
            bar_color: crate::defaults::bar_color(),
            bar_glow_color: crate::defaults::bar_glow_color(),
            blink_interval_ms: crate::defaults::blink_interval_ms(),
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set grid dimensions (rows includes the cursor row)
    pub fn with_grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_pixel_size(mut self, width: f32, height: f32) -> Self {
        self.pixel_width = width;
        self.pixel_height = height;
        self
    }

    pub fn with_intra_spacing(mut self, spacing: f32) -> Self {
        self.intra_spacing = spacing;
        self
    }

    pub fn with_colors(mut self, dim: Color, glow: Color) -> Self {
        self.bar_color = dim;
        self.bar_glow_color = glow;
        self
    }

    pub fn with_blink_interval_ms(mut self, millis: u64) -> Self {
        self.blink_interval_ms = millis;
        self
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Glyph rows available to `draw_character` (everything but the cursor row).
    pub fn glyph_rows(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Horizontal distance between the left edges of neighbouring pixels.
    pub fn step_x(&self) -> f32 {
        self.pixel_width + self.intra_spacing
    }

    /// Vertical distance between the top edges of neighbouring pixels.
    pub fn step_y(&self) -> f32 {
        self.pixel_height + self.intra_spacing
    }

    /// Check that the layout can actually be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 {
            return Err(ConfigError::Validation(format!(
                "rows must be at least 2 (one glyph row plus the cursor row), got {}",
                self.rows
            )));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be at least 1".to_string()));
        }
        if !(self.pixel_width > 0.0 && self.pixel_height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "pixel size must be positive, got {}x{}",
                self.pixel_width, self.pixel_height
            )));
        }
        if self.intra_spacing.is_nan() || self.intra_spacing < 0.0 {
            return Err(ConfigError::Validation(format!(
                "intra_spacing must be non-negative, got {}",
                self.intra_spacing
            )));
        }
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "blink_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file; a missing file yields the defaults.
    pub fn load_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Panel config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading panel config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_yaml_str(&contents)?;
        Ok(config)
    }

    /// Save as YAML, writing a sibling temp file first and renaming it over
    /// the target.
    pub fn save_yaml(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;
        let tmp_path = path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml).map_err(ConfigError::from)?;
        fs::rename(&tmp_path, path).map_err(ConfigError::from)?;

        log::info!("Panel config saved to {:?}", path);
        Ok(())
    }
}
