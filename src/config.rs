//! Split container configuration
//!
//! Stored in `~/.config/splitview/config.yaml`. Every field is optional;
//! anything missing falls back to the defaults below.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Minimum width either neighbour must keep during a divider drag
pub const DEFAULT_MIN_PANEL_WIDTH: i32 = 50;

/// Footprint of a divider handle
pub const DEFAULT_DIVIDER_WIDTH: i32 = 10;

/// Upper bound for both pixel settings, far wider than any real display
pub const MAX_CONFIG_PIXELS: i32 = 1 << 16;

/// Solid black, fully opaque
pub const DEFAULT_DIVIDER_COLOR: u32 = 0xFF000000;

/// Tunables for a [`SplitContainer`](crate::model::SplitContainer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Minimum width, in pixels, a drag may leave on either side of a divider
    #[serde(default = "default_min_panel_width")]
    pub min_panel_width: i32,

    /// Width of each divider handle; it is centered on the panel boundary
    #[serde(default = "default_divider_width")]
    pub divider_width: i32,

    /// Divider fill color (ARGB)
    #[serde(default = "default_divider_color")]
    pub divider_color: u32,

    /// Fold dragged pixel widths back into the proportions when a drag ends.
    ///
    /// Off by default: drags only move pixels, and the next resize lays the
    /// panels out from the stored proportions again.
    #[serde(default)]
    pub sync_proportions_on_release: bool,
}

fn default_min_panel_width() -> i32 {
    DEFAULT_MIN_PANEL_WIDTH
}

fn default_divider_width() -> i32 {
    DEFAULT_DIVIDER_WIDTH
}

fn default_divider_color() -> u32 {
    DEFAULT_DIVIDER_COLOR
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_panel_width: default_min_panel_width(),
            divider_width: default_divider_width(),
            divider_color: default_divider_color(),
            sync_proportions_on_release: false,
        }
    }
}

impl SplitConfig {
    /// Half the divider footprint; dividers start this far left of their boundary
    #[inline]
    pub fn divider_half_width(&self) -> i32 {
        self.divider_width / 2
    }

    /// Clamp values that would break layout arithmetic
    pub fn sanitized(mut self) -> Self {
        if self.min_panel_width < 0 {
            tracing::warn!(
                "min_panel_width {} is negative, using 0",
                self.min_panel_width
            );
            self.min_panel_width = 0;
        }
        if self.divider_width < 1 {
            tracing::warn!("divider_width {} is below 1, using 1", self.divider_width);
            self.divider_width = 1;
        }
        if self.min_panel_width > MAX_CONFIG_PIXELS {
            tracing::warn!(
                "min_panel_width {} exceeds {}, clamping",
                self.min_panel_width,
                MAX_CONFIG_PIXELS
            );
            self.min_panel_width = MAX_CONFIG_PIXELS;
        }
        if self.divider_width > MAX_CONFIG_PIXELS {
            tracing::warn!(
                "divider_width {} exceeds {}, clamping",
                self.divider_width,
                MAX_CONFIG_PIXELS
            );
            self.divider_width = MAX_CONFIG_PIXELS;
        }
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty file deserializes to null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).context("Failed to parse split config")?;
        Ok(config.sanitized())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize split config")
    }
}
