//! User settings - hit testing tolerance and overlay styling.
//!
//! Settings live in `<config dir>/corrmark/settings.json`. Every field has a
//! default, so a partial file only overrides what it names and a missing
//! file yields the defaults.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CENTER_COLOR, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_HIT_RADIUS,
    DEFAULT_LINE_COLOR, DEFAULT_MARKER_RING_RADIUS, DEFAULT_RING_COLOR, MAX_MARKER_RING_RADIUS,
    SETTINGS_FILE_NAME,
};
use crate::error::{CorrespondenceError, CorrespondenceResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which stored point wins when several lie inside the hit neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Earliest inserted match
    FirstMatch,
    /// Latest inserted match
    LastMatch,
    /// Closest match; ties go to the earlier index
    #[default]
    Nearest,
}

/// Colors and sizes of the overlay glyphs (RGB)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub ring_radius: i32,
    pub center_color: [u8; 3],
    pub ring_color: [u8; 3],
    pub line_color: [u8; 3],
    pub highlight_color: [u8; 3],
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            ring_radius: DEFAULT_MARKER_RING_RADIUS,
            center_color: DEFAULT_CENTER_COLOR,
            ring_color: DEFAULT_RING_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hit_radius: i32,
    pub hit_policy: HitPolicy,
    pub marker: MarkerStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            hit_policy: HitPolicy::default(),
            marker: MarkerStyle::default(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> CorrespondenceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| CorrespondenceError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(settings.sanitized())
    }

    /// Clamp values that would make hit testing or marker drawing meaningless.
    fn sanitized(mut self) -> Self {
        if self.hit_radius < 0 {
            tracing::warn!(hit_radius = self.hit_radius, "Negative hit radius, using 0");
            self.hit_radius = 0;
        }
        let ring_radius = self.marker.ring_radius.clamp(0, MAX_MARKER_RING_RADIUS);
        if ring_radius != self.marker.ring_radius {
            tracing::warn!(
                ring_radius = self.marker.ring_radius,
                "Marker ring radius out of range, using {ring_radius}"
            );
            self.marker.ring_radius = ring_radius;
        }
        self
    }
}

/// `<config dir>/corrmark/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
