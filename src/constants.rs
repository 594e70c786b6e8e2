//! Application-wide constants.
//!
//! Centralizes magic numbers so the interaction and drawing code stay
//! self-documenting.

// ============================================================================
// Hit Testing
// ============================================================================

/// Half-size of the square neighborhood used to re-select a stored point.
/// A radius of 3 gives a 7x7 box centered on the point.
pub const DEFAULT_HIT_RADIUS: i32 = 3;

// ============================================================================
// Marker Glyph
// ============================================================================

/// Radius of the outer ring drawn around every marked point
pub const DEFAULT_MARKER_RING_RADIUS: i32 = 9;

/// Largest accepted marker ring radius (pixels)
pub const MAX_MARKER_RING_RADIUS: i32 = 256;

/// Radius of the filled dot drawn over a point armed for relocation
pub const HIGHLIGHT_RADIUS: i32 = 1;

// ============================================================================
// Colors (RGB)
// ============================================================================

/// Center pixel of a marker
pub const DEFAULT_CENTER_COLOR: [u8; 3] = [0, 0, 255];

/// Outer ring of a marker
pub const DEFAULT_RING_COLOR: [u8; 3] = [0, 255, 255];

/// Segment connecting a committed pair
pub const DEFAULT_LINE_COLOR: [u8; 3] = [0, 255, 0];

/// Highlight of a point armed for relocation
pub const DEFAULT_HIGHLIGHT_COLOR: [u8; 3] = [255, 0, 0];

// ============================================================================
// Window & Files
// ============================================================================

/// Title of the session window
pub const WINDOW_TITLE: &str = "Concatenated image";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "corrmark";

/// Settings file name inside the config dir
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "corrmark=info";
