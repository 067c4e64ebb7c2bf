//! Unit ranges and default magic numbers shared by both platform adapters.
//! Keeping them in a single place avoids the two native SDKs drifting apart.

/// Lowest zoom level: most of the planet in a single view.
pub const MIN_ZOOM_LEVEL: f64 = 0.0;

/// Highest zoom level: street level.
pub const MAX_ZOOM_LEVEL: f64 = 20.0;

/// Camera tilt applied when [`SetTiltOptions`](crate::options::SetTiltOptions)
/// leaves it unset, in degrees.
pub const DEFAULT_TILT_DEGREES: f64 = 30.0;

/// Duration of a tilt animation when unset, in milliseconds.
pub const DEFAULT_TILT_DURATION_MS: u64 = 5000;

/// Duration of the viewport animation applied when `animated` is requested,
/// in milliseconds.
pub const VIEWPORT_ANIMATION_MS: u64 = 1000;

/// Stroke width of a polyline when unset, in device-independent pixels.
pub const DEFAULT_POLYLINE_WIDTH: f64 = 5.0;

/// Fill/stroke opacity when unset: fully opaque. Valid range is 0 to 1.
pub const FULL_OPACITY: f64 = 1.0;

/// Line color of a polyline when unset.
pub const DEFAULT_POLYLINE_COLOR: &str = "#000000";
