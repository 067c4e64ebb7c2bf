use crate::core::geo::{Bounds, LatLng};
use crate::core::style::{UserLocationCameraMode, UserLocationRenderMode};
use serde::{Deserialize, Serialize};

/// Options for re-centering the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetCenterOptions {
    #[serde(flatten)]
    pub center: LatLng,
    pub animated: Option<bool>,
}

impl SetCenterOptions {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            center: LatLng::new(lat, lng),
            animated: None,
        }
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }
}

/// Options for changing the zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetZoomLevelOptions {
    /// Zoom level, 0 through 20.
    pub level: f64,
    pub animated: bool,
}

/// Options for tilting the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetTiltOptions {
    /// Tilt angle in degrees.
    pub tilt: f64,
    /// Animation duration in milliseconds; adapters fall back to
    /// [`DEFAULT_TILT_DURATION_MS`](crate::core::constants::DEFAULT_TILT_DURATION_MS)
    /// when unset.
    pub duration: Option<u64>,
}

/// Options for moving the camera to a set of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetViewportOptions {
    pub bounds: Bounds,
    /// Adds an animation of about one second. Default true.
    pub animated: Option<bool>,
}

/// A composite camera movement. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimateCameraOptions {
    pub target: LatLng,
    /// Zoom level, 0 through 20 (used by the Android SDK).
    pub zoom_level: Option<f64>,
    /// Camera altitude in meters above ground (used by the iOS SDK).
    pub altitude: Option<f64>,
    /// Compass bearing in degrees.
    pub bearing: Option<f64>,
    /// Tilt angle in degrees.
    pub tilt: Option<f64>,
    /// Animation duration in milliseconds.
    pub duration: Option<u64>,
}

/// Options for following the user location with the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackUserOptions {
    pub mode: UserLocationCameraMode,
    /// iOS only; Android always animates. Default true.
    pub animated: Option<bool>,
}

/// Options for enabling the native user-location puck.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowUserLocationMarkerOptions {
    pub render_mode: UserLocationRenderMode,
    pub camera_mode: UserLocationCameraMode,
}
