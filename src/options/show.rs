use crate::api::events::{MapReadyCallback, OptionalCoordinateCallback, PlainCallback};
use crate::api::handle::{NativeMapHandle, PlatformHandle};
use crate::core::geo::LatLng;
use crate::core::style::MapStyle;
use crate::options::marker::MapboxMarker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insets between the map edges and the hosting view, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShowOptionsMargins {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
}

/// Which native SDK produced a map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

/// The view handle handed back by a successful [`show`](crate::MapboxApi::show).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowResult {
    pub platform: Platform,
    pub native_view: NativeMapHandle,
}

/// The full configuration union passed into `show`.
///
/// Shaped to match the JSON accumulator resolved by
/// [`MapConfig`](crate::core::config::MapConfig), so a resolved config
/// deserializes straight into it. Callbacks and host handles never
/// serialize.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOptions {
    /// Absent only while accumulating; adapters reject a `show` without it.
    pub access_token: Option<String>,
    /// Default streets.
    pub style: Option<MapStyle>,
    pub margins: Option<ShowOptionsMargins>,
    pub center: Option<LatLng>,
    /// 0 (almost the entire planet) through 20 (street level). Default 0.
    pub zoom_level: Option<f64>,
    /// Default false; true needs the location usage entries in the host
    /// app's manifest or plist.
    pub show_user_location: Option<bool>,
    /// Default false.
    pub hide_logo: Option<bool>,
    /// Default true.
    pub hide_attribution: Option<bool>,
    /// Default false.
    pub hide_compass: Option<bool>,
    /// Default false.
    pub disable_rotation: Option<bool>,
    /// Default false.
    pub disable_scroll: Option<bool>,
    /// Default false.
    pub disable_zoom: Option<bool>,
    /// Default false.
    pub disable_tilt: Option<bool>,
    /// Milliseconds to postpone native map creation. Default 0.
    pub delay: Option<i64>,
    /// Markers added as soon as the map is ready.
    pub markers: Option<Vec<MapboxMarker>>,
    #[serde(skip)]
    pub on_location_permission_granted: Option<PlainCallback>,
    #[serde(skip)]
    pub on_location_permission_denied: Option<PlainCallback>,
    #[serde(skip)]
    pub on_map_ready: Option<MapReadyCallback>,
    #[serde(skip)]
    pub on_scroll_event: Option<OptionalCoordinateCallback>,
    #[serde(skip)]
    pub on_move_begin_event: Option<OptionalCoordinateCallback>,
    /// Host application context (Android).
    #[serde(skip)]
    pub context: Option<PlatformHandle>,
    /// Parent view to mount the map under (Android).
    #[serde(skip)]
    pub parent_view: Option<PlatformHandle>,
}

impl ShowOptions {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_style(mut self, style: MapStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.zoom_level = Some(zoom_level);
        self
    }
}

impl fmt::Debug for ShowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShowOptions")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("style", &self.style)
            .field("margins", &self.margins)
            .field("center", &self.center)
            .field("zoom_level", &self.zoom_level)
            .field("show_user_location", &self.show_user_location)
            .field("hide_logo", &self.hide_logo)
            .field("hide_attribution", &self.hide_attribution)
            .field("hide_compass", &self.hide_compass)
            .field("disable_rotation", &self.disable_rotation)
            .field("disable_scroll", &self.disable_scroll)
            .field("disable_zoom", &self.disable_zoom)
            .field("disable_tilt", &self.disable_tilt)
            .field("delay", &self.delay)
            .field("markers", &self.markers)
            .field("context", &self.context)
            .field("parent_view", &self.parent_view)
            .finish_non_exhaustive()
    }
}
