//! The capability surface every platform adapter implements.
//!
//! One implementation exists per platform, each wrapping a native map
//! SDK. The traits are object-safe on purpose: the view bridge holds an
//! `Arc<dyn MapboxApi>` and never knows which platform it talks to.
//!
//! View-scoped operations take a trailing `Option<NativeMapHandle>`.
//! `None` means "the adapter's current map view", matching how the
//! native SDKs fall back to their most recent instance.

use crate::api::events::{CoordinateCallback, EventCallback, OptionalCoordinateCallback, PlainCallback};
use crate::api::handle::NativeMapHandle;
use crate::core::geo::{LatLng, Point, UserLocation, Viewport};
use crate::core::style::{MapStyle, UserLocationCameraMode, UserLocationRenderMode};
use crate::options::camera::{
    AnimateCameraOptions, SetCenterOptions, SetTiltOptions, SetViewportOptions,
    SetZoomLevelOptions, ShowUserLocationMarkerOptions, TrackUserOptions,
};
use crate::options::layers::{AddGeoJsonClusteredOptions, Feature, QueryRenderedFeaturesOptions};
use crate::options::marker::MapboxMarker;
use crate::options::offline::{
    DeleteOfflineRegionOptions, DownloadOfflineRegionOptions, ListOfflineRegionsOptions,
    OfflineRegion,
};
use crate::options::shapes::{AddPolygonOptions, AddPolylineOptions};
use crate::options::show::{ShowOptions, ShowResult};
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Location-permission checks, usable before any map exists.
///
/// The defaults always grant; only an adapter for a platform with a real
/// runtime permission model overrides them. Denial surfaces as
/// [`BridgeError::PermissionDenied`](crate::BridgeError::PermissionDenied).
#[async_trait]
pub trait MapboxCommonApi: Send + Sync {
    /// Prompt for fine-location access.
    async fn request_fine_location_permission(&self) -> Result<()> {
        Ok(())
    }

    /// Check fine-location access without prompting.
    async fn has_fine_location_permission(&self) -> Result<bool> {
        Ok(true)
    }
}

/// The full native map capability surface.
///
/// Methods that the native SDKs answer from in-memory state are plain
/// functions; everything that crosses into SDK machinery is async.
/// Adapter failures come back as [`BridgeError::Native`](crate::BridgeError::Native)
/// and are forwarded verbatim, never wrapped.
#[async_trait]
pub trait MapboxApi: MapboxCommonApi + Send + Sync {
    /// Wire the adapter's event plumbing to a freshly created view.
    fn init_event_handler_shim(
        &self,
        settings: &ShowOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Register a named-event listener under a caller-chosen id.
    fn on_map_event(
        &self,
        event_name: &str,
        id: &str,
        callback: EventCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Remove a listener previously registered under `id`.
    fn off_map_event(
        &self,
        event_name: &str,
        id: &str,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Create and mount the native map view.
    async fn show(&self, options: ShowOptions) -> Result<ShowResult>;

    /// Hide the current map view, keeping it alive.
    async fn hide(&self) -> Result<()>;

    /// Undo a previous [`hide`](Self::hide).
    async fn unhide(&self) -> Result<()>;

    /// Tear the view down and release native resources.
    async fn destroy(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    // Host lifecycle hooks. Android crashes without them; the iOS
    // adapter treats them as no-ops.

    async fn on_start(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn on_resume(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn on_pause(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn on_stop(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn on_low_memory(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn on_destroy(&self, native_map: Option<NativeMapHandle>) -> Result<()>;

    /// Swap the style; `MapStyle::Custom` carries a style URL.
    async fn set_map_style(&self, style: MapStyle, native_map: Option<NativeMapHandle>)
        -> Result<()>;

    async fn add_markers(
        &self,
        markers: Vec<MapboxMarker>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Remove the given marker ids, or every marker when `None`.
    async fn remove_markers(
        &self,
        ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_center(
        &self,
        options: SetCenterOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn get_center(&self, native_map: Option<NativeMapHandle>) -> Result<LatLng>;

    async fn set_zoom_level(
        &self,
        options: SetZoomLevelOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn get_zoom_level(&self, native_map: Option<NativeMapHandle>) -> Result<f64>;

    async fn set_tilt(
        &self,
        options: SetTiltOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn get_tilt(&self, native_map: Option<NativeMapHandle>) -> Result<f64>;

    async fn get_user_location(&self, native_map: Option<NativeMapHandle>)
        -> Result<UserLocation>;

    /// Enable the native location puck.
    fn show_user_location_marker(
        &self,
        options: ShowUserLocationMarkerOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Switch the puck's render and camera modes in place.
    fn change_user_location_marker_mode(
        &self,
        render_mode: UserLocationRenderMode,
        camera_mode: UserLocationCameraMode,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Feed a location fix into the puck, bypassing the platform's
    /// location services.
    fn force_user_location_update(
        &self,
        location: UserLocation,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn track_user(
        &self,
        options: TrackUserOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Current camera-tracking mode; answered from adapter state.
    fn get_tracking_mode(&self, native_map: Option<NativeMapHandle>) -> UserLocationCameraMode;

    /// Add a style layer from its JSON definition.
    async fn add_layer(&self, style: Value, native_map: Option<NativeMapHandle>) -> Result<()>;

    async fn remove_layer(&self, id: &str, native_map: Option<NativeMapHandle>) -> Result<()>;

    /// Append a coordinate to the line source behind layer `id`.
    async fn add_line_point(
        &self,
        id: &str,
        point: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn query_rendered_features(
        &self,
        options: QueryRenderedFeaturesOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<Vec<Feature>>;

    async fn add_polygon(
        &self,
        options: AddPolygonOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Remove the given polygon ids, or every polygon when `None`.
    async fn remove_polygons(
        &self,
        ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    /// Draw a polyline and return its id. The SDKs build annotations
    /// synchronously, so no async hop here.
    fn add_polyline(
        &self,
        options: AddPolylineOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<String>;

    /// Remove the given polyline ids, or every polyline when `None`.
    fn remove_polylines(
        &self,
        ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    fn update_polyline(
        &self,
        id: &str,
        new_points: Vec<LatLng>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn animate_camera(
        &self,
        options: AnimateCameraOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_map_click_listener(
        &self,
        listener: CoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_map_long_click_listener(
        &self,
        listener: CoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_scroll_listener(
        &self,
        listener: OptionalCoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_move_begin_listener(
        &self,
        listener: OptionalCoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_fling_listener(
        &self,
        listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_camera_move_listener(
        &self,
        listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_camera_move_cancel_listener(
        &self,
        listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn set_on_camera_idle_listener(
        &self,
        listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    async fn get_viewport(&self, native_map: Option<NativeMapHandle>) -> Result<Viewport>;

    async fn set_viewport(
        &self,
        options: SetViewportOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()>;

    // Offline storage is app-global, so no view handle below.

    async fn download_offline_region(&self, options: DownloadOfflineRegionOptions) -> Result<()>;

    async fn list_offline_regions(
        &self,
        options: ListOfflineRegionsOptions,
    ) -> Result<Vec<OfflineRegion>>;

    async fn delete_offline_region(&self, options: DeleteOfflineRegionOptions) -> Result<()>;

    async fn add_geo_json_clustered(&self, options: AddGeoJsonClusteredOptions) -> Result<()>;

    async fn is_scrolling_enabled(&self, native_map: Option<NativeMapHandle>) -> Result<bool>;

    /// Screen point to geographic coordinate, under the current camera.
    async fn convert_to_map_coordinate(
        &self,
        point: Point,
        native_map: Option<NativeMapHandle>,
    ) -> Result<LatLng>;

    /// Geographic coordinate to screen point, under the current camera.
    async fn convert_to_on_screen_coordinate(
        &self,
        coordinate: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<Point>;

    /// Geodesic distance in meters, as measured by the native SDK.
    async fn get_distance_between(
        &self,
        from: LatLng,
        to: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<f64>;
}
