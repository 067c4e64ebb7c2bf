//! The dispatch bridge between a declarative map view and its platform
//! adapter.
//!
//! [`MapboxView`] owns one [`MapboxApi`] adapter and the write-once handle
//! of the native view backing it. Its methods mirror the adapter surface
//! minus the handle parameter: each call injects the attached handle and
//! returns the adapter's result unchanged. The only real logic lives in
//! the two derived-geometry helpers at the bottom.

use crate::api::events::{CoordinateCallback, EventCallback, OptionalCoordinateCallback, PlainCallback};
use crate::api::handle::NativeMapHandle;
use crate::api::MapboxApi;
use crate::core::config::MapConfig;
use crate::core::geo::{CoordinateRegion, LatLng, Point, UserLocation, Viewport};
use crate::core::style::{MapStyle, UserLocationCameraMode, UserLocationRenderMode};
use crate::options::camera::{
    AnimateCameraOptions, SetCenterOptions, SetTiltOptions, SetViewportOptions,
    SetZoomLevelOptions, ShowUserLocationMarkerOptions, TrackUserOptions,
};
use crate::options::layers::{Feature, QueryRenderedFeaturesOptions};
use crate::options::marker::MapboxMarker;
use crate::options::shapes::{AddPolygonOptions, AddPolylineOptions};
use crate::options::show::ShowOptions;
use crate::view::properties;
use crate::{BridgeError, Result};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A platform-neutral map view.
///
/// Host glue constructs one per view element, feeds bound attributes in
/// through [`set_property`](Self::set_property), drives the adapter's
/// `show` with the resolved [`show_options`](Self::show_options), and
/// binds the resulting handle with
/// [`attach_native_view`](Self::attach_native_view). From then on every
/// method forwards to the adapter against that handle.
pub struct MapboxView {
    mapbox: Arc<dyn MapboxApi>,
    native_view: OnceCell<NativeMapHandle>,
    config: MapConfig,
}

impl MapboxView {
    /// Fired once the native map exists and calls may be forwarded.
    pub const MAP_READY_EVENT: &'static str = "mapReady";
    /// Fired on every scroll of the map.
    pub const SCROLL_EVENT: &'static str = "scrollEvent";
    /// Fired when a pan gesture begins.
    pub const MOVE_BEGIN_EVENT: &'static str = "moveBeginEvent";
    /// Fired when the user grants location access.
    pub const LOCATION_PERMISSION_GRANTED_EVENT: &'static str = "locationPermissionGranted";
    /// Fired when the user denies location access.
    pub const LOCATION_PERMISSION_DENIED_EVENT: &'static str = "locationPermissionDenied";

    pub fn new(mapbox: Arc<dyn MapboxApi>) -> Self {
        Self {
            mapbox,
            native_view: OnceCell::new(),
            config: MapConfig::new(),
        }
    }

    /// The adapter backing this view, for host glue that drives `show`,
    /// the event shim, and app-global calls.
    pub fn api(&self) -> &dyn MapboxApi {
        self.mapbox.as_ref()
    }

    /// The handle of the native view, once attached.
    pub fn native_map_view(&self) -> Option<NativeMapHandle> {
        self.native_view.get().copied()
    }

    /// Binds the native view created by the adapter's `show`.
    ///
    /// The binding is write-once; a second call fails with
    /// [`BridgeError::ViewAlreadyAttached`].
    pub fn attach_native_view(&self, handle: NativeMapHandle) -> Result<()> {
        self.native_view
            .set(handle)
            .map_err(|_| BridgeError::ViewAlreadyAttached)
    }

    /// Coerces and stores one bound attribute value.
    pub fn set_property(&mut self, name: &str, value: &Value) -> Result<()> {
        properties::set_property(&mut self.config, name, value)
    }

    /// The raw configuration accumulated from bound attributes.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The accumulated configuration resolved against the common
    /// defaults, typed for the adapter's `show`.
    pub fn show_options(&self) -> Result<ShowOptions> {
        self.config.to_show_options()
    }

    pub fn on_map_event(&self, event_name: &str, id: &str, callback: EventCallback) -> Result<()> {
        log::debug!("registering listener {} for '{}'", id, event_name);
        self.mapbox
            .on_map_event(event_name, id, callback, self.native_map_view())
    }

    pub fn off_map_event(&self, event_name: &str, id: &str) -> Result<()> {
        self.mapbox
            .off_map_event(event_name, id, self.native_map_view())
    }

    pub async fn add_markers(&self, markers: Vec<MapboxMarker>) -> Result<()> {
        self.mapbox.add_markers(markers, self.native_map_view()).await
    }

    pub async fn remove_markers(&self, ids: Option<Vec<String>>) -> Result<()> {
        self.mapbox.remove_markers(ids, self.native_map_view()).await
    }

    pub async fn set_on_map_click_listener(&self, listener: CoordinateCallback) -> Result<()> {
        self.mapbox
            .set_on_map_click_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_map_long_click_listener(&self, listener: CoordinateCallback) -> Result<()> {
        self.mapbox
            .set_on_map_long_click_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_scroll_listener(&self, listener: OptionalCoordinateCallback) -> Result<()> {
        self.mapbox
            .set_on_scroll_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_move_begin_listener(
        &self,
        listener: OptionalCoordinateCallback,
    ) -> Result<()> {
        self.mapbox
            .set_on_move_begin_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_fling_listener(&self, listener: PlainCallback) -> Result<()> {
        self.mapbox
            .set_on_fling_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_camera_move_listener(&self, listener: PlainCallback) -> Result<()> {
        self.mapbox
            .set_on_camera_move_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_camera_move_cancel_listener(&self, listener: PlainCallback) -> Result<()> {
        self.mapbox
            .set_on_camera_move_cancel_listener(listener, self.native_map_view())
            .await
    }

    pub async fn set_on_camera_idle_listener(&self, listener: PlainCallback) -> Result<()> {
        self.mapbox
            .set_on_camera_idle_listener(listener, self.native_map_view())
            .await
    }

    pub async fn get_viewport(&self) -> Result<Viewport> {
        self.mapbox.get_viewport(self.native_map_view()).await
    }

    pub async fn set_viewport(&self, options: SetViewportOptions) -> Result<()> {
        self.mapbox.set_viewport(options, self.native_map_view()).await
    }

    pub async fn set_map_style(&self, style: MapStyle) -> Result<()> {
        self.mapbox.set_map_style(style, self.native_map_view()).await
    }

    pub async fn get_center(&self) -> Result<LatLng> {
        self.mapbox.get_center(self.native_map_view()).await
    }

    pub async fn set_center(&self, options: SetCenterOptions) -> Result<()> {
        self.mapbox.set_center(options, self.native_map_view()).await
    }

    pub async fn get_zoom_level(&self) -> Result<f64> {
        self.mapbox.get_zoom_level(self.native_map_view()).await
    }

    pub async fn set_zoom_level(&self, options: SetZoomLevelOptions) -> Result<()> {
        self.mapbox
            .set_zoom_level(options, self.native_map_view())
            .await
    }

    pub async fn get_tilt(&self) -> Result<f64> {
        self.mapbox.get_tilt(self.native_map_view()).await
    }

    pub async fn set_tilt(&self, options: SetTiltOptions) -> Result<()> {
        self.mapbox.set_tilt(options, self.native_map_view()).await
    }

    pub async fn get_user_location(&self) -> Result<UserLocation> {
        self.mapbox.get_user_location(self.native_map_view()).await
    }

    pub async fn track_user(&self, options: TrackUserOptions) -> Result<()> {
        self.mapbox.track_user(options, self.native_map_view()).await
    }

    pub fn get_tracking_mode(&self) -> UserLocationCameraMode {
        self.mapbox.get_tracking_mode(self.native_map_view())
    }

    pub fn show_user_location_marker(&self, options: ShowUserLocationMarkerOptions) -> Result<()> {
        self.mapbox
            .show_user_location_marker(options, self.native_map_view())
    }

    pub fn change_user_location_marker_mode(
        &self,
        render_mode: UserLocationRenderMode,
        camera_mode: UserLocationCameraMode,
    ) -> Result<()> {
        self.mapbox
            .change_user_location_marker_mode(render_mode, camera_mode, self.native_map_view())
    }

    pub fn force_user_location_update(&self, location: UserLocation) -> Result<()> {
        self.mapbox
            .force_user_location_update(location, self.native_map_view())
    }

    pub async fn add_layer(&self, style: Value) -> Result<()> {
        self.mapbox.add_layer(style, self.native_map_view()).await
    }

    pub async fn remove_layer(&self, id: &str) -> Result<()> {
        self.mapbox.remove_layer(id, self.native_map_view()).await
    }

    pub async fn add_line_point(&self, id: &str, point: LatLng) -> Result<()> {
        self.mapbox
            .add_line_point(id, point, self.native_map_view())
            .await
    }

    pub async fn query_rendered_features(
        &self,
        options: QueryRenderedFeaturesOptions,
    ) -> Result<Vec<Feature>> {
        self.mapbox
            .query_rendered_features(options, self.native_map_view())
            .await
    }

    pub async fn add_polygon(&self, options: AddPolygonOptions) -> Result<()> {
        self.mapbox.add_polygon(options, self.native_map_view()).await
    }

    pub async fn remove_polygons(&self, ids: Option<Vec<String>>) -> Result<()> {
        self.mapbox
            .remove_polygons(ids, self.native_map_view())
            .await
    }

    pub fn add_polyline(&self, options: AddPolylineOptions) -> Result<String> {
        self.mapbox.add_polyline(options, self.native_map_view())
    }

    pub fn remove_polylines(&self, ids: Option<Vec<String>>) -> Result<()> {
        self.mapbox.remove_polylines(ids, self.native_map_view())
    }

    pub fn update_polyline(&self, id: &str, new_points: Vec<LatLng>) -> Result<()> {
        self.mapbox
            .update_polyline(id, new_points, self.native_map_view())
    }

    pub async fn animate_camera(&self, options: AnimateCameraOptions) -> Result<()> {
        self.mapbox
            .animate_camera(options, self.native_map_view())
            .await
    }

    pub async fn destroy(&self) -> Result<()> {
        self.mapbox.destroy(self.native_map_view()).await
    }

    pub async fn on_start(&self) -> Result<()> {
        self.mapbox.on_start(self.native_map_view()).await
    }

    pub async fn on_resume(&self) -> Result<()> {
        log::debug!("resuming with native view {:?}", self.native_map_view());
        self.mapbox.on_resume(self.native_map_view()).await
    }

    pub async fn on_pause(&self) -> Result<()> {
        log::debug!("pausing with native view {:?}", self.native_map_view());
        self.mapbox.on_pause(self.native_map_view()).await
    }

    pub async fn on_stop(&self) -> Result<()> {
        self.mapbox.on_stop(self.native_map_view()).await
    }

    pub async fn on_low_memory(&self) -> Result<()> {
        self.mapbox.on_low_memory(self.native_map_view()).await
    }

    pub async fn on_destroy(&self) -> Result<()> {
        self.mapbox.on_destroy(self.native_map_view()).await
    }

    pub async fn is_scrolling_enabled(&self) -> Result<bool> {
        self.mapbox
            .is_scrolling_enabled(self.native_map_view())
            .await
    }

    pub async fn convert_to_map_coordinate(&self, point: Point) -> Result<LatLng> {
        self.mapbox
            .convert_to_map_coordinate(point, self.native_map_view())
            .await
    }

    pub async fn convert_to_on_screen_coordinate(&self, coordinate: LatLng) -> Result<Point> {
        self.mapbox
            .convert_to_on_screen_coordinate(coordinate, self.native_map_view())
            .await
    }

    pub async fn get_distance_between(&self, from: LatLng, to: LatLng) -> Result<f64> {
        self.mapbox
            .get_distance_between(from, to, self.native_map_view())
            .await
    }

    /// On-screen distance in pixels between two coordinates under the
    /// current camera.
    ///
    /// Both coordinates are projected through the adapter; the two
    /// conversions are independent reads and run concurrently. Identical
    /// coordinates always yield exactly `0.0`.
    pub async fn pixel_distance_between(&self, from: LatLng, to: LatLng) -> Result<f64> {
        let converted = futures::try_join!(
            self.convert_to_on_screen_coordinate(from),
            self.convert_to_on_screen_coordinate(to),
        );
        match converted {
            Ok((a, b)) => Ok(a.distance_to(&b)),
            Err(err) => {
                log::error!(
                    "pixel distance between {:?} and {:?} failed: {}",
                    from,
                    to,
                    err
                );
                Err(err)
            }
        }
    }

    /// The geographic region covered by a square of `pixel_distance`
    /// around a screen point.
    ///
    /// The two opposite corners are unprojected through the adapter and
    /// normalized per axis, so the result holds `min <= max` even though
    /// screen y runs opposite to latitude.
    pub async fn coordinate_region_around_point(
        &self,
        around: Point,
        pixel_distance: f64,
    ) -> Result<CoordinateRegion> {
        let min = around.offset(-pixel_distance, -pixel_distance);
        let max = around.offset(pixel_distance, pixel_distance);
        let converted = futures::try_join!(
            self.convert_to_map_coordinate(min),
            self.convert_to_map_coordinate(max),
        );
        match converted {
            Ok((a, b)) => Ok(CoordinateRegion::from_corners(a, b)),
            Err(err) => {
                log::error!("coordinate region around {:?} failed: {}", around, err);
                Err(err)
            }
        }
    }
}

impl fmt::Debug for MapboxView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxView")
            .field("native_view", &self.native_view.get())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
