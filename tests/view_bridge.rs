use mapbridge::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

/// Integration tests for the view dispatch bridge against a recording
/// adapter with a simple linear projection.
///
/// The projection maps lng to x and lat to -y (screen y grows downward),
/// scaled by 10 pixels per degree, so expected distances and regions can
/// be computed by hand.
const PIXELS_PER_DEGREE: f64 = 10.0;

#[derive(Default)]
struct RecordingAdapter {
    calls: Mutex<Vec<(String, Option<NativeMapHandle>)>>,
    polyline_ids: AtomicU64,
    tracking_mode: Mutex<UserLocationCameraMode>,
    fail_conversions: bool,
}

impl RecordingAdapter {
    fn failing() -> Self {
        Self {
            fail_conversions: true,
            ..Self::default()
        }
    }

    fn record(&self, name: &str, native_map: Option<NativeMapHandle>) {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), native_map));
    }

    fn calls(&self) -> Vec<(String, Option<NativeMapHandle>)> {
        self.calls.lock().unwrap().clone()
    }

    fn handle_passed_to(&self, name: &str) -> Option<NativeMapHandle> {
        self.calls()
            .iter()
            .rev()
            .find(|(recorded, _)| recorded == name)
            .and_then(|(_, handle)| *handle)
    }
}

#[async_trait]
impl MapboxCommonApi for RecordingAdapter {}

#[async_trait]
impl MapboxApi for RecordingAdapter {
    fn init_event_handler_shim(
        &self,
        _settings: &ShowOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("init_event_handler_shim", native_map);
        Ok(())
    }

    fn on_map_event(
        &self,
        event_name: &str,
        id: &str,
        _callback: EventCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("on_map_event:{}:{}", event_name, id), native_map);
        Ok(())
    }

    fn off_map_event(
        &self,
        event_name: &str,
        id: &str,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("off_map_event:{}:{}", event_name, id), native_map);
        Ok(())
    }

    async fn show(&self, options: ShowOptions) -> Result<ShowResult> {
        if options.access_token.is_none() {
            return Err(BridgeError::Native("access token required".to_string()));
        }
        self.record("show", None);
        Ok(ShowResult {
            platform: Platform::Android,
            native_view: NativeMapHandle::from_raw(7),
        })
    }

    async fn hide(&self) -> Result<()> {
        self.record("hide", None);
        Ok(())
    }

    async fn unhide(&self) -> Result<()> {
        self.record("unhide", None);
        Ok(())
    }

    async fn destroy(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("destroy", native_map);
        Ok(())
    }

    async fn on_start(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_start", native_map);
        Ok(())
    }

    async fn on_resume(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_resume", native_map);
        Ok(())
    }

    async fn on_pause(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_pause", native_map);
        Ok(())
    }

    async fn on_stop(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_stop", native_map);
        Ok(())
    }

    async fn on_low_memory(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_low_memory", native_map);
        Ok(())
    }

    async fn on_destroy(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("on_destroy", native_map);
        Ok(())
    }

    async fn set_map_style(
        &self,
        style: MapStyle,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("set_map_style:{}", style), native_map);
        Ok(())
    }

    async fn add_markers(
        &self,
        markers: Vec<MapboxMarker>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("add_markers:{}", markers.len()), native_map);
        Ok(())
    }

    async fn remove_markers(
        &self,
        _ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("remove_markers", native_map);
        Ok(())
    }

    async fn set_center(
        &self,
        _options: SetCenterOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_center", native_map);
        Ok(())
    }

    async fn get_center(&self, native_map: Option<NativeMapHandle>) -> Result<LatLng> {
        self.record("get_center", native_map);
        Ok(LatLng::new(52.37, 4.88))
    }

    async fn set_zoom_level(
        &self,
        _options: SetZoomLevelOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_zoom_level", native_map);
        Ok(())
    }

    async fn get_zoom_level(&self, native_map: Option<NativeMapHandle>) -> Result<f64> {
        self.record("get_zoom_level", native_map);
        Ok(12.0)
    }

    async fn set_tilt(
        &self,
        _options: SetTiltOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_tilt", native_map);
        Ok(())
    }

    async fn get_tilt(&self, native_map: Option<NativeMapHandle>) -> Result<f64> {
        self.record("get_tilt", native_map);
        Ok(30.0)
    }

    async fn get_user_location(
        &self,
        native_map: Option<NativeMapHandle>,
    ) -> Result<UserLocation> {
        self.record("get_user_location", native_map);
        Ok(UserLocation {
            location: LatLng::new(52.37, 4.88),
            speed: 0.0,
        })
    }

    fn show_user_location_marker(
        &self,
        _options: ShowUserLocationMarkerOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("show_user_location_marker", native_map);
        Ok(())
    }

    fn change_user_location_marker_mode(
        &self,
        _render_mode: UserLocationRenderMode,
        _camera_mode: UserLocationCameraMode,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("change_user_location_marker_mode", native_map);
        Ok(())
    }

    fn force_user_location_update(
        &self,
        _location: UserLocation,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("force_user_location_update", native_map);
        Ok(())
    }

    async fn track_user(
        &self,
        options: TrackUserOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("track_user", native_map);
        *self.tracking_mode.lock().unwrap() = options.mode;
        Ok(())
    }

    fn get_tracking_mode(&self, native_map: Option<NativeMapHandle>) -> UserLocationCameraMode {
        self.record("get_tracking_mode", native_map);
        *self.tracking_mode.lock().unwrap()
    }

    async fn add_layer(&self, _style: Value, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record("add_layer", native_map);
        Ok(())
    }

    async fn remove_layer(&self, id: &str, native_map: Option<NativeMapHandle>) -> Result<()> {
        self.record(&format!("remove_layer:{}", id), native_map);
        Ok(())
    }

    async fn add_line_point(
        &self,
        id: &str,
        _point: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("add_line_point:{}", id), native_map);
        Ok(())
    }

    async fn query_rendered_features(
        &self,
        _options: QueryRenderedFeaturesOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<Vec<Feature>> {
        self.record("query_rendered_features", native_map);
        Ok(vec![Feature {
            id: Some(json!(1)),
            feature_type: Some("Feature".to_string()),
            properties: serde_json::Map::new(),
        }])
    }

    async fn add_polygon(
        &self,
        _options: AddPolygonOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("add_polygon", native_map);
        Ok(())
    }

    async fn remove_polygons(
        &self,
        _ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("remove_polygons", native_map);
        Ok(())
    }

    fn add_polyline(
        &self,
        _options: AddPolylineOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<String> {
        self.record("add_polyline", native_map);
        let id = self.polyline_ids.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("polyline-{}", id))
    }

    fn remove_polylines(
        &self,
        _ids: Option<Vec<String>>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("remove_polylines", native_map);
        Ok(())
    }

    fn update_polyline(
        &self,
        id: &str,
        _new_points: Vec<LatLng>,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record(&format!("update_polyline:{}", id), native_map);
        Ok(())
    }

    async fn animate_camera(
        &self,
        _options: AnimateCameraOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("animate_camera", native_map);
        Ok(())
    }

    async fn set_on_map_click_listener(
        &self,
        _listener: CoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_map_click_listener", native_map);
        Ok(())
    }

    async fn set_on_map_long_click_listener(
        &self,
        _listener: CoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_map_long_click_listener", native_map);
        Ok(())
    }

    async fn set_on_scroll_listener(
        &self,
        _listener: OptionalCoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_scroll_listener", native_map);
        Ok(())
    }

    async fn set_on_move_begin_listener(
        &self,
        _listener: OptionalCoordinateCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_move_begin_listener", native_map);
        Ok(())
    }

    async fn set_on_fling_listener(
        &self,
        _listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_fling_listener", native_map);
        Ok(())
    }

    async fn set_on_camera_move_listener(
        &self,
        _listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_camera_move_listener", native_map);
        Ok(())
    }

    async fn set_on_camera_move_cancel_listener(
        &self,
        _listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_camera_move_cancel_listener", native_map);
        Ok(())
    }

    async fn set_on_camera_idle_listener(
        &self,
        _listener: PlainCallback,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_on_camera_idle_listener", native_map);
        Ok(())
    }

    async fn get_viewport(&self, native_map: Option<NativeMapHandle>) -> Result<Viewport> {
        self.record("get_viewport", native_map);
        Ok(Viewport {
            bounds: Bounds {
                north: 52.5,
                east: 5.0,
                south: 52.2,
                west: 4.7,
            },
            zoom_level: 12.0,
        })
    }

    async fn set_viewport(
        &self,
        _options: SetViewportOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.record("set_viewport", native_map);
        Ok(())
    }

    async fn download_offline_region(
        &self,
        options: DownloadOfflineRegionOptions,
    ) -> Result<()> {
        self.record(&format!("download_offline_region:{}", options.region.name), None);
        Ok(())
    }

    async fn list_offline_regions(
        &self,
        _options: ListOfflineRegionsOptions,
    ) -> Result<Vec<OfflineRegion>> {
        self.record("list_offline_regions", None);
        Ok(Vec::new())
    }

    async fn delete_offline_region(&self, options: DeleteOfflineRegionOptions) -> Result<()> {
        self.record(&format!("delete_offline_region:{}", options.name), None);
        Ok(())
    }

    async fn add_geo_json_clustered(
        &self,
        options: AddGeoJsonClusteredOptions,
    ) -> Result<()> {
        self.record(&format!("add_geo_json_clustered:{}", options.name), None);
        Ok(())
    }

    async fn is_scrolling_enabled(&self, native_map: Option<NativeMapHandle>) -> Result<bool> {
        self.record("is_scrolling_enabled", native_map);
        Ok(true)
    }

    async fn convert_to_map_coordinate(
        &self,
        point: Point,
        native_map: Option<NativeMapHandle>,
    ) -> Result<LatLng> {
        self.record("convert_to_map_coordinate", native_map);
        if self.fail_conversions {
            return Err(BridgeError::Native("projection unavailable".to_string()));
        }
        Ok(LatLng::new(-point.y / PIXELS_PER_DEGREE, point.x / PIXELS_PER_DEGREE))
    }

    async fn convert_to_on_screen_coordinate(
        &self,
        coordinate: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<Point> {
        self.record("convert_to_on_screen_coordinate", native_map);
        if self.fail_conversions {
            return Err(BridgeError::Native("projection unavailable".to_string()));
        }
        Ok(Point::new(
            coordinate.lng * PIXELS_PER_DEGREE,
            -coordinate.lat * PIXELS_PER_DEGREE,
        ))
    }

    async fn get_distance_between(
        &self,
        _from: LatLng,
        _to: LatLng,
        native_map: Option<NativeMapHandle>,
    ) -> Result<f64> {
        self.record("get_distance_between", native_map);
        Ok(1000.0)
    }
}

fn bridged_view() -> (Arc<RecordingAdapter>, MapboxView) {
    let adapter = Arc::new(RecordingAdapter::default());
    let view = MapboxView::new(adapter.clone());
    (adapter, view)
}

fn attached_view() -> (Arc<RecordingAdapter>, MapboxView) {
    let (adapter, view) = bridged_view();
    view.attach_native_view(NativeMapHandle::from_raw(7)).unwrap();
    (adapter, view)
}

#[tokio::test]
async fn test_default_permissions_always_grant() {
    let (adapter, _view) = bridged_view();
    adapter.request_fine_location_permission().await.unwrap();
    assert!(adapter.has_fine_location_permission().await.unwrap());
}

#[tokio::test]
async fn test_pixel_distance_between_identical_points_is_zero() {
    let (_adapter, view) = attached_view();
    let p = LatLng::new(48.8583, 2.2945);
    let distance = view.pixel_distance_between(p, p).await.unwrap();
    assert_eq!(distance, 0.0);
}

#[tokio::test]
async fn test_pixel_distance_matches_projection() {
    let (_adapter, view) = attached_view();
    // 4 degrees of latitude and 3 of longitude make a 40/30/50 pixel
    // triangle under the 10 px/degree projection.
    let distance = view
        .pixel_distance_between(LatLng::new(0.0, 0.0), LatLng::new(4.0, 3.0))
        .await
        .unwrap();
    assert!((distance - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_coordinate_region_normalizes_inverted_axes() {
    let (_adapter, view) = attached_view();
    let region = view
        .coordinate_region_around_point(Point::new(100.0, 100.0), 10.0)
        .await
        .unwrap();
    // Screen y grows downward, so the "min" corner unprojects to the
    // larger latitude; the region must still come back normalized.
    assert!((region.min_lat - -11.0).abs() < 1e-9);
    assert!((region.max_lat - -9.0).abs() < 1e-9);
    assert!((region.min_lng - 9.0).abs() < 1e-9);
    assert!((region.max_lng - 11.0).abs() < 1e-9);
    assert!(region.min_lat <= region.max_lat);
    assert!(region.min_lng <= region.max_lng);
}

#[tokio::test]
async fn test_forwards_none_before_attachment() {
    let (adapter, view) = bridged_view();
    assert_eq!(view.native_map_view(), None);
    view.get_center().await.unwrap();
    let calls = adapter.calls();
    assert_eq!(calls, vec![("get_center".to_string(), None)]);
}

#[tokio::test]
async fn test_attached_handle_is_injected_into_every_call() {
    let (adapter, view) = attached_view();
    let handle = Some(NativeMapHandle::from_raw(7));

    view.get_center().await.unwrap();
    view.set_map_style(MapStyle::Dark).await.unwrap();
    view.add_markers(vec![MapboxMarker::new(52.37, 4.88)])
        .await
        .unwrap();
    view.add_polyline(AddPolylineOptions::new(vec![LatLng::new(0.0, 0.0)]))
        .unwrap();
    view.get_tracking_mode();
    view.on_map_event(MapboxView::SCROLL_EVENT, "listener-1", Arc::new(|_| {}))
        .unwrap();

    for name in [
        "get_center",
        "set_map_style:dark",
        "add_markers:1",
        "add_polyline",
        "get_tracking_mode",
        "on_map_event:scrollEvent:listener-1",
    ] {
        assert_eq!(adapter.handle_passed_to(name), handle, "{}", name);
    }
}

#[tokio::test]
async fn test_attach_native_view_is_write_once() {
    let (_adapter, view) = bridged_view();
    view.attach_native_view(NativeMapHandle::from_raw(1)).unwrap();
    let err = view
        .attach_native_view(NativeMapHandle::from_raw(2))
        .unwrap_err();
    assert!(matches!(err, BridgeError::ViewAlreadyAttached));
    assert_eq!(view.native_map_view(), Some(NativeMapHandle::from_raw(1)));
}

#[tokio::test]
async fn test_adapter_errors_propagate_verbatim() {
    let adapter = Arc::new(RecordingAdapter::failing());
    let view = MapboxView::new(adapter);
    let err = view
        .pixel_distance_between(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::Native(ref msg) if msg == "projection unavailable"));

    let err = view
        .coordinate_region_around_point(Point::new(0.0, 0.0), 5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::Native(ref msg) if msg == "projection unavailable"));
}

#[tokio::test]
async fn test_track_user_updates_tracking_mode() {
    let (_adapter, view) = attached_view();
    assert_eq!(view.get_tracking_mode(), UserLocationCameraMode::None);
    view.track_user(TrackUserOptions {
        mode: UserLocationCameraMode::TrackingGps,
        animated: Some(true),
    })
    .await
    .unwrap();
    assert_eq!(view.get_tracking_mode(), UserLocationCameraMode::TrackingGps);
}

#[tokio::test]
async fn test_declarative_flow_from_properties_to_dispatch() {
    let (adapter, mut view) = bridged_view();

    // Attribute values arrive from markup as raw strings.
    view.set_property("accessToken", &json!("pk.test")).unwrap();
    view.set_property("zoomLevel", &json!("12")).unwrap();
    view.set_property("latitude", &json!("52.3702")).unwrap();
    view.set_property("longitude", &json!("4.8952")).unwrap();
    view.set_property("mapStyle", &json!("traffic_night")).unwrap();
    view.set_property("hideCompass", &json!("true")).unwrap();

    let options = view.show_options().unwrap();
    assert_eq!(options.access_token.as_deref(), Some("pk.test"));
    assert_eq!(options.zoom_level, Some(12.0));
    assert_eq!(options.center, Some(LatLng::new(52.3702, 4.8952)));
    assert_eq!(options.style, Some(MapStyle::TrafficNight));
    assert_eq!(options.hide_compass, Some(true));
    // Untouched keys are filled from the common defaults.
    assert_eq!(options.hide_attribution, Some(true));
    assert_eq!(options.show_user_location, Some(false));

    let result = view.api().show(options.clone()).await.unwrap();
    view.attach_native_view(result.native_view).unwrap();
    view.api()
        .init_event_handler_shim(&options, view.native_map_view())
        .unwrap();

    view.set_center(SetCenterOptions::new(52.37, 4.88)).await.unwrap();
    let polyline_id = view
        .add_polyline(AddPolylineOptions::new(vec![
            LatLng::new(52.37, 4.88),
            LatLng::new(52.38, 4.89),
        ]))
        .unwrap();
    assert_eq!(polyline_id, "polyline-1");

    let handle = Some(result.native_view);
    assert_eq!(adapter.handle_passed_to("set_center"), handle);
    assert_eq!(adapter.handle_passed_to("init_event_handler_shim"), handle);
}

#[tokio::test]
async fn test_event_names_match_host_contract() {
    assert_eq!(MapboxView::MAP_READY_EVENT, "mapReady");
    assert_eq!(MapboxView::SCROLL_EVENT, "scrollEvent");
    assert_eq!(MapboxView::MOVE_BEGIN_EVENT, "moveBeginEvent");
    assert_eq!(
        MapboxView::LOCATION_PERMISSION_GRANTED_EVENT,
        "locationPermissionGranted"
    );
    assert_eq!(
        MapboxView::LOCATION_PERMISSION_DENIED_EVENT,
        "locationPermissionDenied"
    );

    let (adapter, view) = attached_view();
    view.on_map_event(MapboxView::MAP_READY_EVENT, "ready-1", Arc::new(|_| {}))
        .unwrap();
    view.off_map_event(MapboxView::MAP_READY_EVENT, "ready-1").unwrap();
    let names: Vec<String> = adapter.calls().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "on_map_event:mapReady:ready-1".to_string(),
            "off_map_event:mapReady:ready-1".to_string(),
        ]
    );
}
