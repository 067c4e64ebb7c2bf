use mapbridge::prelude::*;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Example of driving the view bridge end to end without any native SDK.
///
/// `HeadlessMapbox` is a stand-in platform adapter: it keeps a little
/// camera state, projects coordinates linearly at 100 px/degree around the
/// current center, and logs everything else it is asked to do.
struct HeadlessMapbox {
    handles: AtomicU64,
    polylines: AtomicU64,
    center: Mutex<LatLng>,
    zoom: Mutex<f64>,
    tracking: Mutex<UserLocationCameraMode>,
}

const SCREEN_CENTER: Point = Point { x: 512.0, y: 384.0 };
const PIXELS_PER_DEGREE: f64 = 100.0;

impl HeadlessMapbox {
    fn new() -> Self {
        Self {
            handles: AtomicU64::new(0),
            polylines: AtomicU64::new(0),
            center: Mutex::new(LatLng::default()),
            zoom: Mutex::new(0.0),
            tracking: Mutex::new(UserLocationCameraMode::None),
        }
    }

    fn note(&self, what: &str) -> Result<()> {
        log::info!("{}", what);
        Ok(())
    }
}

#[async_trait]
impl MapboxCommonApi for HeadlessMapbox {}

#[async_trait]
impl MapboxApi for HeadlessMapbox {
    fn init_event_handler_shim(
        &self,
        _settings: &ShowOptions,
        native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("event shim wired to {:?}", native_map);
        Ok(())
    }

    fn on_map_event(
        &self,
        event_name: &str,
        id: &str,
        _callback: EventCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("listener {} registered for '{}'", id, event_name);
        Ok(())
    }

    fn off_map_event(
        &self,
        event_name: &str,
        id: &str,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("listener {} removed from '{}'", id, event_name);
        Ok(())
    }

    async fn show(&self, options: ShowOptions) -> Result<ShowResult> {
        let token = options
            .access_token
            .as_deref()
            .ok_or_else(|| BridgeError::Native("access token required".to_string()))?;
        log::info!("creating map view (token {}...)", &token[..token.len().min(3)]);

        if let Some(center) = options.center {
            *self.center.lock().unwrap() = center;
        }
        if let Some(zoom_level) = options.zoom_level {
            *self.zoom.lock().unwrap() = zoom_level;
        }

        let handle = NativeMapHandle::from_raw(self.handles.fetch_add(1, Ordering::SeqCst) + 1);
        if let Some(on_map_ready) = &options.on_map_ready {
            on_map_ready(handle);
        }
        Ok(ShowResult {
            platform: Platform::Android,
            native_view: handle,
        })
    }

    async fn hide(&self) -> Result<()> {
        self.note("map hidden")
    }

    async fn unhide(&self) -> Result<()> {
        self.note("map unhidden")
    }

    async fn destroy(&self, native_map: Option<NativeMapHandle>) -> Result<()> {
        log::info!("destroying {:?}", native_map);
        Ok(())
    }

    async fn on_start(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: start")
    }

    async fn on_resume(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: resume")
    }

    async fn on_pause(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: pause")
    }

    async fn on_stop(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: stop")
    }

    async fn on_low_memory(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: low memory")
    }

    async fn on_destroy(&self, _native_map: Option<NativeMapHandle>) -> Result<()> {
        self.note("lifecycle: destroy")
    }

    async fn set_map_style(
        &self,
        style: MapStyle,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("style set to {}", style);
        Ok(())
    }

    async fn add_markers(
        &self,
        markers: Vec<MapboxMarker>,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        for marker in &markers {
            log::info!(
                "marker '{}' at {:.4}, {:.4}",
                marker.title.as_deref().unwrap_or("untitled"),
                marker.position.lat,
                marker.position.lng
            );
        }
        Ok(())
    }

    async fn remove_markers(
        &self,
        ids: Option<Vec<String>>,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        match ids {
            Some(ids) => log::info!("removing markers {:?}", ids),
            None => log::info!("removing all markers"),
        }
        Ok(())
    }

    async fn set_center(
        &self,
        options: SetCenterOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        *self.center.lock().unwrap() = options.center;
        Ok(())
    }

    async fn get_center(&self, _native_map: Option<NativeMapHandle>) -> Result<LatLng> {
        Ok(*self.center.lock().unwrap())
    }

    async fn set_zoom_level(
        &self,
        options: SetZoomLevelOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        *self.zoom.lock().unwrap() = options.level;
        Ok(())
    }

    async fn get_zoom_level(&self, _native_map: Option<NativeMapHandle>) -> Result<f64> {
        Ok(*self.zoom.lock().unwrap())
    }

    async fn set_tilt(
        &self,
        options: SetTiltOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!(
            "tilting to {} degrees over {} ms",
            options.tilt,
            options
                .duration
                .unwrap_or(mapbridge::constants::DEFAULT_TILT_DURATION_MS)
        );
        Ok(())
    }

    async fn get_tilt(&self, _native_map: Option<NativeMapHandle>) -> Result<f64> {
        Ok(0.0)
    }

    async fn get_user_location(
        &self,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<UserLocation> {
        Ok(UserLocation {
            location: *self.center.lock().unwrap(),
            speed: 0.0,
        })
    }

    fn show_user_location_marker(
        &self,
        options: ShowUserLocationMarkerOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!(
            "user location marker on ({:?}/{:?})",
            options.render_mode,
            options.camera_mode
        );
        Ok(())
    }

    fn change_user_location_marker_mode(
        &self,
        render_mode: UserLocationRenderMode,
        camera_mode: UserLocationCameraMode,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("marker mode now {:?}/{:?}", render_mode, camera_mode);
        Ok(())
    }

    fn force_user_location_update(
        &self,
        location: UserLocation,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("forced location to {:?}", location.location);
        Ok(())
    }

    async fn track_user(
        &self,
        options: TrackUserOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        *self.tracking.lock().unwrap() = options.mode;
        Ok(())
    }

    fn get_tracking_mode(&self, _native_map: Option<NativeMapHandle>) -> UserLocationCameraMode {
        *self.tracking.lock().unwrap()
    }

    async fn add_layer(&self, style: Value, _native_map: Option<NativeMapHandle>) -> Result<()> {
        log::info!("layer added: {}", style);
        Ok(())
    }

    async fn remove_layer(&self, id: &str, _native_map: Option<NativeMapHandle>) -> Result<()> {
        log::info!("layer {} removed", id);
        Ok(())
    }

    async fn add_line_point(
        &self,
        id: &str,
        point: LatLng,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("line {} extended to {:.4}, {:.4}", id, point.lat, point.lng);
        Ok(())
    }

    async fn query_rendered_features(
        &self,
        options: QueryRenderedFeaturesOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<Vec<Feature>> {
        log::info!("querying features at {:?}", options.point);
        Ok(Vec::new())
    }

    async fn add_polygon(
        &self,
        options: AddPolygonOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("polygon with {} points", options.points.len());
        Ok(())
    }

    async fn remove_polygons(
        &self,
        _ids: Option<Vec<String>>,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("polygons removed")
    }

    fn add_polyline(
        &self,
        options: AddPolylineOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<String> {
        let id = format!("line-{}", self.polylines.fetch_add(1, Ordering::SeqCst) + 1);
        log::info!("polyline {} with {} points", id, options.points.len());
        Ok(id)
    }

    fn remove_polylines(
        &self,
        _ids: Option<Vec<String>>,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("polylines removed")
    }

    fn update_polyline(
        &self,
        id: &str,
        new_points: Vec<LatLng>,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        log::info!("polyline {} now has {} points", id, new_points.len());
        Ok(())
    }

    async fn animate_camera(
        &self,
        options: AnimateCameraOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        *self.center.lock().unwrap() = options.target;
        if let Some(zoom_level) = options.zoom_level {
            *self.zoom.lock().unwrap() = zoom_level;
        }
        Ok(())
    }

    async fn set_on_map_click_listener(
        &self,
        _listener: CoordinateCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("click listener set")
    }

    async fn set_on_map_long_click_listener(
        &self,
        _listener: CoordinateCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("long-click listener set")
    }

    async fn set_on_scroll_listener(
        &self,
        listener: OptionalCoordinateCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        // Deliver one synthetic scroll so the wiring is visible.
        listener(Some(*self.center.lock().unwrap()));
        Ok(())
    }

    async fn set_on_move_begin_listener(
        &self,
        _listener: OptionalCoordinateCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("move-begin listener set")
    }

    async fn set_on_fling_listener(
        &self,
        _listener: PlainCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("fling listener set")
    }

    async fn set_on_camera_move_listener(
        &self,
        _listener: PlainCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("camera-move listener set")
    }

    async fn set_on_camera_move_cancel_listener(
        &self,
        _listener: PlainCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("camera-move-cancel listener set")
    }

    async fn set_on_camera_idle_listener(
        &self,
        _listener: PlainCallback,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        self.note("camera-idle listener set")
    }

    async fn get_viewport(&self, _native_map: Option<NativeMapHandle>) -> Result<Viewport> {
        let center = *self.center.lock().unwrap();
        let span = SCREEN_CENTER.y / PIXELS_PER_DEGREE;
        Ok(Viewport {
            bounds: Bounds {
                north: center.lat + span,
                east: center.lng + span,
                south: center.lat - span,
                west: center.lng - span,
            },
            zoom_level: *self.zoom.lock().unwrap(),
        })
    }

    async fn set_viewport(
        &self,
        options: SetViewportOptions,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<()> {
        *self.center.lock().unwrap() = options.bounds.center();
        Ok(())
    }

    async fn download_offline_region(&self, options: DownloadOfflineRegionOptions) -> Result<()> {
        // Report a couple of synthetic progress steps.
        if let Some(on_progress) = &options.on_progress {
            for (completed, complete) in [(400u64, false), (800u64, true)] {
                on_progress(DownloadProgress {
                    name: options.region.name.clone(),
                    completed,
                    expected: 800,
                    percentage: completed as f64 / 8.0,
                    complete,
                    completed_size: None,
                });
            }
        }
        Ok(())
    }

    async fn list_offline_regions(
        &self,
        _options: ListOfflineRegionsOptions,
    ) -> Result<Vec<OfflineRegion>> {
        Ok(Vec::new())
    }

    async fn delete_offline_region(&self, options: DeleteOfflineRegionOptions) -> Result<()> {
        log::info!("offline region '{}' deleted", options.name);
        Ok(())
    }

    async fn add_geo_json_clustered(&self, options: AddGeoJsonClusteredOptions) -> Result<()> {
        log::info!("clustered source '{}' from {}", options.name, options.data);
        Ok(())
    }

    async fn is_scrolling_enabled(&self, _native_map: Option<NativeMapHandle>) -> Result<bool> {
        Ok(true)
    }

    async fn convert_to_map_coordinate(
        &self,
        point: Point,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<LatLng> {
        let center = *self.center.lock().unwrap();
        Ok(LatLng::new(
            center.lat - (point.y - SCREEN_CENTER.y) / PIXELS_PER_DEGREE,
            center.lng + (point.x - SCREEN_CENTER.x) / PIXELS_PER_DEGREE,
        ))
    }

    async fn convert_to_on_screen_coordinate(
        &self,
        coordinate: LatLng,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<Point> {
        let center = *self.center.lock().unwrap();
        Ok(Point::new(
            SCREEN_CENTER.x + (coordinate.lng - center.lng) * PIXELS_PER_DEGREE,
            SCREEN_CENTER.y - (coordinate.lat - center.lat) * PIXELS_PER_DEGREE,
        ))
    }

    async fn get_distance_between(
        &self,
        from: LatLng,
        to: LatLng,
        _native_map: Option<NativeMapHandle>,
    ) -> Result<f64> {
        // Equirectangular approximation is plenty for a headless stub.
        let meters_per_degree = 111_320.0;
        let dx = (to.lng - from.lng) * meters_per_degree * from.lat.to_radians().cos();
        let dy = (to.lat - from.lat) * meters_per_degree;
        Ok((dx * dx + dy * dy).sqrt())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🗺️ Headless Bridge Example");
    println!("==========================");

    let mut view = MapboxView::new(Arc::new(HeadlessMapbox::new()));

    // Attribute values as a declarative host would deliver them.
    view.set_property("accessToken", &json!("pk.headless-demo"))?;
    view.set_property("mapStyle", &json!("outdoors"))?;
    view.set_property("latitude", &json!("52.3702"))?;
    view.set_property("longitude", &json!("4.8952"))?;
    view.set_property("zoomLevel", &json!("12"))?;
    view.set_property("showUserLocation", &json!("true"))?;

    let mut options = view.show_options()?;
    options.on_map_ready = Some(Arc::new(|handle| {
        println!("   map ready: {}", handle);
    }));
    println!("✅ Resolved configuration:");
    println!("   style: {:?}", options.style);
    println!("   center: {:?}", options.center);
    println!(
        "   hideAttribution (from defaults): {:?}",
        options.hide_attribution
    );

    let shown = view.api().show(options.clone()).await?;
    view.attach_native_view(shown.native_view)?;
    view.api()
        .init_event_handler_shim(&options, view.native_map_view())?;
    println!("✅ Map shown on {:?} as {}", shown.platform, shown.native_view);

    // A marker with a tap callback and a short route.
    let marker = MapboxMarker::new(52.3731, 4.8910)
        .with_title("Dam Square")
        .on_tap(Arc::new(|marker| {
            println!("   marker tapped: {:?}", marker.title);
        }));
    view.add_markers(vec![marker]).await?;

    let route_id = view.add_polyline(
        AddPolylineOptions::new(vec![
            LatLng::new(52.3702, 4.8952),
            LatLng::new(52.3731, 4.8910),
        ])
        .with_width(7.0)
        .with_color("#3887be"),
    )?;
    println!("✅ Route drawn as '{}'", route_id);

    // The derived geometry helpers.
    let pixels = view
        .pixel_distance_between(LatLng::new(52.3702, 4.8952), LatLng::new(52.3731, 4.8910))
        .await?;
    println!("📏 Dam Square is {:.1} px from the center", pixels);

    let region = view
        .coordinate_region_around_point(Point::new(512.0, 384.0), 150.0)
        .await?;
    println!(
        "🔍 150 px around the center covers lat {:.4}..{:.4}, lng {:.4}..{:.4}",
        region.min_lat, region.max_lat, region.min_lng, region.max_lng
    );

    // Camera and user tracking.
    view.animate_camera(AnimateCameraOptions {
        target: LatLng::new(52.3792, 4.9003),
        zoom_level: Some(15.0),
        duration: Some(4000),
        ..Default::default()
    })
    .await?;
    view.track_user(TrackUserOptions {
        mode: UserLocationCameraMode::TrackingGps,
        animated: Some(true),
    })
    .await?;
    println!("🎯 Tracking mode: {}", view.get_tracking_mode());

    // Offline download with progress reporting.
    let viewport = view.get_viewport().await?;
    view.api()
        .download_offline_region(DownloadOfflineRegionOptions {
            region: OfflineRegion {
                name: "amsterdam".to_string(),
                bounds: viewport.bounds,
                min_zoom: 11.0,
                max_zoom: 15.0,
                style: MapStyle::Outdoors,
            },
            on_progress: Some(Arc::new(|progress| {
                println!(
                    "   offline '{}': {:.0}%{}",
                    progress.name,
                    progress.percentage,
                    if progress.complete { " (done)" } else { "" }
                );
            })),
            access_token: None,
        })
        .await?;

    // Host lifecycle passes straight through.
    view.on_pause().await?;
    view.on_resume().await?;
    view.destroy().await?;

    println!("\n✅ Headless bridge example completed successfully!");
    Ok(())
}
