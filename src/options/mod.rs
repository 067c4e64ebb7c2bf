//! The option and result records of the map-view surface.
//!
//! These are plain serde-mapped shapes. Fields holding user callbacks or
//! host handles are excluded from serialization.

pub mod camera;
pub mod layers;
pub mod marker;
pub mod offline;
pub mod shapes;
pub mod show;

pub use camera::{
    AnimateCameraOptions, SetCenterOptions, SetTiltOptions, SetViewportOptions,
    SetZoomLevelOptions, ShowUserLocationMarkerOptions, TrackUserOptions,
};
pub use layers::{AddGeoJsonClusteredOptions, Feature, MapboxCluster, QueryRenderedFeaturesOptions};
pub use marker::{MapboxMarker, MarkerTapCallback};
pub use offline::{
    DeleteOfflineRegionOptions, DownloadOfflineRegionOptions, DownloadProgress,
    ListOfflineRegionsOptions, OfflineRegion, ProgressCallback,
};
pub use shapes::{AddPolygonOptions, AddPolylineOptions};
pub use show::{Platform, ShowOptions, ShowOptionsMargins, ShowResult};
