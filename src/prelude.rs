//! Prelude module for common mapbridge types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapbridge::prelude::*;`

pub use crate::core::{
    config::{defaults, merge, MapConfig},
    geo::{Bounds, CoordinateRegion, LatLng, Point, UserLocation, Viewport},
    style::{MapStyle, UserLocationCameraMode, UserLocationRenderMode},
};

pub use crate::api::{
    adapter::{MapboxApi, MapboxCommonApi},
    events::{
        CoordinateCallback, EventCallback, MapReadyCallback, OptionalCoordinateCallback,
        PlainCallback,
    },
    handle::{NativeMapHandle, PlatformHandle},
};

pub use crate::options::{
    camera::{
        AnimateCameraOptions, SetCenterOptions, SetTiltOptions, SetViewportOptions,
        SetZoomLevelOptions, ShowUserLocationMarkerOptions, TrackUserOptions,
    },
    layers::{AddGeoJsonClusteredOptions, Feature, MapboxCluster, QueryRenderedFeaturesOptions},
    marker::{MapboxMarker, MarkerTapCallback},
    offline::{
        DeleteOfflineRegionOptions, DownloadOfflineRegionOptions, DownloadProgress,
        ListOfflineRegionsOptions, OfflineRegion, ProgressCallback,
    },
    shapes::{AddPolygonOptions, AddPolylineOptions},
    show::{Platform, ShowOptions, ShowOptionsMargins, ShowResult},
};

pub use crate::view::{bridge::MapboxView, properties::PropertyDescriptor};

pub use crate::{BridgeError, Result};

pub use std::sync::Arc;
