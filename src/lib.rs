//! # mapbridge
//!
//! The platform-neutral core of a native map-view plugin.
//!
//! This crate defines the contract between a declarative UI host and the
//! native Mapbox SDKs: the option and value shapes crossing that boundary,
//! the asynchronous capability surface every platform adapter implements
//! ([`MapboxApi`]), and the dispatch bridge ([`MapboxView`]) that forwards
//! view calls to whichever adapter backs the current platform. It performs
//! no rendering and no I/O of its own.

pub mod api;
pub mod core;
pub mod options;
pub mod prelude;
pub mod view;

pub use crate::core::constants;

// Re-export public API
pub use api::{
    adapter::{MapboxApi, MapboxCommonApi},
    handle::{NativeMapHandle, PlatformHandle},
};

pub use crate::core::{
    config::{defaults, merge, MapConfig},
    geo::{Bounds, CoordinateRegion, LatLng, Point, UserLocation, Viewport},
    style::{MapStyle, UserLocationCameraMode, UserLocationRenderMode},
};

pub use options::{
    marker::MapboxMarker,
    show::{Platform, ShowOptions, ShowResult},
};

pub use view::{bridge::MapboxView, properties::PropertyDescriptor};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A native SDK failure, forwarded verbatim by the bridge.
    #[error("native map error: {0}")]
    Native(String),

    #[error("location permission denied")]
    PermissionDenied,

    #[error("invalid value for property '{name}': {reason}")]
    Property { name: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("a native map view is already attached")]
    ViewAlreadyAttached,
}

/// Error type alias for convenience
pub type Error = BridgeError;
