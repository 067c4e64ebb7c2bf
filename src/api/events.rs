//! Callback aliases shared by the capability surface.
//!
//! Every callback crossing the adapter boundary is a cloneable
//! `Arc<dyn Fn .. + Send + Sync>`; adapters store them and invoke them
//! from whatever thread the native SDK delivers its events on.

use crate::api::handle::NativeMapHandle;
use crate::core::geo::LatLng;
use serde_json::Value;
use std::sync::Arc;

/// Free-form map event with a JSON payload defined by the native side.
pub type EventCallback = Arc<dyn Fn(Value) + Send + Sync>;

/// Tap-style events that always carry a coordinate.
pub type CoordinateCallback = Arc<dyn Fn(LatLng) + Send + Sync>;

/// Scroll-style events; some SDK versions omit the coordinate.
pub type OptionalCoordinateCallback = Arc<dyn Fn(Option<LatLng>) + Send + Sync>;

/// Events with no payload, like fling and camera-idle.
pub type PlainCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired once the native map view exists.
pub type MapReadyCallback = Arc<dyn Fn(NativeMapHandle) + Send + Sync>;

pub use crate::options::marker::MarkerTapCallback;
pub use crate::options::offline::ProgressCallback;
