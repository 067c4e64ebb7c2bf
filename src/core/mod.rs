pub mod config;
pub mod constants;
pub mod geo;
pub mod style;

// Re-export the essential types
pub use config::{defaults, merge, MapConfig};
pub use geo::{Bounds, CoordinateRegion, LatLng, Point, UserLocation, Viewport};
pub use style::{MapStyle, UserLocationCameraMode, UserLocationRenderMode};
