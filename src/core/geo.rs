use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude, in degrees.
///
/// Validity of the ranges (lat in [-90, 90], lng in [-180, 180]) is the
/// native SDK's concern; this layer only carries the values through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that the coordinate lies within the conventional ranges.
    /// Advisory only; nothing in this crate rejects out-of-range values.
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(value: geo_types::Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

/// Represents a point in screen-pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a copy shifted by the given pixel deltas.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point, in pixels.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A geographic rectangle described by its four edges, in degrees.
///
/// `north >= south` is expected but not enforced here; east/west wraparound
/// at the antimeridian is handled by the native SDK.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl Bounds {
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Checks whether a coordinate lies inside the bounds (no wraparound).
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lng <= self.east
            && point.lng >= self.west
    }

    /// Gets the center coordinate of the bounds.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }
}

impl From<Bounds> for geo_types::Rect<f64> {
    fn from(value: Bounds) -> Self {
        geo_types::Rect::new(
            geo_types::coord! { x: value.west, y: value.south },
            geo_types::coord! { x: value.east, y: value.north },
        )
    }
}

/// A normalized geographic box: `min_lat <= max_lat` and `min_lng <= max_lng`
/// hold by construction when built through [`CoordinateRegion::from_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl CoordinateRegion {
    /// Builds the region spanned by two corner coordinates, taking the
    /// per-axis min/max so the result is normalized regardless of which
    /// direction screen-y grows relative to latitude.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            min_lat: a.lat.min(b.lat),
            max_lat: a.lat.max(b.lat),
            min_lng: a.lng.min(b.lng),
            max_lng: a.lng.max(b.lng),
        }
    }

    /// Converts the region into edge-named [`Bounds`].
    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(self.max_lat, self.max_lng, self.min_lat, self.min_lng)
    }
}

impl From<CoordinateRegion> for geo_types::Rect<f64> {
    fn from(value: CoordinateRegion) -> Self {
        geo_types::Rect::new(
            geo_types::coord! { x: value.min_lng, y: value.min_lat },
            geo_types::coord! { x: value.max_lng, y: value.max_lat },
        )
    }
}

/// Paired snapshot of the camera state: visible bounds and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub bounds: Bounds,
    pub zoom_level: f64,
}

/// A user position reported by the native location component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub location: LatLng,
    /// Ground speed in meters per second.
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(52.3702157, 4.895167);
        assert_eq!(coord.lat, 52.3702157);
        assert_eq!(coord.lng, 4.895167);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_validity_is_advisory() {
        let coord = LatLng::new(123.0, 456.0);
        assert!(!coord.is_valid());
        // Still representable; nothing clamps at this layer.
        assert_eq!(coord.lat, 123.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(13.0, 24.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(100.0, 200.0).offset(-25.0, 25.0);
        assert_eq!(p, Point::new(75.0, 225.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(53.0, 5.0, 52.0, 4.0);
        assert!(bounds.contains(&LatLng::new(52.5, 4.5)));
        assert!(!bounds.contains(&LatLng::new(51.9, 4.5)));
        assert_eq!(bounds.center(), LatLng::new(52.5, 4.5));
    }

    #[test]
    fn test_region_from_corners_normalizes() {
        // Corners supplied in "screen order" where y grows downwards, so the
        // first corner carries the larger latitude.
        let region =
            CoordinateRegion::from_corners(LatLng::new(52.4, 4.8), LatLng::new(52.3, 4.9));
        assert!(region.min_lat <= region.max_lat);
        assert!(region.min_lng <= region.max_lng);
        assert_eq!(region.min_lat, 52.3);
        assert_eq!(region.max_lat, 52.4);
    }

    #[test]
    fn test_region_to_bounds() {
        let region =
            CoordinateRegion::from_corners(LatLng::new(52.3, 4.9), LatLng::new(52.4, 4.8));
        let bounds = region.to_bounds();
        assert_eq!(bounds.north, 52.4);
        assert_eq!(bounds.east, 4.9);
        assert_eq!(bounds.south, 52.3);
        assert_eq!(bounds.west, 4.8);
    }

    #[test]
    fn test_geo_types_interop() {
        let coord = LatLng::new(40.7128, -74.0060);
        let gp: geo_types::Point<f64> = coord.into();
        assert_eq!(gp.x(), -74.0060);
        assert_eq!(gp.y(), 40.7128);
        assert_eq!(LatLng::from(gp), coord);

        let rect: geo_types::Rect<f64> =
            CoordinateRegion::from_corners(LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0)).into();
        assert_eq!(rect.min().y, 1.0);
        assert_eq!(rect.max().x, 4.0);
    }

    #[test]
    fn test_viewport_serde_shape() {
        let viewport = Viewport {
            bounds: Bounds::new(53.0, 5.0, 52.0, 4.0),
            zoom_level: 12.0,
        };
        let json = serde_json::to_value(&viewport).unwrap();
        assert_eq!(json["zoomLevel"], 12.0);
        assert_eq!(json["bounds"]["north"], 53.0);
    }
}
