use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Options for drawing a filled polygon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPolygonOptions {
    /// Pass an id if the polygon should be removable later.
    pub id: Option<String>,
    pub points: Vec<LatLng>,
    /// CSS color string, for instance `#ff0000`.
    pub fill_color: Option<String>,
    /// 0.0 through 1.0.
    pub fill_opacity: Option<f64>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
}

impl AddPolygonOptions {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }
}

/// Options for drawing a polyline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPolylineOptions {
    /// Pass an id if the polyline should be removable later.
    pub id: Option<String>,
    /// Line width in points; defaults to
    /// [`DEFAULT_POLYLINE_WIDTH`](crate::core::constants::DEFAULT_POLYLINE_WIDTH).
    pub width: Option<f64>,
    /// CSS color string; defaults to black.
    pub color: Option<String>,
    /// 0.0 through 1.0; defaults to fully opaque.
    pub opacity: Option<f64>,
    pub points: Vec<LatLng>,
    /// Draw white direction arrows along the route. Default true.
    pub draw_arrows: Option<bool>,
}

impl AddPolylineOptions {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_wire_shape() {
        let options = AddPolygonOptions {
            fill_color: Some("#ff0000".into()),
            fill_opacity: Some(0.5),
            ..AddPolygonOptions::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)])
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["fillColor"], "#ff0000");
        assert_eq!(json["fillOpacity"], 0.5);
        assert_eq!(json["points"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_polyline_builder() {
        let options = AddPolylineOptions::new(vec![LatLng::new(0.0, 0.0)])
            .with_width(7.0)
            .with_color("#00ff00");
        assert_eq!(options.width, Some(7.0));
        assert_eq!(options.color.as_deref(), Some("#00ff00"));
        assert!(options.id.is_none());
    }
}
