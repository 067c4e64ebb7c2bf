use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for querying rendered features at a screen location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRenderedFeaturesOptions {
    pub point: LatLng,
    /// Restrict the query to these style layers; unset queries all layers.
    pub layer_ids: Option<Vec<String>>,
}

impl QueryRenderedFeaturesOptions {
    pub fn at(point: LatLng) -> Self {
        Self {
            point,
            layer_ids: None,
        }
    }

    pub fn in_layers(mut self, layer_ids: Vec<String>) -> Self {
        self.layer_ids = Some(layer_ids);
        self
    }
}

/// A rendered feature returned by a query, as reported by the native SDK.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Source-assigned feature id; may be numeric or textual.
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub feature_type: Option<String>,
    pub properties: Map<String, Value>,
}

/// One clustering bucket: point count threshold and circle color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapboxCluster {
    pub points: u32,
    /// CSS color string.
    pub color: String,
}

/// Options for adding a clustered GeoJSON source with its circle layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGeoJsonClusteredOptions {
    /// A unique source identifier, like `"earthquakes"`.
    pub name: String,
    /// URL of the GeoJSON document.
    pub data: String,
    /// Clusters are dissolved above this zoom level.
    pub cluster_max_zoom: Option<f64>,
    /// Cluster radius in screen pixels.
    pub cluster_radius: Option<f64>,
    pub clusters: Option<Vec<MapboxCluster>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_type_wire_name() {
        let json = serde_json::json!({
            "id": 42,
            "type": "Feature",
            "properties": { "mag": 2.4 }
        });
        let feature: Feature = serde_json::from_value(json).unwrap();
        assert_eq!(feature.feature_type.as_deref(), Some("Feature"));
        assert_eq!(feature.properties["mag"], 2.4);
    }

    #[test]
    fn test_query_options_builder() {
        let options = QueryRenderedFeaturesOptions::at(LatLng::new(52.4, 4.9))
            .in_layers(vec!["circles".into()]);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["layerIds"][0], "circles");
        assert_eq!(json["point"]["lat"], 52.4);
    }

    #[test]
    fn test_clustered_options_wire_shape() {
        let options = AddGeoJsonClusteredOptions {
            name: "earthquakes".into(),
            data: "https://example.com/earthquakes.geojson".into(),
            cluster_max_zoom: Some(15.0),
            cluster_radius: Some(40.0),
            clusters: Some(vec![MapboxCluster {
                points: 20,
                color: "#ff0000".into(),
            }]),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["clusterMaxZoom"], 15.0);
        assert_eq!(json["clusters"][0]["points"], 20);
    }
}
