use crate::core::geo::Bounds;
use crate::core::style::MapStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Invoked by the native adapter as an offline download advances.
pub type ProgressCallback = Arc<dyn Fn(DownloadProgress) + Send + Sync>;

/// A named region of pre-downloaded tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineRegion {
    pub name: String,
    pub bounds: Bounds,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub style: MapStyle,
}

/// Progress snapshot emitted while a region downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProgress {
    pub name: String,
    /// Resources downloaded so far.
    pub completed: u64,
    /// Resources expected in total.
    pub expected: u64,
    pub percentage: f64,
    pub complete: bool,
    /// Bytes downloaded so far; only the Android SDK reports this.
    pub completed_size: Option<u64>,
}

/// Options for downloading a region for offline use.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOfflineRegionOptions {
    #[serde(flatten)]
    pub region: OfflineRegion,
    #[serde(skip)]
    pub on_progress: Option<ProgressCallback>,
    /// Set this in case no map has been shown yet, so no token has been
    /// passed to the native SDK. Only the Android SDK needs it.
    pub access_token: Option<String>,
}

impl fmt::Debug for DownloadOfflineRegionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadOfflineRegionOptions")
            .field("region", &self.region)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "..."))
            .field("access_token", &self.access_token)
            .finish()
    }
}

/// Options for listing previously downloaded regions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOfflineRegionsOptions {
    /// Set this in case no map has been shown yet. Only the Android SDK
    /// needs it.
    pub access_token: Option<String>,
}

/// Options for deleting a downloaded region by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOfflineRegionOptions {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_wire_shape() {
        let region = OfflineRegion {
            name: "amsterdam".into(),
            bounds: Bounds {
                north: 52.5,
                east: 5.0,
                south: 52.2,
                west: 4.7,
            },
            min_zoom: 9.0,
            max_zoom: 11.0,
            style: MapStyle::Outdoors,
        };
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["minZoom"], 9.0);
        assert_eq!(json["style"], "outdoors");
    }

    #[test]
    fn test_download_options_flatten_and_skip() {
        let options = DownloadOfflineRegionOptions {
            region: OfflineRegion {
                name: "amsterdam".into(),
                bounds: Bounds {
                    north: 52.5,
                    east: 5.0,
                    south: 52.2,
                    west: 4.7,
                },
                min_zoom: 9.0,
                max_zoom: 11.0,
                style: MapStyle::Streets,
            },
            on_progress: Some(Arc::new(|_| {})),
            access_token: Some("pk.abc".into()),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["name"], "amsterdam");
        assert_eq!(json["accessToken"], "pk.abc");
        assert!(json.get("onProgress").is_none());
    }

    #[test]
    fn test_progress_optional_size() {
        let progress: DownloadProgress = serde_json::from_value(serde_json::json!({
            "name": "amsterdam",
            "completed": 400,
            "expected": 800,
            "percentage": 50.0,
            "complete": false
        }))
        .unwrap();
        assert_eq!(progress.completed_size, None);
        assert!(!progress.complete);
    }
}
