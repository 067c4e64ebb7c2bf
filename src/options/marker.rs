use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Invoked by the native adapter when a marker or its callout is tapped.
pub type MarkerTapCallback = Arc<dyn Fn(&MapboxMarker) + Send + Sync>;

/// A map annotation with an optional callout and tap callbacks.
///
/// Callbacks never cross the wire; serialization carries the
/// descriptive fields only.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapboxMarker {
    #[serde(flatten)]
    pub position: LatLng,
    pub id: Option<String>,
    pub address: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Either a resource URI (`res://icon`) or an http(s) URL.
    pub icon: Option<String>,
    /// Path to an icon image, relative to the host application root.
    pub icon_path: Option<String>,
    /// Pre-select the marker so its callout shows without a tap.
    pub selected: Option<bool>,
    #[serde(skip)]
    pub on_tap: Option<MarkerTapCallback>,
    #[serde(skip)]
    pub on_callout_tap: Option<MarkerTapCallback>,
}

impl MapboxMarker {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            position: LatLng::new(lat, lng),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_tap(mut self, callback: MarkerTapCallback) -> Self {
        self.on_tap = Some(callback);
        self
    }

    pub fn on_callout_tap(mut self, callback: MarkerTapCallback) -> Self {
        self.on_callout_tap = Some(callback);
        self
    }
}

impl fmt::Debug for MapboxMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxMarker")
            .field("position", &self.position)
            .field("id", &self.id)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .field("icon_path", &self.icon_path)
            .field("selected", &self.selected)
            .field("on_tap", &self.on_tap.as_ref().map(|_| "..."))
            .field("on_callout_tap", &self.on_callout_tap.as_ref().map(|_| "..."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_serialization_skips_callbacks() {
        let marker = MapboxMarker::new(52.37, 4.88)
            .with_title("Amsterdam")
            .on_tap(Arc::new(|_| {}));
        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(json["lat"], 52.37);
        assert_eq!(json["title"], "Amsterdam");
        assert!(json.get("onTap").is_none());
    }

    #[test]
    fn test_callback_receives_marker() {
        static TAPS: AtomicUsize = AtomicUsize::new(0);
        let marker = MapboxMarker::new(1.0, 2.0).on_tap(Arc::new(|m| {
            assert_eq!(m.position.lat, 1.0);
            TAPS.fetch_add(1, Ordering::SeqCst);
        }));
        if let Some(callback) = &marker.on_tap {
            callback(&marker);
        }
        assert_eq!(TAPS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_icon_path_wire_name() {
        let marker = MapboxMarker {
            icon_path: Some("images/pin.png".into()),
            ..MapboxMarker::new(0.0, 0.0)
        };
        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(json["iconPath"], "images/pin.png");
    }
}
