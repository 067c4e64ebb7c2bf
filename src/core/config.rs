//! Map configuration: the process-wide defaults, the deep-merge used to
//! combine them with user options, and the accumulator that collects
//! declarative property values before the native map exists.

use crate::core::style::MapStyle;
use crate::options::ShowOptions;
use crate::Result;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

static DEFAULTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "style": MapStyle::Streets.as_str(),
        "mapStyle": MapStyle::Streets.as_str(),
        "margins": {
            "left": 0,
            "right": 0,
            "top": 0,
            "bottom": 0
        },
        // 0 (a big part of the world) to 20 (street level)
        "zoomLevel": 0,
        // true requires the location-usage entries in the host app manifest
        "showUserLocation": false,
        // hiding the logo requires a paid plan
        "hideLogo": false,
        "hideAttribution": true,
        "hideCompass": false,
        "disableRotation": false,
        "disableScroll": false,
        "disableZoom": false,
        "disableTilt": false,
        "delay": 0
    })
});

/// Process-wide default configuration, applied underneath user-supplied
/// options at show time. Read-only after first access.
pub fn defaults() -> &'static Value {
    &DEFAULTS
}

/// Deep-merges two JSON objects into a new object containing every key of
/// both.
///
/// Precedence is asymmetric: for a key present in both inputs, `base` wins
/// unless its value is itself an object, in which case the two values are
/// merged recursively. Keys only present in `overrides` are copied over.
/// Existing plugin consumers rely on exactly this precedence (including
/// `base` scalars shadowing `overrides` values), so it must not be changed
/// to a more conventional overwrite.
///
/// Values that are not objects (scalars, arrays, null) are never merged
/// into; they are copied verbatim. Non-object top-level arguments simply
/// contribute no keys.
pub fn merge(base: &Value, overrides: &Value) -> Value {
    let mut result = Map::new();
    if let Some(base_map) = base.as_object() {
        for (key, base_value) in base_map {
            match overrides.get(key) {
                Some(override_value) if base_value.is_object() => {
                    result.insert(key.clone(), merge(base_value, override_value));
                }
                _ => {
                    result.insert(key.clone(), base_value.clone());
                }
            }
        }
    }
    if let Some(override_map) = overrides.as_object() {
        for (key, value) in override_map {
            result.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }
    Value::Object(result)
}

/// Mutable bag of configuration values collected from declarative view
/// properties before the native map is created.
///
/// The shape is the union of [`ShowOptions`] fields, keyed in camelCase.
/// Nothing is validated at assignment time; out-of-range values flow
/// through for the native layer to clamp or reject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapConfig {
    values: Map<String, Value>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stores a top-level configuration value, replacing any previous one.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Stores a value one level deep (e.g. `center.lat`), creating the outer
    /// object when absent and preserving its other fields when present.
    pub fn set_nested(&mut self, outer: &str, inner: &str, value: Value) {
        let entry = self
            .values
            .entry(outer.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Some(map) = entry.as_object_mut() {
            map.insert(inner.to_string(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The raw accumulated values as a JSON object, without defaults.
    pub fn as_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    /// The accumulated values merged over [`defaults`]: user values win,
    /// defaults fill the gaps (recursively for nested objects such as
    /// `margins`).
    pub fn resolve(&self) -> Value {
        merge(&self.as_value(), defaults())
    }

    /// Deserializes the resolved configuration into typed [`ShowOptions`].
    pub fn to_show_options(&self) -> Result<ShowOptions> {
        Ok(serde_json::from_value(self.resolve())?)
    }
}
