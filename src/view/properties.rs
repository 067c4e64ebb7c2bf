//! The bindable-attribute table of the map view.
//!
//! Declarative hosts bind attributes by name (`<MapboxView zoomLevel="12">`),
//! always delivering raw string or scalar values. Each attribute coerces its
//! value and writes one or two keys into the [`MapConfig`] accumulator; the
//! accumulated object is resolved against the common defaults right before
//! `show`. No range validation happens here: a zoom of 999 flows through for
//! the native SDK to clamp or reject.

use crate::core::config::{defaults, MapConfig};
use crate::{BridgeError, Result};
use serde_json::Value;

/// How a raw attribute value is coerced before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Force-to-number; `"12"` becomes `12.0`.
    Number,
    /// Force-to-number, then truncate toward zero.
    Integer,
    /// Stored as a string.
    Text,
    /// Strict: exactly `true`/`false` or the strings `"true"`/`"false"`.
    Boolean,
}

/// Where a coerced value lands in the configuration accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// One top-level key.
    Key(&'static str),
    /// Both `style` and `mapStyle`, which the native adapters read
    /// interchangeably.
    StyleAndMapStyle,
    /// One field nested under `center`, preserving the other one.
    CenterField(&'static str),
}

/// One bindable attribute.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Whether the attribute starts from the common defaults table.
    has_common_default: bool,
    target: Target,
}

/// Each of the attributes a declarative host may bind.
pub static PROPERTIES: [PropertyDescriptor; 14] = [
    PropertyDescriptor {
        name: "zoomLevel",
        kind: PropertyKind::Number,
        has_common_default: false,
        target: Target::Key("zoomLevel"),
    },
    PropertyDescriptor {
        name: "accessToken",
        kind: PropertyKind::Text,
        has_common_default: false,
        target: Target::Key("accessToken"),
    },
    PropertyDescriptor {
        name: "mapStyle",
        kind: PropertyKind::Text,
        has_common_default: false,
        target: Target::StyleAndMapStyle,
    },
    PropertyDescriptor {
        name: "latitude",
        kind: PropertyKind::Number,
        has_common_default: false,
        target: Target::CenterField("lat"),
    },
    PropertyDescriptor {
        name: "longitude",
        kind: PropertyKind::Number,
        has_common_default: false,
        target: Target::CenterField("lng"),
    },
    PropertyDescriptor {
        name: "showUserLocation",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("showUserLocation"),
    },
    PropertyDescriptor {
        name: "hideLogo",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("hideLogo"),
    },
    PropertyDescriptor {
        name: "hideAttribution",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("hideAttribution"),
    },
    PropertyDescriptor {
        name: "hideCompass",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("hideCompass"),
    },
    PropertyDescriptor {
        name: "disableZoom",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("disableZoom"),
    },
    PropertyDescriptor {
        name: "disableRotation",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("disableRotation"),
    },
    PropertyDescriptor {
        name: "disableScroll",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("disableScroll"),
    },
    PropertyDescriptor {
        name: "disableTilt",
        kind: PropertyKind::Boolean,
        has_common_default: true,
        target: Target::Key("disableTilt"),
    },
    PropertyDescriptor {
        name: "delay",
        kind: PropertyKind::Integer,
        has_common_default: false,
        target: Target::Key("delay"),
    },
];

/// Looks up a bindable attribute by its host-facing name.
pub fn descriptor(name: &str) -> Option<&'static PropertyDescriptor> {
    PROPERTIES.iter().find(|property| property.name == name)
}

/// Coerces `value` for the attribute `name` and stores it in `config`.
pub fn set_property(config: &mut MapConfig, name: &str, value: &Value) -> Result<()> {
    let property = descriptor(name).ok_or_else(|| BridgeError::Property {
        name: name.to_string(),
        reason: "not a bindable attribute".to_string(),
    })?;
    property.set(config, value)
}

impl PropertyDescriptor {
    /// Coerces and stores one value.
    pub fn set(&self, config: &mut MapConfig, value: &Value) -> Result<()> {
        let coerced = match self.kind {
            PropertyKind::Number => Value::from(coerce_number(self.name, value)?),
            PropertyKind::Integer => Value::from(coerce_number(self.name, value)?.trunc() as i64),
            PropertyKind::Text => Value::String(coerce_text(self.name, value)?),
            PropertyKind::Boolean => Value::Bool(coerce_boolean(self.name, value)?),
        };
        match self.target {
            Target::Key(key) => config.set(key, coerced),
            Target::StyleAndMapStyle => {
                config.set("style", coerced.clone());
                config.set("mapStyle", coerced);
            }
            Target::CenterField(field) => config.set_nested("center", field, coerced),
        }
        Ok(())
    }

    /// The attribute's starting value from the common defaults table,
    /// for attributes declared with one.
    pub fn common_default(&self) -> Option<Value> {
        if self.has_common_default {
            defaults().get(self.name).cloned()
        } else {
            None
        }
    }
}

fn coerce_number(name: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(BridgeError::Property {
            name: name.to_string(),
            reason: format!("expected a number, got {}", value),
        }),
    }
}

fn coerce_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(BridgeError::Property {
            name: name.to_string(),
            reason: format!("expected a string, got {}", value),
        }),
    }
}

fn coerce_boolean(name: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(BridgeError::Property {
            name: name.to_string(),
            reason: format!("expected 'true' or 'false', got {}", value),
        }),
    }
}
