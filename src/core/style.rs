use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predefined Mapbox map styles, plus `Custom` for full style URLs
/// (e.g. `mapbox://styles/yourname/yourstyle`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum MapStyle {
    Dark,
    Outdoors,
    Light,
    Satellite,
    SatelliteStreets,
    Streets,
    TrafficDay,
    TrafficNight,
    Custom(String),
}

impl MapStyle {
    /// The wire form the native SDKs and the config accumulator use.
    pub fn as_str(&self) -> &str {
        match self {
            MapStyle::Dark => "dark",
            MapStyle::Outdoors => "outdoors",
            MapStyle::Light => "light",
            MapStyle::Satellite => "satellite",
            MapStyle::SatelliteStreets => "satellite_streets",
            MapStyle::Streets => "streets",
            MapStyle::TrafficDay => "traffic_day",
            MapStyle::TrafficNight => "traffic_night",
            MapStyle::Custom(url) => url,
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        MapStyle::Streets
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Custom`, so style URLs parse as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "dark" => MapStyle::Dark,
            "outdoors" => MapStyle::Outdoors,
            "light" => MapStyle::Light,
            "satellite" => MapStyle::Satellite,
            "satellite_streets" => MapStyle::SatelliteStreets,
            "streets" => MapStyle::Streets,
            "traffic_day" => MapStyle::TrafficDay,
            "traffic_night" => MapStyle::TrafficNight,
            other => MapStyle::Custom(other.to_string()),
        })
    }
}

impl From<String> for MapStyle {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(MapStyle::Streets)
    }
}

impl From<MapStyle> for String {
    fn from(value: MapStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Camera behavior while the user-location component is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserLocationCameraMode {
    /// The camera does not follow the user.
    #[default]
    None,
    NoneCompass,
    NoneGps,
    Tracking,
    TrackCompass,
    TrackingGps,
    TrackGpsNorth,
}

impl UserLocationCameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserLocationCameraMode::None => "NONE",
            UserLocationCameraMode::NoneCompass => "NONE_COMPASS",
            UserLocationCameraMode::NoneGps => "NONE_GPS",
            UserLocationCameraMode::Tracking => "TRACKING",
            UserLocationCameraMode::TrackCompass => "TRACK_COMPASS",
            UserLocationCameraMode::TrackingGps => "TRACKING_GPS",
            UserLocationCameraMode::TrackGpsNorth => "TRACK_GPS_NORTH",
        }
    }
}

impl fmt::Display for UserLocationCameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserLocationCameraMode {
    type Err = crate::BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "NONE" => UserLocationCameraMode::None,
            "NONE_COMPASS" => UserLocationCameraMode::NoneCompass,
            "NONE_GPS" => UserLocationCameraMode::NoneGps,
            "TRACKING" => UserLocationCameraMode::Tracking,
            "TRACK_COMPASS" => UserLocationCameraMode::TrackCompass,
            "TRACKING_GPS" => UserLocationCameraMode::TrackingGps,
            "TRACK_GPS_NORTH" => UserLocationCameraMode::TrackGpsNorth,
            other => {
                return Err(crate::BridgeError::Property {
                    name: "cameraMode".to_string(),
                    reason: format!("unknown camera mode '{other}'"),
                })
            }
        })
    }
}

/// How the user-location puck is drawn by the native SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserLocationRenderMode {
    #[default]
    Normal,
    Compass,
    Gps,
}

impl UserLocationRenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserLocationRenderMode::Normal => "NORMAL",
            UserLocationRenderMode::Compass => "COMPASS",
            UserLocationRenderMode::Gps => "GPS",
        }
    }
}

impl fmt::Display for UserLocationRenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_string_round_trip() {
        for style in [
            MapStyle::Dark,
            MapStyle::Outdoors,
            MapStyle::Light,
            MapStyle::Satellite,
            MapStyle::SatelliteStreets,
            MapStyle::Streets,
            MapStyle::TrafficDay,
            MapStyle::TrafficNight,
        ] {
            let parsed: MapStyle = style.as_str().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_unknown_style_becomes_custom() {
        let style: MapStyle = "mapbox://styles/acme/runs".parse().unwrap();
        assert_eq!(
            style,
            MapStyle::Custom("mapbox://styles/acme/runs".to_string())
        );
        assert_eq!(style.as_str(), "mapbox://styles/acme/runs");
    }

    #[test]
    fn test_style_serde_as_string() {
        let json = serde_json::to_value(MapStyle::SatelliteStreets).unwrap();
        assert_eq!(json, serde_json::json!("satellite_streets"));
        let back: MapStyle = serde_json::from_value(json).unwrap();
        assert_eq!(back, MapStyle::SatelliteStreets);
    }

    #[test]
    fn test_camera_mode_round_trip() {
        let mode: UserLocationCameraMode = "TRACK_GPS_NORTH".parse().unwrap();
        assert_eq!(mode, UserLocationCameraMode::TrackGpsNorth);
        assert_eq!(mode.as_str(), "TRACK_GPS_NORTH");
        assert!("SIDEWAYS".parse::<UserLocationCameraMode>().is_err());
    }

    #[test]
    fn test_camera_mode_serde() {
        let json = serde_json::to_value(UserLocationCameraMode::TrackingGps).unwrap();
        assert_eq!(json, serde_json::json!("TRACKING_GPS"));
    }
}
