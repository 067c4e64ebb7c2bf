use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token for a native map-view instance.
///
/// Minted by a platform adapter and handed back to it on every
/// view-scoped call; nothing in this crate inspects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeMapHandle(u64);

impl NativeMapHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NativeMapHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map-view#{}", self.0)
    }
}

/// Opaque token for any other host-platform object, like an Android
/// activity context or a parent view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformHandle(u64);

impl PlatformHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlatformHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_round_trip() {
        let handle = NativeMapHandle::from_raw(42);
        assert_eq!(handle.into_raw(), 42);
        assert_eq!(handle, NativeMapHandle::from_raw(42));
    }

    #[test]
    fn test_transparent_serialization() {
        let handle = PlatformHandle::from_raw(7);
        assert_eq!(serde_json::to_value(handle).unwrap(), 7);
    }
}
