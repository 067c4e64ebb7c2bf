//! The platform-adapter contract: capability traits, callback aliases,
//! and the opaque handles that stand in for native objects.

pub mod adapter;
pub mod events;
pub mod handle;

pub use adapter::{MapboxApi, MapboxCommonApi};
pub use events::{
    CoordinateCallback, EventCallback, MapReadyCallback, OptionalCoordinateCallback,
    PlainCallback,
};
pub use handle::{NativeMapHandle, PlatformHandle};
