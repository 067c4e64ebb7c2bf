//! The host-facing view layer: the dispatch bridge and the
//! bindable-attribute table feeding its configuration.

pub mod bridge;
pub mod properties;

pub use bridge::MapboxView;
pub use properties::{set_property, PropertyDescriptor, PropertyKind, PROPERTIES};
