//! Runtime support for Square API models.
//!
//! - [`Nullable`] - three-state presence for optional fields that accept `null`
//! - [`wire_enum!`] / [`WireEnum`] - token enums with an `Unrecognized` escape
//! - [`Model`] and [`wire`] - serialization to and from the JSON wire form
//! - [`WireSettings`] - encoding options loaded from the environment
//! - [`time`] - typed access to timestamp strings
#![deny(unused_crate_dependencies)]

pub mod enums;
pub mod error;
pub mod model;
pub mod nullable;
pub mod settings;
pub mod time;
pub mod wire;

pub use enums::{UnrecognizedToken, WireEnum};
pub use error::WireError;
pub use model::Model;
pub use nullable::Nullable;
pub use settings::{SettingsError, WireSettings, WireSettingsUpdate};
pub use wire::{Decoded, EmptyAs, RoundTrip, decode, from_wire, round_trip, to_wire_map, to_wire_string, to_wire_value};

// Used by the exported macros.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}
