//! The `Model` trait implemented by every DTO.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::WireError;
use crate::wire::{self, EmptyAs};

/// A wire-format JSON object of the Square API.
///
/// Implementations only name the type; encoding comes from the serde
/// derives on the struct.
pub trait Model: Serialize + DeserializeOwned {
    /// Type name as used by the API reference.
    const NAME: &'static str;

    /// Ordered mapping of wire field name to value.
    fn to_wire_map(&self) -> Result<Map<String, Value>, WireError> {
        wire::to_wire_map(self)
    }

    /// Wire value, with an empty mapping written per `empty_as`.
    fn to_wire(&self, empty_as: EmptyAs) -> Result<Value, WireError> {
        wire::to_wire_value(self, empty_as)
    }

    /// Parse from a wire payload; unrecognized enum tokens pass through.
    fn from_wire(input: &str) -> Result<Self, WireError> {
        wire::from_wire(input)
    }
}

/// Implement [`Model`] for a list of types, using each type's own name.
#[macro_export]
macro_rules! impl_model {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::Model for $ty {
                const NAME: &'static str = ::std::stringify!($ty);
            }
        )+
    };
}
