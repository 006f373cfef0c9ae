//! Enumerations and data transfer objects of the Square API.
//!
//! - [`enums`] - token vocabularies, one `wire_enum!` per API enum
//! - [`models`] - request, response and resource objects
//! - [`registry`] - lookup of models and enums by name
//!
//! Encoding rules and presence types live in [`square_core`].
#![deny(unused_crate_dependencies)]

#[deny(missing_docs)]
pub mod enums;
pub mod models;
pub mod registry;

pub use registry::{EnumDescriptor, ModelDescriptor, all_enums, all_models, find_enum, find_model};
