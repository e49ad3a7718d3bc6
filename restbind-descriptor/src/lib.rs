//! API description loading and generator configuration for restbind.
//!
//! The description is a JSON dump of the server's schema and endpoint
//! metadata; it is deserialized into the typed records of [`model`] and
//! exposes the derived views a generator needs (enums, endpoint groups,
//! schema index). [`Config`] is the optional `restbind.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod description;
mod error;
pub mod model;

pub use config::{Config, JavaConfig};
pub use description::ApiDescription;
pub use error::{Error, Result};
pub use model::{
    Direction, EndpointDescriptor, EnumDescriptor, FieldDescriptor, SchemaDescriptor,
};
