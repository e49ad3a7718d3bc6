//! Core operations.
//!
//! This module contains the business logic for restbind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod info;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use info::info;

use restbind_codegen::ArtifactKind;

/// Artifact kinds in report order.
pub const KINDS: [ArtifactKind; 4] = [
    ArtifactKind::Schema,
    ArtifactKind::Enum,
    ArtifactKind::Proxy,
    ArtifactKind::Client,
];
