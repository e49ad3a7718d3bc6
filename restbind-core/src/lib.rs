//! Core utilities for the restbind client generator.
//!
//! This crate provides the file-writing layer and the string utilities
//! shared by every target language.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult, write_file};
// String utilities
pub use utils::{capitalize, package_to_path, to_camel_case};
