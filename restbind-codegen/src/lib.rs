//! Shared code generation utilities for the restbind client generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `restbind-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`types`] - Type translation (TypeMap, TypeTranslator, TypeSyntax)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`text`] - Help text wrapping for doc comments

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod artifact;
pub mod builder;
mod error;
pub mod language;
pub mod text;
pub mod types;

pub use artifact::{Artifact, ArtifactFailure, ArtifactKind};
pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::{Error, Result};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, Preview, PreviewFile};
pub use types::{TypeMap, TypeSyntax, TypeTranslator, UnmappedType};
