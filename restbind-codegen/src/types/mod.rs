//! Translation of raw descriptor type tokens into target-language types.
//!
//! - [`TypeMap`] - Primitive token table with per-target overrides
//! - [`TypeSyntax`] - How a target spells arrays, maps and key references
//! - [`TypeTranslator`] - The translation rules, parameterised by a syntax

mod translator;
mod type_map;

pub use translator::{TypeSyntax, TypeTranslator, UnmappedType};
pub use type_map::TypeMap;
