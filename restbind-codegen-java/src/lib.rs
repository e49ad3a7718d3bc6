//! Java client bindings for restbind.
//!
//! Emits one Gson data class per schema, one enum per enumerated type and
//! one Retrofit interface per endpoint group, optionally followed by a
//! client facade class.
//!
//! # Example
//!
//! ```ignore
//! use restbind_codegen_java::{Generator, LanguageCodegen};
//!
//! let generator = Generator::new(&api, config.java);
//! let result = generator.generate(Path::new("src/main/java"))?;
//! ```

mod generator;
mod java_file;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;
pub mod literal;

pub use generator::Generator;
pub use java_file::{GENERATED_BY, JavaFile};
pub use naming::JAVA_NAMING;
pub use restbind_codegen::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
pub use type_mapper::{JavaContext, JavaTypeSyntax, JavaTypeTranslator};
