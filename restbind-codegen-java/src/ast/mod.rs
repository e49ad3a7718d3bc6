//! Java source building blocks.

mod doc;
mod field;
mod method;

pub use doc::{JavaDoc, LineComment};
pub use field::JavaField;
pub use method::{InterfaceMethod, Param};
