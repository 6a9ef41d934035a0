//! TypeScript AST builders for generated classes.
//!
//! These provide a structured representation of the classes produced by the
//! conversion engine, which is rendered via CodeBuilder only at the end.

mod class;
mod types;

pub use class::{ClassField, ClassSpec, Statement, VALUE_PLACEHOLDER};
pub use types::TsType;
