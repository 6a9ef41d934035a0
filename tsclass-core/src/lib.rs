//! Core types for the tsclass transpiler.
//!
//! This crate provides the language-agnostic descriptor model that every
//! other crate works with, plus the [`TypeSource`] seam through which host
//! language metadata reaches the converters.

mod descriptor;
mod file;
mod source;
mod type_mapper;
mod utils;

// Descriptor model
pub use descriptor::{FieldDescriptor, Kind, Primitive, SUPPRESSED, TypeDescriptor, TypeRef};
// File operations
pub use file::{File, WriteResult, backup};
// Type sources
pub use source::{Catalog, DescribeError, TypeSource};
// Type mapping
pub use type_mapper::TypeMapper;
// String utilities
pub use utils::{RenameRule, to_camel_case, to_kebab_case, to_pascal_case};
