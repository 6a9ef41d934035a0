//! TypeScript class generator for the tsclass transpiler.
//!
//! Converts struct descriptors from any [`TypeSource`](tsclass_core::TypeSource)
//! into TypeScript classes with a `static createFrom` factory that rebuilds
//! nested instances from parsed JSON.
//!
//! # Usage
//!
//! ```
//! use tsclass_core::{Catalog, FieldDescriptor, Kind, TypeDescriptor, TypeRef};
//! use tsclass_typescript::Generator;
//!
//! let catalog = Catalog::new()
//!     .with(
//!         TypeDescriptor::new("Person")
//!             .field(FieldDescriptor::new("name", Kind::string()))
//!             .field(FieldDescriptor::new("home", Kind::struct_("Address"))),
//!     )
//!     .with(TypeDescriptor::new("Address").field(FieldDescriptor::new("city", Kind::string())));
//!
//! let code = Generator::new(catalog)
//!     .add(TypeRef::new("Person"))
//!     .convert(None)?;
//!
//! assert!(code.starts_with("export class Address {"));
//! assert!(code.contains("result.home = source['home'] ? Address.createFrom(source['home']) : null;"));
//! # Ok::<(), tsclass_typescript::ConvertError>(())
//! ```
//!
//! # Generated Output
//!
//! - one class per distinct struct type reachable from the roots
//! - nested classes before the classes that use them
//! - optional `//[<Class>:]` ... `//[end]` sections preserved across runs

mod code_file;
mod custom_code;
mod engine;
mod error;
mod field;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use ast::{ClassField, ClassSpec, Statement, TsType};
pub use code_file::{CodeFile, GENERATED_HEADER};
pub use custom_code::{CustomCode, END_MARKER};
pub use engine::{ConversionRun, Converter};
pub use error::ConvertError;
pub use field::{ConvertedField, convert_field};
pub use generator::{GenerateResult, Generator, Options, RenderedFile};
pub use naming::{entity_name, is_identifier};
pub use type_mapper::TypeScriptTypeMapper;
