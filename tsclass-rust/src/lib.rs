//! Rust source adapter for the tsclass transpiler.
//!
//! Parses `.rs` files with [`syn`] and describes every non-generic struct
//! with named fields as a [`TypeDescriptor`](tsclass_core::TypeDescriptor),
//! honouring serde's `rename`, `rename_all`, `skip` and `flatten` attributes
//! as well as `#[ts(type = "...")]` and `#[ts(transform = "...")]`.
//!
//! Type spellings map onto field kinds as follows:
//!
//! - `bool`, integers, floats, `char`, `String` and `str` are primitives
//! - `serde_json::Value` is an untyped value
//! - `Option`, `Box`, `Rc`, `Arc`, `Cow` and references are pointers
//! - `Vec`, `VecDeque`, sets, slices and arrays are sequences
//! - `HashMap`, `BTreeMap` and `IndexMap` are maps
//! - anything else is opaque unless it names a parsed struct

mod attrs;
mod error;
mod source;
mod types;

pub use error::{Error, Result};
pub use source::RustSource;
