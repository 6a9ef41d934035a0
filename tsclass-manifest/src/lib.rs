//! Configuration for the tsclass transpiler.
//!
//! Parses and validates `tsclass.toml`, reporting problems as [`miette`]
//! diagnostics that point into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{IndentValue, InputConfig, Manifest, OutputConfig, ParseContext};
