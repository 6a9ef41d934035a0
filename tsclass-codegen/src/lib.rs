//! Shared code generation utilities for the tsclass transpiler.
//!
//! This crate provides language-agnostic building blocks used by the
//! target-language generators (e.g., `tsclass-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
