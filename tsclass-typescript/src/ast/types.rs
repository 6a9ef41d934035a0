//! TypeScript type expressions.

use std::fmt;

/// A TypeScript type as it appears in a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// A named type (`string`, `Address`, ...).
    Named(String),
    /// An array (`T[]`).
    Array(Box<TsType>),
    /// A string-indexed dictionary (`{[key: string]: T}`).
    Dictionary(Box<TsType>),
}

impl TsType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn array(inner: TsType) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn dictionary(inner: TsType) -> Self {
        Self::Dictionary(Box::new(inner))
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Array(inner) => write!(f, "{}[]", inner),
            Self::Dictionary(inner) => write!(f, "{{[key: string]: {}}}", inner),
        }
    }
}
