use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading struct declarations from Rust source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("invalid attribute on `{item}` in '{}': {source}", path.display())]
    Attribute {
        path: PathBuf,
        item: String,
        #[source]
        source: syn::Error,
    },

    #[error("struct `{name}` is declared in both '{}' and '{}'", first.display(), second.display())]
    DuplicateStruct {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl Error {
    /// The source file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Attribute { path, .. } => {
                path
            }
            Self::DuplicateStruct { second, .. } => second,
        }
    }
}
