use thiserror::Error;
use tsclass_core::DescribeError;

/// Errors raised while converting struct types to TypeScript classes.
///
/// Any error aborts the whole conversion; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("no TypeScript type for `{kind}`")]
    UnsupportedFieldType { kind: String },

    #[error("no TypeScript type for element type `{kind}`")]
    UnsupportedElementType { kind: String },

    #[error("map keys must be strings, found `{kind}`")]
    UnsupportedKeyType { kind: String },

    #[error("empty class name for `{type_name}`")]
    EmptyEntityName { type_name: String },

    #[error("cannot convert field `{field}` of `{type_name}`")]
    PropagatedFieldError {
        type_name: String,
        field: String,
        #[source]
        source: Box<ConvertError>,
    },

    #[error(transparent)]
    Describe(#[from] DescribeError),
}

impl ConvertError {
    /// The innermost error, looking through field attribution.
    pub fn root_cause(&self) -> &ConvertError {
        match self {
            Self::PropagatedFieldError { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Dotted path of the fields leading to the root cause,
    /// e.g. `Person.home` then `Address.zip` gives `["Person.home", "Address.zip"]`.
    pub fn field_path(&self) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::PropagatedFieldError {
            type_name,
            field,
            source,
        } = current
        {
            path.push(format!("{}.{}", type_name, field));
            current = source;
        }
        path
    }
}
