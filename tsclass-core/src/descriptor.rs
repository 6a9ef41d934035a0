//! Language-agnostic descriptors for struct types and their fields.
//!
//! Adapters (Rust source parsing, hand-built catalogs) produce these
//! descriptors; code generators consume them without knowing where they
//! came from.

use std::fmt;

/// External name that suppresses a field entirely.
pub const SUPPRESSED: &str = "-";

/// Identity of a struct type.
///
/// The qualified name is the identity key: two references with the same
/// qualified name denote the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    qualified: String,
    name: String,
}

impl TypeRef {
    /// Create a reference from a qualified name such as `models::Person`.
    ///
    /// The bare name is the last `::` segment.
    pub fn new(qualified: impl Into<String>) -> Self {
        let qualified = qualified.into();
        let name = qualified
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .to_string();
        Self { qualified, name }
    }

    /// Qualified name, used as the identity key.
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Bare type name, without any module path.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// Untyped value (e.g. `serde_json::Value`).
    Any,
}

impl Primitive {
    /// Get the Rust spelling of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "String",
            Self::Any => "any",
        }
    }

    /// Parse a Rust primitive spelling. `str` is accepted as `String`.
    pub fn from_ident(ident: &str) -> Option<Self> {
        let primitive = match ident {
            "bool" => Self::Bool,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "i128" => Self::I128,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "usize" => Self::Usize,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "char" => Self::Char,
            "String" | "str" => Self::String,
            _ => return None,
        };
        Some(primitive)
    }

    /// Returns true for every integer and floating point kind.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Bool | Self::Char | Self::String | Self::Any)
    }
}

/// Kind of a field, closed over the shapes the converters understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A primitive value.
    Primitive(Primitive),
    /// A nested struct.
    Struct(TypeRef),
    /// An indirection (`Option`, `Box`, references, ...).
    Pointer(Box<Kind>),
    /// A sequence of elements.
    Slice(Box<Kind>),
    /// A keyed mapping.
    Map { key: Box<Kind>, value: Box<Kind> },
    /// Anything else, carrying the source spelling of the type.
    Opaque(String),
}

impl Kind {
    pub fn primitive(p: Primitive) -> Self {
        Self::Primitive(p)
    }

    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    pub fn bool() -> Self {
        Self::Primitive(Primitive::Bool)
    }

    pub fn i64() -> Self {
        Self::Primitive(Primitive::I64)
    }

    pub fn f64() -> Self {
        Self::Primitive(Primitive::F64)
    }

    pub fn any() -> Self {
        Self::Primitive(Primitive::Any)
    }

    pub fn struct_(qualified: impl Into<String>) -> Self {
        Self::Struct(TypeRef::new(qualified))
    }

    pub fn pointer(inner: Kind) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: Kind) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn map(key: Kind, value: Kind) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn opaque(spelling: impl Into<String>) -> Self {
        Self::Opaque(spelling.into())
    }

    /// Strip every pointer layer.
    pub fn peel(&self) -> &Kind {
        match self {
            Self::Pointer(inner) => inner.peel(),
            other => other,
        }
    }

    /// The referenced struct, looking through pointer layers.
    pub fn as_struct(&self) -> Option<&TypeRef> {
        match self.peel() {
            Self::Struct(ty) => Some(ty),
            _ => None,
        }
    }

    /// Returns true if this is a string, looking through pointer layers.
    pub fn is_string_like(&self) -> bool {
        matches!(self.peel(), Self::Primitive(Primitive::String))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Struct(ty) => write!(f, "{}", ty.name()),
            Self::Pointer(inner) => write!(f, "*{}", inner),
            Self::Slice(inner) => write!(f, "[{}]", inner),
            Self::Map { key, value } => write!(f, "map[{}]{}", key, value),
            Self::Opaque(spelling) => f.write_str(spelling),
        }
    }
}

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared name in the host language.
    pub name: String,
    /// Field kind.
    pub kind: Kind,
    /// Serialization name. Empty or [`SUPPRESSED`] drops the field.
    pub external_name: String,
    /// Explicit target type, bypassing the kind-based mapping.
    pub type_override: Option<String>,
    /// Transform expression with a `__VALUE__` placeholder.
    pub transform: Option<String>,
    /// Fields of this struct are promoted into the enclosing struct.
    pub embedded: bool,
}

impl FieldDescriptor {
    /// Create a field whose external name equals its declared name.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        let name = name.into();
        Self {
            external_name: name.clone(),
            name,
            kind,
            type_override: None,
            transform: None,
            embedded: false,
        }
    }

    /// Create a flattened field. Only struct kinds can be flattened.
    pub fn embedded(name: impl Into<String>, kind: Kind) -> Self {
        let mut field = Self::new(name, kind);
        field.embedded = true;
        field
    }

    /// Set the serialization name.
    pub fn rename(mut self, external_name: impl Into<String>) -> Self {
        self.external_name = external_name.into();
        self
    }

    /// Drop this field from generated output.
    pub fn skip(mut self) -> Self {
        self.external_name = SUPPRESSED.to_string();
        self
    }

    /// Set an explicit target type.
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.type_override = Some(ty.into());
        self
    }

    /// Set a transform expression.
    pub fn with_transform(mut self, expression: impl Into<String>) -> Self {
        self.transform = Some(expression.into());
        self
    }

    /// Returns true if the serialization name drops this field.
    pub fn is_suppressed(&self) -> bool {
        self.external_name.is_empty() || self.external_name == SUPPRESSED
    }
}

/// A struct type with its (flattened) fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub ty: TypeRef,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(qualified: impl Into<String>) -> Self {
        Self {
            ty: TypeRef::new(qualified),
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Bare type name.
    pub fn name(&self) -> &str {
        self.ty.name()
    }
}
