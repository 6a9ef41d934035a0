//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the default for generated classes.
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation (prettier's default for TypeScript).
    pub const TWO: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_string(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
