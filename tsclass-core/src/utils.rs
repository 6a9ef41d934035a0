//! Identifier case conversion, following serde's `rename_all` rules.

/// Convert a snake_case string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a snake_case string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a snake_case string to kebab-case (e.g., "hello_world" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    s.replace('_', "-")
}

/// A container-level rename rule (`#[serde(rename_all = "...")]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    /// Parse serde's spelling of a rule.
    pub fn from_serde(rule: &str) -> Option<Self> {
        let rule = match rule {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            _ => return None,
        };
        Some(rule)
    }

    /// Apply the rule to a snake_case field name.
    ///
    /// Field names are assumed to already be snake_case, so `lowercase` and
    /// `snake_case` leave them untouched, as serde does.
    pub fn apply(&self, field: &str) -> String {
        match self {
            Self::Lower | Self::Snake => field.to_string(),
            Self::Upper | Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Pascal => to_pascal_case(field),
            Self::Camel => to_camel_case(field),
            Self::Kebab => to_kebab_case(field),
            Self::ScreamingKebab => to_kebab_case(&field.to_ascii_uppercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello"), "hello");
        assert_eq!(to_camel_case("created_at"), "createdAt");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_rename_rules() {
        let cases = [
            ("lowercase", "user_id"),
            ("UPPERCASE", "USER_ID"),
            ("PascalCase", "UserId"),
            ("camelCase", "userId"),
            ("snake_case", "user_id"),
            ("SCREAMING_SNAKE_CASE", "USER_ID"),
            ("kebab-case", "user-id"),
            ("SCREAMING-KEBAB-CASE", "USER-ID"),
        ];
        for (rule, expected) in cases {
            let rule = RenameRule::from_serde(rule).unwrap();
            assert_eq!(rule.apply("user_id"), expected);
        }
    }

    #[test]
    fn test_lowercase_rules_keep_field_as_written() {
        assert_eq!(RenameRule::Lower.apply("userID"), "userID");
        assert_eq!(RenameRule::Snake.apply("userID"), "userID");
        assert_eq!(RenameRule::Kebab.apply("user_ID"), "user-ID");
        assert_eq!(RenameRule::Upper.apply("userID"), "USERID");
    }

    #[test]
    fn test_unknown_rule() {
        assert_eq!(RenameRule::from_serde("Title Case"), None);
    }
}
