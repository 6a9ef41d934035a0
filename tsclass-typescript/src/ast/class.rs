//! TypeScript class builder with a `createFrom` factory deserializer.

use tsclass_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use super::TsType;
use crate::{custom_code::END_MARKER, naming};

/// Placeholder replaced by the source value in transform expressions.
pub const VALUE_PLACEHOLDER: &str = "__VALUE__";

/// A field declaration in a TypeScript class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassField {
    /// Property name, i.e. the serialization name.
    pub name: String,
    pub ty: TsType,
}

impl ClassField {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    fn to_line(&self) -> String {
        format!("{}: {};", naming::property(&self.name), self.ty)
    }
}

/// One deserialization statement inside `createFrom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `result.f = source['f'];`
    PassThrough { name: String },
    /// `result.f = <expression>;` with the placeholder replaced by `source['f']`.
    Transform { name: String, expression: String },
    /// Delegate to the nested class when the value is present.
    Nested { name: String, class: String },
    /// Delegate every element to the nested class. With `nullable`, a
    /// missing element stays `null`.
    NestedArray {
        name: String,
        class: String,
        nullable: bool,
    },
    /// Delegate every map value to the nested class. With `nullable`, a
    /// missing value stays `null`.
    NestedMap {
        name: String,
        class: String,
        nullable: bool,
    },
}

impl Statement {
    pub fn pass_through(name: impl Into<String>) -> Self {
        Self::PassThrough { name: name.into() }
    }

    pub fn transform(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::Transform {
            name: name.into(),
            expression: expression.into(),
        }
    }

    pub fn nested(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Nested {
            name: name.into(),
            class: class.into(),
        }
    }

    pub fn nested_array(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::NestedArray {
            name: name.into(),
            class: class.into(),
            nullable: false,
        }
    }

    pub fn nested_map(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::NestedMap {
            name: name.into(),
            class: class.into(),
            nullable: false,
        }
    }

    /// Guard container elements against `null` before delegating.
    ///
    /// Only affects [`NestedArray`](Self::NestedArray) and
    /// [`NestedMap`](Self::NestedMap).
    pub fn with_nullable_elements(mut self) -> Self {
        if let Self::NestedArray { nullable, .. } | Self::NestedMap { nullable, .. } = &mut self {
            *nullable = true;
        }
        self
    }

    /// The property this statement assigns.
    pub fn name(&self) -> &str {
        match self {
            Self::PassThrough { name }
            | Self::Transform { name, .. }
            | Self::Nested { name, .. }
            | Self::NestedArray { name, .. }
            | Self::NestedMap { name, .. } => name,
        }
    }
}

impl Renderable for Statement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = naming::member("result", self.name());
        let value = naming::index("source", self.name());

        let line = match self {
            Self::PassThrough { .. } => format!("{} = {};", target, value),
            Self::Transform { expression, .. } => {
                format!("{} = {};", target, expression.replace(VALUE_PLACEHOLDER, &value))
            }
            Self::Nested { class, .. } => {
                format!(
                    "{} = {} ? {}.createFrom({}) : null;",
                    target, value, class, value
                )
            }
            Self::NestedArray {
                class, nullable, ..
            } => format!(
                "{} = {} ? {}.map(function(element) {{ return {}; }}) : null;",
                target,
                value,
                value,
                create_from(class, "element", *nullable)
            ),
            Self::NestedMap {
                class, nullable, ..
            } => {
                return vec![CodeFragment::block(
                    format!("if ({}) {{", value),
                    vec![
                        CodeFragment::line(format!("{} = {{}};", target)),
                        CodeFragment::line(format!(
                            "for (const key in {}) {}[key] = {};",
                            value,
                            target,
                            create_from(class, &format!("{}[key]", value), *nullable)
                        )),
                    ],
                    "}",
                )];
            }
        };
        vec![CodeFragment::Line(line)]
    }
}

/// `C.createFrom(v)`, or `v ? C.createFrom(v) : null` when `v` may be missing.
fn create_from(class: &str, value: &str, nullable: bool) -> String {
    if nullable {
        format!("{} ? {}.createFrom({}) : null", value, class, value)
    } else {
        format!("{}.createFrom({})", class, value)
    }
}

/// Builder for one generated TypeScript class.
///
/// Fields and statements accumulate in call order and are rendered only by
/// [`build`](Self::build) or through [`Renderable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    name: String,
    fields: Vec<ClassField>,
    statements: Vec<Statement>,
    exported: bool,
    factory: bool,
    custom_code: Option<String>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            statements: Vec::new(),
            exported: true,
            factory: true,
            custom_code: None,
        }
    }

    /// Add a field declaration and its deserialization statement.
    pub fn push(&mut self, field: ClassField, statement: Statement) {
        self.fields.push(field);
        self.statements.push(statement);
    }

    /// Builder-style [`push`](Self::push).
    pub fn field(mut self, field: ClassField, statement: Statement) -> Self {
        self.push(field, statement);
        self
    }

    /// Make this class private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Omit the `createFrom` factory.
    pub fn without_factory(mut self) -> Self {
        self.factory = false;
        self
    }

    /// Emit a custom-code section holding `code`.
    pub fn custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ClassField] {
        &self.fields
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Start marker of this class's custom-code section.
    pub fn custom_code_marker(&self) -> String {
        format!("//[{}:]", self.name)
    }

    /// Build the class as a string.
    pub fn build(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }

    fn factory_fragment(&self) -> CodeFragment {
        let mut body = vec![
            CodeFragment::line("if ('string' === typeof source) source = JSON.parse(source);"),
            CodeFragment::line(format!("const result = new {}();", self.name)),
        ];
        body.extend(self.statements.iter().flat_map(Renderable::to_fragments));
        body.push(CodeFragment::line("return result;"));
        CodeFragment::block("static createFrom(source: any) {", body, "}")
    }

    fn custom_code_fragments(&self, code: &str) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line(self.custom_code_marker())];
        if !code.is_empty() {
            fragments.push(CodeFragment::raw(format!("{}\n", code)));
        }
        fragments.push(CodeFragment::blank());
        fragments.push(CodeFragment::line(END_MARKER));
        fragments
    }
}

impl Renderable for ClassSpec {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        let mut body: Vec<CodeFragment> = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(field.to_line()))
            .collect();

        if self.factory {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.push(self.factory_fragment());
        }

        if let Some(code) = &self.custom_code {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(self.custom_code_fragments(code));
        }

        vec![CodeFragment::block(
            format!("{}class {} {{", export, self.name),
            body,
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(statement: &Statement) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(statement);
        builder.build()
    }

    #[test]
    fn test_empty_class() {
        let class = ClassSpec::new("Empty").without_factory();
        assert_eq!(class.build(Indent::FOUR), "export class Empty {\n}\n");
    }

    #[test]
    fn test_class_with_fields() {
        let class = ClassSpec::new("Address")
            .field(
                ClassField::new("street", TsType::named("string")),
                Statement::pass_through("street"),
            )
            .field(
                ClassField::new("zip", TsType::named("number")),
                Statement::pass_through("zip"),
            );

        assert_eq!(
            class.build(Indent::FOUR),
            "export class Address {\n    street: string;\n    zip: number;\n\n    static createFrom(source: any) {\n        if ('string' === typeof source) source = JSON.parse(source);\n        const result = new Address();\n        result.street = source['street'];\n        result.zip = source['zip'];\n        return result;\n    }\n}\n"
        );
    }

    #[test]
    fn test_private_class_without_factory() {
        let class = ClassSpec::new("Point")
            .private()
            .without_factory()
            .field(
                ClassField::new("x", TsType::named("number")),
                Statement::pass_through("x"),
            );
        assert_eq!(
            class.build(Indent::TWO),
            "class Point {\n  x: number;\n}\n"
        );
    }

    #[test]
    fn test_custom_code_section() {
        let class = ClassSpec::new("Tag")
            .without_factory()
            .custom_code("    get upper() { return 1; }");
        assert_eq!(
            class.build(Indent::FOUR),
            "export class Tag {\n    //[Tag:]\n    get upper() { return 1; }\n\n    //[end]\n}\n"
        );

        let empty = ClassSpec::new("Tag").without_factory().custom_code("");
        assert_eq!(
            empty.build(Indent::FOUR),
            "export class Tag {\n    //[Tag:]\n\n    //[end]\n}\n"
        );
    }

    #[test]
    fn test_quoted_property_names() {
        let class = ClassSpec::new("Person").field(
            ClassField::new("first-name", TsType::named("string")),
            Statement::pass_through("first-name"),
        );
        let code = class.build(Indent::FOUR);
        assert!(code.contains("    'first-name': string;\n"));
        assert!(code.contains("result['first-name'] = source['first-name'];"));
    }

    #[test]
    fn test_transform_statement() {
        let statement = Statement::transform("created", "new Date(__VALUE__)");
        assert_eq!(
            render(&statement),
            "result.created = new Date(source['created']);\n"
        );
    }

    #[test]
    fn test_nested_statements() {
        assert_eq!(
            render(&Statement::nested("home", "Address")),
            "result.home = source['home'] ? Address.createFrom(source['home']) : null;\n"
        );
        assert_eq!(
            render(&Statement::nested_array("tags", "Tag")),
            "result.tags = source['tags'] ? source['tags'].map(function(element) { return Tag.createFrom(element); }) : null;\n"
        );
        assert_eq!(
            render(&Statement::nested_map("offices", "Address")),
            "if (source['offices']) {\n    result.offices = {};\n    for (const key in source['offices']) result.offices[key] = Address.createFrom(source['offices'][key]);\n}\n"
        );
    }

    #[test]
    fn test_nullable_elements_are_guarded() {
        assert_eq!(
            render(&Statement::nested_array("tags", "Tag").with_nullable_elements()),
            "result.tags = source['tags'] ? source['tags'].map(function(element) { return element ? Tag.createFrom(element) : null; }) : null;\n"
        );
        assert_eq!(
            render(&Statement::nested_map("offices", "Address").with_nullable_elements()),
            "if (source['offices']) {\n    result.offices = {};\n    for (const key in source['offices']) result.offices[key] = source['offices'][key] ? Address.createFrom(source['offices'][key]) : null;\n}\n"
        );
        assert_eq!(
            Statement::nested("home", "Address").with_nullable_elements(),
            Statement::nested("home", "Address")
        );
    }
}
