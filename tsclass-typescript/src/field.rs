//! Conversion of one struct field into a declaration and a statement.

use tsclass_core::{FieldDescriptor, Kind, TypeMapper};

use crate::{
    ast::{ClassField, ClassSpec, Statement, TsType},
    engine::{ConversionRun, Converter},
    error::ConvertError,
};

/// Result of converting one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedField {
    pub field: ClassField,
    pub statement: Statement,
    /// Classes for struct types first reached through this field.
    pub nested: Vec<ClassSpec>,
}

impl ConvertedField {
    fn scalar(field: ClassField, statement: Statement) -> Self {
        Self {
            field,
            statement,
            nested: Vec::new(),
        }
    }
}

/// Convert a field, or return `None` when the field is suppressed.
///
/// The first matching rule wins: suppression, transform, nested struct,
/// map, slice, then plain scalar.
pub fn convert_field(
    converter: &Converter<'_>,
    field: &FieldDescriptor,
    run: &mut ConversionRun,
) -> Result<Option<ConvertedField>, ConvertError> {
    if field.is_suppressed() {
        return Ok(None);
    }
    let name = field.external_name.as_str();

    if let Some(expression) = &field.transform {
        let ty = scalar_type(converter, field)?;
        return Ok(Some(ConvertedField::scalar(
            ClassField::new(name, ty),
            Statement::transform(name, expression.as_str()),
        )));
    }

    let converted = match field.kind.peel() {
        Kind::Struct(ty) => {
            let (class, nested) = converter.convert_nested(ty, run)?;
            ConvertedField {
                field: ClassField::new(name, TsType::named(class.as_str())),
                statement: Statement::nested(name, class),
                nested,
            }
        }
        Kind::Map { key, value } => {
            if !key.is_string_like() {
                return Err(ConvertError::UnsupportedKeyType {
                    kind: key.to_string(),
                });
            }
            match value.as_struct() {
                Some(ty) => {
                    let (class, nested) = converter.convert_nested(ty, run)?;
                    ConvertedField {
                        field: ClassField::new(
                            name,
                            TsType::dictionary(TsType::named(class.as_str())),
                        ),
                        statement: container_statement(Statement::nested_map(name, class), value),
                        nested,
                    }
                }
                None => ConvertedField::scalar(
                    ClassField::new(name, TsType::dictionary(element_type(converter, value)?)),
                    Statement::pass_through(name),
                ),
            }
        }
        Kind::Slice(element) => match element.as_struct() {
            Some(ty) => {
                let (class, nested) = converter.convert_nested(ty, run)?;
                ConvertedField {
                    field: ClassField::new(name, TsType::array(TsType::named(class.as_str()))),
                    statement: container_statement(Statement::nested_array(name, class), element),
                    nested,
                }
            }
            None => ConvertedField::scalar(
                ClassField::new(name, TsType::array(element_type(converter, element)?)),
                Statement::pass_through(name),
            ),
        },
        _ => ConvertedField::scalar(
            ClassField::new(name, scalar_type(converter, field)?),
            Statement::pass_through(name),
        ),
    };

    Ok(Some(converted))
}

/// Guard the elements of a container whose element kind may be absent.
fn container_statement(statement: Statement, element: &Kind) -> Statement {
    match element {
        Kind::Pointer(_) => statement.with_nullable_elements(),
        _ => statement,
    }
}

/// Declared type of a scalar field: the override, else the default mapping.
fn scalar_type(converter: &Converter<'_>, field: &FieldDescriptor) -> Result<TsType, ConvertError> {
    if let Some(ty) = field.type_override.as_deref().filter(|ty| !ty.is_empty()) {
        return Ok(TsType::named(ty));
    }
    converter
        .mapper()
        .map_kind(&field.kind)
        .map(TsType::Named)
        .ok_or_else(|| ConvertError::UnsupportedFieldType {
            kind: field.kind.to_string(),
        })
}

/// Type of a container element, which must be a scalar.
fn element_type(converter: &Converter<'_>, element: &Kind) -> Result<TsType, ConvertError> {
    converter
        .mapper()
        .map_kind(element)
        .map(TsType::Named)
        .ok_or_else(|| ConvertError::UnsupportedElementType {
            kind: element.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use tsclass_core::{Catalog, Primitive, TypeDescriptor};

    use super::*;
    use crate::{generator::Options, type_mapper::TypeScriptTypeMapper};

    fn convert(catalog: &Catalog, field: FieldDescriptor) -> Result<Option<ConvertedField>, ConvertError> {
        let options = Options::default();
        let mapper = TypeScriptTypeMapper::new();
        let converter = Converter::new(catalog, &options, &mapper);
        convert_field(&converter, &field, &mut ConversionRun::new())
    }

    fn catalog() -> Catalog {
        Catalog::new().with(
            TypeDescriptor::new("Address")
                .field(FieldDescriptor::new("street", Kind::string())),
        )
    }

    #[test]
    fn test_suppressed_field() {
        let field = FieldDescriptor::new("secret", Kind::string()).skip();
        assert_eq!(convert(&catalog(), field).unwrap(), None);

        let field = FieldDescriptor::new("secret", Kind::string()).rename("");
        assert_eq!(convert(&catalog(), field).unwrap(), None);
    }

    #[test]
    fn test_scalar_field() {
        let field = FieldDescriptor::new("age", Kind::pointer(Kind::primitive(Primitive::U8)));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field, ClassField::new("age", TsType::named("number")));
        assert_eq!(converted.statement, Statement::pass_through("age"));
        assert!(converted.nested.is_empty());
    }

    #[test]
    fn test_type_override() {
        let field = FieldDescriptor::new("created", Kind::opaque("DateTime<Utc>")).with_type("Date");
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty, TsType::named("Date"));
    }

    #[test]
    fn test_transform_uses_override_or_default() {
        let field = FieldDescriptor::new("created", Kind::i64())
            .rename("created_at")
            .with_transform("new Date(__VALUE__)");
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field, ClassField::new("created_at", TsType::named("number")));
        assert_eq!(
            converted.statement,
            Statement::transform("created_at", "new Date(__VALUE__)")
        );

        let field = FieldDescriptor::new("when", Kind::opaque("Instant"))
            .with_transform("new Date(__VALUE__)");
        let err = convert(&catalog(), field).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFieldType { .. }));
    }

    #[test]
    fn test_nested_struct_field() {
        let field = FieldDescriptor::new("home", Kind::pointer(Kind::struct_("Address")));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty, TsType::named("Address"));
        assert_eq!(converted.statement, Statement::nested("home", "Address"));
        assert_eq!(converted.nested.len(), 1);
        assert_eq!(converted.nested[0].name(), "Address");
    }

    #[test]
    fn test_map_fields() {
        let field = FieldDescriptor::new("scores", Kind::map(Kind::string(), Kind::f64()));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty.to_string(), "{[key: string]: number}");
        assert_eq!(converted.statement, Statement::pass_through("scores"));

        let field = FieldDescriptor::new("offices", Kind::map(Kind::string(), Kind::struct_("Address")));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty.to_string(), "{[key: string]: Address}");
        assert_eq!(converted.statement, Statement::nested_map("offices", "Address"));
    }

    #[test]
    fn test_map_with_non_string_key() {
        let field = FieldDescriptor::new("by_id", Kind::map(Kind::i64(), Kind::string()));
        let err = convert(&catalog(), field).unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedKeyType { kind: "i64".into() });
    }

    #[test]
    fn test_map_with_unsupported_value() {
        let field = FieldDescriptor::new("extra", Kind::map(Kind::string(), Kind::opaque("Uuid")));
        let err = convert(&catalog(), field).unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedElementType { kind: "Uuid".into() });
    }

    #[test]
    fn test_slice_fields() {
        let field = FieldDescriptor::new("tags", Kind::pointer(Kind::slice(Kind::string())));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty.to_string(), "string[]");
        assert_eq!(converted.statement, Statement::pass_through("tags"));

        let field = FieldDescriptor::new("homes", Kind::slice(Kind::pointer(Kind::struct_("Address"))));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.field.ty.to_string(), "Address[]");
        assert_eq!(
            converted.statement,
            Statement::nested_array("homes", "Address").with_nullable_elements()
        );

        let field = FieldDescriptor::new("homes", Kind::slice(Kind::struct_("Address")));
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(converted.statement, Statement::nested_array("homes", "Address"));
    }

    #[test]
    fn test_map_of_optional_structs_is_guarded() {
        let field = FieldDescriptor::new(
            "offices",
            Kind::map(Kind::string(), Kind::pointer(Kind::struct_("Address"))),
        );
        let converted = convert(&catalog(), field).unwrap().unwrap();
        assert_eq!(
            converted.statement,
            Statement::nested_map("offices", "Address").with_nullable_elements()
        );
    }

    #[test]
    fn test_unsupported_slice_element() {
        let field = FieldDescriptor::new("pairs", Kind::slice(Kind::opaque("(u8, u8)")));
        let err = convert(&catalog(), field).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedElementType { .. }));
    }

    #[test]
    fn test_unsupported_scalar() {
        let field = FieldDescriptor::new("id", Kind::opaque("Uuid"));
        let err = convert(&catalog(), field).unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedFieldType { kind: "Uuid".into() });
    }
}
