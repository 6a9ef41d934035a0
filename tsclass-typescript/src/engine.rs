//! The recursive walk from struct types to TypeScript classes.

use std::collections::HashSet;

use tsclass_core::{TypeRef, TypeSource};

use crate::{
    ast::ClassSpec,
    custom_code::CustomCode,
    error::ConvertError,
    field::convert_field,
    generator::Options,
    naming,
    type_mapper::TypeScriptTypeMapper,
};

/// Types already converted during one conversion call.
///
/// A type is marked before its fields are walked, so a type reached again
/// through its own fields produces no second class.
#[derive(Debug, Clone, Default)]
pub struct ConversionRun {
    visited: HashSet<String>,
}

impl ConversionRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `ty` as visited. Returns false if it already was.
    pub fn visit(&mut self, ty: &TypeRef) -> bool {
        self.visited.insert(ty.qualified().to_string())
    }

    pub fn is_visited(&self, ty: &TypeRef) -> bool {
        self.visited.contains(ty.qualified())
    }

    /// Number of types converted so far.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Converts struct types reachable from a root into classes.
pub struct Converter<'a> {
    source: &'a dyn TypeSource,
    options: &'a Options,
    mapper: &'a TypeScriptTypeMapper,
    custom_code: Option<&'a CustomCode>,
}

impl<'a> Converter<'a> {
    pub fn new(
        source: &'a dyn TypeSource,
        options: &'a Options,
        mapper: &'a TypeScriptTypeMapper,
    ) -> Self {
        Self {
            source,
            options,
            mapper,
            custom_code: None,
        }
    }

    /// Emit a custom-code section in every class, filled from `custom_code`.
    pub fn with_custom_code(mut self, custom_code: &'a CustomCode) -> Self {
        self.custom_code = Some(custom_code);
        self
    }

    pub fn mapper(&self) -> &TypeScriptTypeMapper {
        self.mapper
    }

    /// Class name for `ty` under the configured prefix and suffix.
    pub fn entity_name(&self, ty: &TypeRef) -> Result<String, ConvertError> {
        naming::entity_name(&self.options.prefix, &self.options.suffix, ty)
    }

    /// Convert `ty` and every struct type first reached through it.
    ///
    /// Nested classes come before the classes that use them; the class for
    /// `ty` itself is last. A type already visited in `run` yields nothing.
    pub fn convert_root(
        &self,
        ty: &TypeRef,
        run: &mut ConversionRun,
    ) -> Result<Vec<ClassSpec>, ConvertError> {
        let name = self.entity_name(ty)?;
        if !run.visit(ty) {
            return Ok(Vec::new());
        }

        let descriptor = self.source.describe(ty)?;
        let mut class = self.new_class(name);
        let mut classes = Vec::new();

        for field in &descriptor.fields {
            let converted = convert_field(self, field, run).map_err(|source| {
                ConvertError::PropagatedFieldError {
                    type_name: ty.qualified().to_string(),
                    field: field.name.clone(),
                    source: Box::new(source),
                }
            })?;
            if let Some(converted) = converted {
                classes.splice(0..0, converted.nested);
                class.push(converted.field, converted.statement);
            }
        }

        classes.push(class);
        Ok(classes)
    }

    /// Convert a type reached through a field, returning its class name
    /// along with any newly produced classes.
    pub(crate) fn convert_nested(
        &self,
        ty: &TypeRef,
        run: &mut ConversionRun,
    ) -> Result<(String, Vec<ClassSpec>), ConvertError> {
        let name = self.entity_name(ty)?;
        let classes = self.convert_root(ty, run)?;
        Ok((name, classes))
    }

    fn new_class(&self, name: String) -> ClassSpec {
        let custom = self
            .custom_code
            .map(|code| code.get(&name).unwrap_or_default().to_string());

        let mut class = ClassSpec::new(name);
        if !self.options.export {
            class = class.private();
        }
        if !self.options.create_from_method {
            class = class.without_factory();
        }
        if let Some(code) = custom {
            class = class.custom_code(code);
        }
        class
    }
}
