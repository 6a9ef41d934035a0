//! Registration of root types and whole-file generation.

use std::path::{Path, PathBuf};

use tsclass_codegen::Indent;
use tsclass_core::{File, TypeRef, TypeSource, WriteResult, backup};

use crate::{
    ast::ClassSpec,
    code_file::{CodeFile, GENERATED_HEADER},
    custom_code::CustomCode,
    engine::{ConversionRun, Converter},
    error::ConvertError,
    type_mapper::TypeScriptTypeMapper,
};

/// Output options shared by every class of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Prepended to every class name.
    pub prefix: String,
    /// Placed after the prefix, before the struct name.
    pub suffix: String,
    pub indent: Indent,
    /// Emit the `static createFrom` factory.
    pub create_from_method: bool,
    /// Emit `export` before each class.
    pub export: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            indent: Indent::FOUR,
            create_from_method: true,
            export: true,
        }
    }
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub path: PathBuf,
    /// Number of classes in the written file.
    pub classes: usize,
    /// Number of custom-code blocks carried over from the previous file.
    pub preserved: usize,
    pub backup: Option<PathBuf>,
    pub write: WriteResult,
}

/// A rendered output file and the number of classes in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub content: String,
    pub classes: usize,
}

/// TypeScript class generator over a [`TypeSource`].
///
/// Roots are converted in registration order. Each conversion call starts a
/// fresh [`ConversionRun`], so a type reachable from several roots is emitted
/// once per call and calls are independent of each other.
pub struct Generator<S> {
    source: S,
    roots: Vec<TypeRef>,
    options: Options,
    mapper: TypeScriptTypeMapper,
}

impl<S: TypeSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            roots: Vec::new(),
            options: Options::default(),
            mapper: TypeScriptTypeMapper::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_mapper(mut self, mapper: TypeScriptTypeMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Register a root type. Duplicates are allowed.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, root: TypeRef) -> Self {
        self.roots.push(root);
        self
    }

    /// Register several root types.
    pub fn add_all(mut self, roots: impl IntoIterator<Item = TypeRef>) -> Self {
        self.roots.extend(roots);
        self
    }

    pub fn roots(&self) -> &[TypeRef] {
        &self.roots
    }

    /// Convert every root into classes, nested classes first.
    ///
    /// With `custom_code`, every class gets a custom-code section filled
    /// from the mapping.
    pub fn classes(&self, custom_code: Option<&CustomCode>) -> Result<Vec<ClassSpec>, ConvertError> {
        let mut converter = Converter::new(&self.source, &self.options, &self.mapper);
        if let Some(custom_code) = custom_code {
            converter = converter.with_custom_code(custom_code);
        }

        let mut run = ConversionRun::new();
        let mut classes = Vec::new();
        for root in &self.roots {
            classes.extend(converter.convert_root(root, &mut run)?);
        }
        Ok(classes)
    }

    /// Convert every root and render the classes, separated by blank lines.
    pub fn convert(&self, custom_code: Option<&CustomCode>) -> Result<String, ConvertError> {
        let classes = self.classes(custom_code)?;
        Ok(CodeFile::new()
            .add_all(&classes)
            .render_with_indent(self.options.indent))
    }

    /// Render a complete output file: header comment then classes.
    pub fn render_file(&self, custom_code: Option<&CustomCode>) -> Result<RenderedFile, ConvertError> {
        let classes = self.classes(custom_code)?;
        let content = CodeFile::new()
            .header(GENERATED_HEADER)
            .add_all(&classes)
            .render_with_indent(self.options.indent);
        Ok(RenderedFile {
            content,
            classes: classes.len(),
        })
    }

    /// Regenerate the file at `path`.
    ///
    /// Custom code of the existing file is preserved. With `backup_dir`, the
    /// existing file is first copied there.
    pub fn generate(&self, path: &Path, backup_dir: Option<&Path>) -> eyre::Result<GenerateResult> {
        let custom_code = CustomCode::load(path)?;
        let rendered = self.render_file(Some(&custom_code))?;

        let backup = match backup_dir {
            Some(dir) => backup(path, dir)?,
            None => None,
        };
        let write = File::new(path, rendered.content).write()?;

        Ok(GenerateResult {
            path: path.to_path_buf(),
            classes: rendered.classes,
            preserved: custom_code.len(),
            backup,
            write,
        })
    }
}
