//! Generate command report data structures.

use std::path::PathBuf;

use tsclass_core::WriteResult;
use tsclass_typescript::GenerateResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub enum GenerateReport {
    /// The output file was written (or already up to date).
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// File that would be written.
    pub path: PathBuf,
    /// Complete file content.
    pub content: String,
    /// Number of classes in the file.
    pub classes: usize,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Written(result) => render_written(out, result),
            Self::Preview(preview) => render_preview(out, preview),
        }
    }
}

fn render_written(out: &mut dyn Output, result: &GenerateResult) {
    let path = result.path.display().to_string();
    match result.write {
        WriteResult::Written => out.key_value("Generated", &path),
        WriteResult::Unchanged => out.key_value("Up to date", &path),
    }
    out.key_value("Classes", &result.classes.to_string());
    if result.preserved > 0 {
        out.key_value("Custom code blocks", &result.preserved.to_string());
    }
    if let Some(backup) = &result.backup {
        out.key_value("Backup", &backup.display().to_string());
    }
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    out.divider(&preview.path.display().to_string());
    out.preformatted(&preview.content);
    out.divider("Summary");
    out.preformatted(&format!("{} classes would be generated", preview.classes));
}
