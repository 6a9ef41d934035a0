//! Generate operation - write TypeScript classes for the configured roots.

use std::path::Path;

use eyre::{Context, Result};
use tsclass_core::WriteResult;
use tsclass_typescript::CustomCode;

use super::Project;
use crate::reports::{GenerateReport, PreviewResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file overriding the manifest's path.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Custom code of an existing output file is carried over in both modes.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let path = opts
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project.manifest().output_path());
    let generator = project.generator()?;

    if opts.dry_run {
        let custom_code = CustomCode::load(&path)?;
        let rendered = generator
            .render_file(Some(&custom_code))
            .wrap_err("conversion failed")?;
        return Ok(GenerateReport::Preview(PreviewResult {
            path,
            content: rendered.content,
            classes: rendered.classes,
        }));
    }

    let backup_dir = project.manifest().backup_dir();
    let result = generator
        .generate(&path, backup_dir.as_deref())
        .wrap_err_with(|| format!("failed to generate '{}'", path.display()))?;

    match result.write {
        WriteResult::Written => {
            tracing::info!(path = %result.path.display(), classes = result.classes, "wrote classes")
        }
        WriteResult::Unchanged => {
            tracing::info!(path = %result.path.display(), "output already up to date")
        }
    }
    Ok(GenerateReport::Written(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::project;

    #[test]
    fn test_generate_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "roots = [\"Person\"]", "");

        let report = generate(
            &project,
            GenerateOptions {
                output: None,
                dry_run: false,
            },
        )
        .unwrap();

        let GenerateReport::Written(result) = report else {
            panic!("expected a written file");
        };
        assert_eq!(result.classes, 2);
        assert_eq!(result.write, WriteResult::Written);

        let content = std::fs::read_to_string(temp.path().join("out/models.ts")).unwrap();
        assert!(content.starts_with("/* Do not change, this code is generated from Rust structs */\n\n"));
        assert!(content.contains("export class Address {"));
        assert!(content.contains("    fullName: string;\n    home: Address;\n"));
        assert!(!content.contains("secret"));
    }

    #[test]
    fn test_dry_run_leaves_disk_untouched() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "", "");

        let report = generate(
            &project,
            GenerateOptions {
                output: None,
                dry_run: true,
            },
        )
        .unwrap();

        let GenerateReport::Preview(preview) = report else {
            panic!("expected a preview");
        };
        assert_eq!(preview.classes, 2);
        assert!(preview.content.contains("//[Person:]\n\n    //[end]"));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_dry_run_matches_written_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "", "");
        let options = |dry_run| GenerateOptions {
            output: None,
            dry_run,
        };

        let GenerateReport::Preview(preview) = generate(&project, options(true)).unwrap() else {
            panic!("expected a preview");
        };
        generate(&project, options(false)).unwrap();

        let written = std::fs::read_to_string(temp.path().join("out/models.ts")).unwrap();
        assert_eq!(preview.content, written);
    }

    #[test]
    fn test_output_override_and_backup() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "roots = [\"Address\"]", "backup_dir = \"backups\"");
        let target = temp.path().join("custom.ts");
        std::fs::write(&target, "old content").unwrap();

        let report = generate(
            &project,
            GenerateOptions {
                output: Some(&target),
                dry_run: false,
            },
        )
        .unwrap();

        let GenerateReport::Written(result) = report else {
            panic!("expected a written file");
        };
        assert_eq!(result.path, target);
        let backup = result.backup.expect("existing file should be backed up");
        assert!(backup.starts_with(temp.path().join("backups")));
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "old content");
        assert!(!temp.path().join("out").exists());
    }
}
