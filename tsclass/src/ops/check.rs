//! Check operation - convert without writing.

use eyre::{Context, Result};

use super::Project;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full conversion so unsupported field types surface without
/// touching the output file.
pub fn check(project: &Project) -> Result<CheckReport> {
    let classes = project
        .generator()?
        .classes(None)
        .wrap_err("conversion failed")?;

    Ok(CheckReport {
        sources: project.manifest().source_paths(),
        structs: project.catalog().len(),
        classes: classes.iter().map(|class| class.name().to_string()).collect(),
        output: project.manifest().output_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::project;

    #[test]
    fn test_check_lists_classes_in_output_order() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "roots = [\"Person\"]", "suffix = \"Dto\"");

        let report = check(&project).unwrap();
        assert_eq!(report.structs, 2);
        assert_eq!(report.classes, ["DtoAddress", "DtoPerson"]);
        assert!(!report.output.exists());
    }

    #[test]
    fn test_check_reports_unsupported_types() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("models.rs"),
            "pub struct Event { pub id: Uuid }",
        )
        .unwrap();
        let config = temp.path().join("tsclass.toml");
        std::fs::write(
            &config,
            "[input]\nsources = [\"models.rs\"]\n\n[output]\npath = \"models.ts\"\n",
        )
        .unwrap();
        let project =
            Project::load(tsclass_manifest::Manifest::from_file(&config).unwrap()).unwrap();

        let err = check(&project).unwrap_err();
        assert_eq!(err.to_string(), "conversion failed");

        std::fs::write(
            &config,
            "[input]\nsources = [\"models.rs\"]\n\n[output]\npath = \"models.ts\"\n\n[types]\nUuid = \"string\"\n",
        )
        .unwrap();
        let project =
            Project::load(tsclass_manifest::Manifest::from_file(&config).unwrap()).unwrap();
        assert_eq!(check(&project).unwrap().classes, ["Event"]);
    }
}
