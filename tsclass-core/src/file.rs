use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Timestamp format used in backup file names.
const BACKUP_TIMESTAMP: &str = "%Y-%m-%dT%H_%M_%S%.3f";

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file unless it already holds the same content
    pub fn write(&self) -> Result<WriteResult> {
        let existing = std::fs::read_to_string(&self.path).ok();
        if existing.as_deref() == Some(self.content.as_str()) {
            tracing::debug!(path = %self.path.display(), "output unchanged");
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(path = %self.path.display(), bytes = self.content.len(), "wrote output");
        Ok(WriteResult::Written)
    }
}

/// Copy an existing file into `backup_dir` as `<name>-<timestamp>.backup`.
///
/// Returns `None` when there is nothing to back up.
pub fn backup(path: &Path, backup_dir: &Path) -> Result<Option<PathBuf>> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to read '{}'", path.display()));
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let stamp = chrono::Local::now().format(BACKUP_TIMESTAMP);
    let target = backup_dir.join(format!("{}-{}.backup", file_name, stamp));

    std::fs::create_dir_all(backup_dir)
        .wrap_err_with(|| format!("failed to create '{}'", backup_dir.display()))?;
    std::fs::write(&target, content)
        .wrap_err_with(|| format!("failed to write backup '{}'", target.display()))?;
    tracing::debug!(from = %path.display(), to = %target.display(), "backed up output");

    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("models.ts");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.ts");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.ts");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.ts");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_backup_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = backup(&temp.path().join("missing.ts"), temp.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_backup_copies_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.ts");
        fs::write(&path, "export class A {}").unwrap();

        let backup_dir = temp.path().join("backups");
        let target = backup(&path, &backup_dir).unwrap().unwrap();

        assert!(target.starts_with(&backup_dir));
        let name = target.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("models.ts-"));
        assert!(name.ends_with(".backup"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "export class A {}");
    }
}
