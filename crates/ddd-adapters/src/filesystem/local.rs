//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use ddd_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_creates_then_extends() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("entities.py");
        let fs = LocalFilesystem::new();

        fs.append_file(&file, "a\n").unwrap();
        fs.append_file(&file, "b\n").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "a\nb\n");
    }

    #[test]
    fn write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.py");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn nested_directories_and_exists() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("apps/shop/domain");
        let fs = LocalFilesystem::new();

        assert!(!fs.exists(&nested));
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn io_failures_become_filesystem_errors() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&dir.path().join("missing/parent.py"), "x")
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(err.to_string().contains("Failed to write file"));
    }
}
