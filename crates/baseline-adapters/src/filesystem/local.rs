//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use baseline_core::{application::ports::Filesystem, error::BaselineResult};

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
    fn read_to_string(&self, path: &Path) -> BaselineResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, contents: &str) -> BaselineResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(path, e, "create parent directory"))?;
            }
        }
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> baseline_core::error::BaselineError {
    use baseline_core::application::ApplicationError;

    ApplicationError::Filesystem {
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
    fn round_trips_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("header.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "mylib: test\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "mylib: test\n");
    }

    #[test]
    fn write_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep/nested/header.txt");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "x").unwrap();
        assert!(fs.exists(&path));
    }

    #[test]
    fn read_of_missing_file_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .read_to_string(&temp.path().join("missing.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("read file"));
    }

    #[test]
    fn is_dir_distinguishes_files_from_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        let fs = LocalFilesystem::new();
        fs.write_file(&file, "x").unwrap();

        assert!(fs.is_dir(temp.path()));
        assert!(!fs.is_dir(&file));
    }
}
