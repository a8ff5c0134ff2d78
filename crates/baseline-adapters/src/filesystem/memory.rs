//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use baseline_core::application::ports::Filesystem;
use baseline_core::application::ApplicationError;
use baseline_core::error::BaselineResult;

/// In-memory filesystem for testing. Clones share state, so a test can
/// keep one handle while the composition root owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            inner.files.insert(path.into(), contents.to_string());
        }
        self
    }

    /// Seed a directory (testing helper).
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            inner.directories.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.files.clear();
        inner.directories.clear();
    }

    fn locked(&self) -> BaselineResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| {
            ApplicationError::Filesystem {
                path: PathBuf::new(),
                reason: "memory filesystem lock poisoned".into(),
            }
            .into()
        })
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> BaselineResult<String> {
        let inner = self.inner.read().map_err(|_| ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "memory filesystem lock poisoned".into(),
        })?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to read file: no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> BaselineResult<()> {
        let mut inner = self.locked()?;
        // Parents materialize implicitly, like `LocalFilesystem` does.
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.directories.contains(path)
    }
}
