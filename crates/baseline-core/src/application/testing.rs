//! In-memory port fakes shared by the application-layer unit tests.
//!
//! Kept inside the crate so service tests never touch the real process
//! environment or disk. The adapters crate ships richer equivalents for
//! integration use.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::application::error::ApplicationError;
use crate::application::ports::{ConfigSource, Filesystem};
use crate::error::BaselineResult;

/// Config source backed by plain maps.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeConfigSource {
    env: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl FakeConfigSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for FakeConfigSource {
    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

#[derive(Debug, Default)]
struct FakeFilesystemInner {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

/// Filesystem backed by maps. Clones share state, so a test can keep a
/// handle while the service owns another.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFilesystem {
    inner: Arc<RwLock<FakeFilesystemInner>>,
}

impl FakeFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.into(), contents.to_string());
        self
    }

    pub(crate) fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.inner.write().unwrap().dirs.insert(path.into());
        self
    }

    /// Contents last written to `path`, if any.
    pub(crate) fn written(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }
}

impl Filesystem for FakeFilesystem {
    fn read_to_string(&self, path: &Path) -> BaselineResult<String> {
        self.inner
            .read()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "no such file".to_string(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, contents: &str) -> BaselineResult<()> {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().dirs.contains(path)
    }
}
