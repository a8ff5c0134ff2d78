//! Output ports: interfaces the application core drives.
//!
//! Implementations:
//! - `Filesystem`: `LocalFilesystem` (real disk), `MemoryFilesystem` (tests)
//! - `TemplateStore`: `BuiltinTemplates` (embedded, overridable on disk)
//! - `ConfigSource`: `ProcessConfigSource` (process env + `-D` defines),
//!   `MemoryConfigSource` (tests)

use std::path::Path;

use crate::domain::LicenseKind;
use crate::error::BaselineResult;

/// Filesystem access for reading settings files and writing rendered
/// headers.
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> BaselineResult<String>;

    /// Write a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, contents: &str) -> BaselineResult<()>;

    /// Whether the path exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Source of license heading templates, keyed by license kind.
pub trait TemplateStore: Send + Sync {
    /// Fetch the raw heading template for a license kind.
    fn template_for(&self, kind: LicenseKind) -> BaselineResult<String>;
}

/// Read-only view of the ambient configuration channels.
///
/// `env_var` and `property` are separate lookups on purpose: resolution
/// order between them differs per setting and is decided by the
/// resolver, not the source.
pub trait ConfigSource: Send + Sync {
    /// Look up an environment variable. `None` when unset or not UTF-8.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Look up a `-D`-style property define.
    fn property(&self, name: &str) -> Option<String>;
}
