//! License heading template store.
//!
//! # Template resolution order
//!
//! Templates are searched per render, stopping at the first hit:
//!
//! 1. **`$BASELINE_TEMPLATE_DIR`** — environment variable override. Point
//!    it at a directory holding `apache.heading.tmpl` / `mit.heading.tmpl`
//!    to replace a template wholesale.
//! 2. **`<user config dir>/baseline/templates`** — per-user overrides.
//! 3. **Embedded copies** — compiled into the binary, always available.
//!
//! A directory earlier in the order only wins for the template files it
//! actually contains; missing files fall through to the next location.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use baseline_core::application::ports::TemplateStore;
use baseline_core::application::ApplicationError;
use baseline_core::domain::{keys, LicenseKind};
use baseline_core::error::BaselineResult;

const APACHE_HEADING: &str = include_str!("../templates/apache.heading.tmpl");
const MIT_HEADING: &str = include_str!("../templates/mit.heading.tmpl");

/// Template store with embedded defaults and on-disk overrides.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTemplates {
    override_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl BuiltinTemplates {
    /// Embedded templates only; no disk probing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full resolution order: env override, user config dir, embedded.
    pub fn from_env() -> Self {
        Self {
            override_dir: std::env::var(keys::TEMPLATE_DIR_ENV).ok().map(PathBuf::from),
            user_dir: dirs::config_dir().map(|dir| dir.join("baseline").join("templates")),
        }
    }

    /// Explicit override directory, checked before the embedded copies.
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
            user_dir: None,
        }
    }

    /// Candidate directories in priority order.
    fn candidate_dirs(&self) -> impl Iterator<Item = &Path> {
        self.override_dir
            .as_deref()
            .into_iter()
            .chain(self.user_dir.as_deref())
    }
}

impl TemplateStore for BuiltinTemplates {
    #[instrument(skip_all, fields(kind = %kind))]
    fn template_for(&self, kind: LicenseKind) -> BaselineResult<String> {
        for dir in self.candidate_dirs() {
            let path = dir.join(kind.template_id());
            if !path.is_file() {
                debug!(path = %path.display(), "no override template here, trying next");
                continue;
            }
            debug!(path = %path.display(), "using override template");
            return std::fs::read_to_string(&path).map_err(|e| {
                ApplicationError::Filesystem {
                    path,
                    reason: format!("Failed to read template: {}", e),
                }
                .into()
            });
        }

        debug!("using embedded template");
        Ok(embedded(kind).to_string())
    }
}

/// The compiled-in template for a license kind.
fn embedded(kind: LicenseKind) -> &'static str {
    match kind {
        LicenseKind::Apache => APACHE_HEADING,
        LicenseKind::Mit => MIT_HEADING,
    }
}
