//! Config source backed by the real process environment.

use std::collections::HashMap;

use baseline_core::application::ports::ConfigSource;

/// Production config source: environment variables come from the
/// process, properties come from `-D` defines collected at startup.
///
/// Defines are captured once at construction. Commands hold the source
/// behind the port for the whole run, so late environment mutations are
/// intentionally invisible.
#[derive(Debug, Clone, Default)]
pub struct ProcessConfigSource {
    defines: HashMap<String, String>,
}

impl ProcessConfigSource {
    /// Create a source with no property defines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from parsed `KEY=VALUE` defines.
    pub fn with_defines(defines: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            defines: defines.into_iter().collect(),
        }
    }
}

impl ConfigSource for ProcessConfigSource {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn property(&self, name: &str) -> Option<String> {
        self.defines.get(name).cloned()
    }
}
