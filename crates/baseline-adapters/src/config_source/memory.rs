//! In-memory config source for testing.

use std::collections::HashMap;

use baseline_core::application::ports::ConfigSource;

/// Config source backed by plain maps, for tests that must not touch
/// the real process environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigSource {
    env: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl MemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl ConfigSource for MemoryConfigSource {
    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_isolated_per_channel() {
        let source = MemoryConfigSource::new()
            .with_env("CI", "true")
            .with_property("os.name", "Linux");

        assert_eq!(source.env_var("CI").as_deref(), Some("true"));
        assert_eq!(source.env_var("os.name"), None);
        assert_eq!(source.property("os.name").as_deref(), Some("Linux"));
        assert_eq!(source.property("CI"), None);
    }
}
