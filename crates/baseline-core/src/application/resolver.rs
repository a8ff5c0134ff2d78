//! Ordered-precedence setting resolution.
//!
//! Every setting declares its channels once, in precedence order, and a
//! single resolver walks them. Two rules apply on top of plain ordering:
//!
//! 1. A *file* channel wins outright. When the settings file is present,
//!    later channels are never consulted for that setting, even for keys
//!    the file does not define.
//! 2. Boolean flags share one parse rule: a value is truthy iff it is
//!    one of `yes`, `true`, `1`, `si` (case-insensitive, trimmed).
//!    Anything else, including absence, is false.

use std::collections::BTreeMap;

use crate::application::error::ApplicationError;
use crate::application::ports::ConfigSource;
use crate::application::properties::Properties;
use crate::error::BaselineResult;

/// One channel a setting can resolve through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Key in the settings file, when one is loaded.
    File { key: String },
    /// Environment variable.
    Env { name: String },
    /// `-D`-style property define.
    Property { name: String },
}

/// Declaration of a single resolvable setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSpec {
    name: String,
    channels: Vec<Channel>,
    default: Option<String>,
    required: bool,
}

impl SettingSpec {
    /// Start a declaration. Channels are consulted in the order they are
    /// added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
            default: None,
            required: false,
        }
    }

    /// Add a settings-file channel.
    pub fn file_key(mut self, key: impl Into<String>) -> Self {
        self.channels.push(Channel::File { key: key.into() });
        self
    }

    /// Add an environment variable channel.
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.channels.push(Channel::Env { name: name.into() });
        self
    }

    /// Add a property define channel.
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.channels.push(Channel::Property { name: name.into() });
        self
    }

    /// Value used when no channel yields one.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Mark the setting required: resolution fails if no channel and no
    /// default yields a value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Logical name of the setting, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolves settings against a config source and an optional loaded
/// settings file.
pub struct ConfigResolver<'a> {
    source: &'a dyn ConfigSource,
    file: Option<&'a Properties>,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(source: &'a dyn ConfigSource, file: Option<&'a Properties>) -> Self {
        Self { source, file }
    }

    /// Resolve a batch of settings. Fails on the first required setting
    /// that yields no value, naming its logical key.
    pub fn resolve(&self, specs: &[SettingSpec]) -> BaselineResult<BTreeMap<String, String>> {
        let mut resolved = BTreeMap::new();
        for spec in specs {
            match self.resolve_value(spec) {
                Some(value) => {
                    resolved.insert(spec.name.clone(), value);
                }
                None if spec.required => {
                    return Err(ApplicationError::MissingConfiguration {
                        key: spec.name.clone(),
                    }
                    .into());
                }
                None => {}
            }
        }
        Ok(resolved)
    }

    /// Resolve one setting to an optional value.
    pub fn resolve_value(&self, spec: &SettingSpec) -> Option<String> {
        // File channel wins outright when a file is loaded.
        if let Some(file) = self.file {
            let file_key = spec.channels.iter().find_map(|channel| match channel {
                Channel::File { key } => Some(key.as_str()),
                _ => None,
            });
            if let Some(key) = file_key {
                return file
                    .get(key)
                    .map(ToString::to_string)
                    .or_else(|| spec.default.clone());
            }
        }

        for channel in &spec.channels {
            let value = match channel {
                Channel::File { .. } => None,
                Channel::Env { name } => self.source.env_var(name),
                Channel::Property { name } => self.source.property(name),
            };
            if value.is_some() {
                return value;
            }
        }
        spec.default.clone()
    }

    /// Resolve a dual-channel boolean flag: truthy in either channel
    /// enables it.
    pub fn flag(&self, env_name: &str, property_name: &str) -> bool {
        [
            self.source.env_var(env_name),
            self.source.property(property_name),
        ]
        .into_iter()
        .flatten()
        .any(|value| is_truthy(&value))
    }
}

/// The shared boolean parse rule.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "si"
    )
}
