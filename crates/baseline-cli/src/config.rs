//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — build settings that
//! reach core travel through `-D` defines and the process environment, not
//! through this file.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`BASELINE_CLI__SECTION__KEY`)
//! 3. Config file (`--config <PATH>`, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generated headers.
    pub defaults: Defaults,
    /// Environment check settings.
    pub check: CheckConfig,
    /// Publication settings.
    pub publish: PublishConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// License kind used when `--license` is absent (`apache` or `mit`).
    pub license: Option<String>,
    /// Emoji prefix used when `--emoji` is absent.
    pub emoji: Option<String>,
    /// Project description used when `--description` is absent.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Minimum Java major version enforced by `baseline check`.
    pub min_java: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Repository URL offered to `baseline publish` when `--repository-url`
    /// is absent.
    pub repository_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether coloured output is allowed at all.  `--no-color` and a
    /// non-terminal stdout still win over `true`.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                license: None,
                emoji: None,
                description: None,
            },
            check: CheckConfig { min_java: None },
            publish: PublishConfig {
                repository_url: None,
            },
            output: OutputConfig { color: true },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`.
    /// An explicitly named file must exist; the default location is merged
    /// only when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default()).context(
                "failed to encode built-in defaults — this is a bug, please report it",
            )?);

        match config_file {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                builder = builder.add_source(config::File::from(path.as_path()));
            }
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    builder = builder.add_source(config::File::from(default_path));
                }
            }
        }

        // BASELINE_CLI__OUTPUT__COLOR=false, BASELINE_CLI__CHECK__MIN_JAVA=17, …
        builder = builder.add_source(
            config::Environment::with_prefix("BASELINE_CLI")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("configuration contains invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.baseline.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "baseline", "baseline")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".baseline.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_every_knob_unset_except_color() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.license, None);
        assert_eq!(cfg.check.min_java, None);
        assert_eq!(cfg.publish.repository_url, None);
        assert!(cfg.output.color);
    }

    #[test]
    fn explicit_file_overrides_defaults_and_leaves_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.toml");
        std::fs::write(
            &path,
            "[defaults]\nlicense = \"mit\"\nemoji = \"\u{1F4D0}\"\n\n[check]\nmin_java = 11\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.license.as_deref(), Some("mit"));
        assert_eq!(cfg.check.min_java, Some(11));
        // untouched sections keep their defaults
        assert_eq!(cfg.publish.repository_url, None);
        assert!(cfg.output.color);
    }

    #[test]
    fn missing_explicit_file_is_an_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "defaults = not toml at all [").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn config_renders_as_toml_for_config_show() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[output]"));
        assert!(rendered.contains("color = true"));
    }
}
