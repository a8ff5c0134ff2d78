//! Host environment checks and build-cache planning.
//!
//! The check walks operating system, then architecture, then runtime
//! version, failing on the first violation. The OS and runtime checks
//! each have a dual-channel bypass flag; the architecture check has
//! none. Host facts are read through the config source first so tests
//! and CI can pin them, falling back to compile-time detection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::{ConfigSource, Filesystem};
use crate::application::resolver::ConfigResolver;
use crate::domain::{keys, Architecture, DomainError, OperatingSystem, RuntimeVersion};
use crate::error::BaselineResult;

/// Outcome of a successful environment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    os_raw: String,
    os: OperatingSystem,
    os_check_bypassed: bool,
    arch_raw: String,
    arch: Architecture,
    runtime: RuntimeVersion,
    floor: RuntimeVersion,
    runtime_check_bypassed: bool,
    editorconfig: Option<PathBuf>,
}

impl EnvironmentReport {
    /// Operating system name exactly as detected.
    pub fn os_raw(&self) -> &str {
        &self.os_raw
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    /// The OS was unrecognized but a bypass flag let it through.
    pub fn os_check_bypassed(&self) -> bool {
        self.os_check_bypassed
    }

    pub fn arch_raw(&self) -> &str {
        &self.arch_raw
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    pub fn runtime(&self) -> RuntimeVersion {
        self.runtime
    }

    pub fn floor(&self) -> RuntimeVersion {
        self.floor
    }

    /// The runtime was below the floor but a bypass flag let it through.
    pub fn runtime_check_bypassed(&self) -> bool {
        self.runtime_check_bypassed
    }

    /// Path to the formatting settings file, when the project has one.
    pub fn editorconfig(&self) -> Option<&Path> {
        self.editorconfig.as_deref()
    }

    /// Whether anything was waved through rather than genuinely passing.
    pub fn has_bypasses(&self) -> bool {
        self.os_check_bypassed || self.runtime_check_bypassed
    }
}

/// Credentials for the remote build cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheCredentials {
    username: String,
    password: String,
}

impl CacheCredentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Remote half of a build-cache plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCacheSettings {
    url: String,
    allow_insecure: bool,
    push_enabled: bool,
    credentials: Option<CacheCredentials>,
}

impl RemoteCacheSettings {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Plain-HTTP endpoints are tolerated rather than rejected.
    pub fn allow_insecure(&self) -> bool {
        self.allow_insecure
    }

    /// Pushes are reserved for CI hosts; everyone else only pulls.
    pub fn push_enabled(&self) -> bool {
        self.push_enabled
    }

    pub fn credentials(&self) -> Option<&CacheCredentials> {
        self.credentials.as_ref()
    }
}

/// Local half of a build-cache plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalCacheSettings {
    directory: PathBuf,
    remove_unused_entries_after_days: u32,
}

impl LocalCacheSettings {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn remove_unused_entries_after_days(&self) -> u32 {
        self.remove_unused_entries_after_days
    }
}

/// Fully resolved build-cache configuration. Built in memory before any
/// caller sees it, so a resolution failure can never leave a
/// half-applied block behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCachePlan {
    remote: Option<RemoteCacheSettings>,
    local: Option<LocalCacheSettings>,
}

impl BuildCachePlan {
    pub fn remote(&self) -> Option<&RemoteCacheSettings> {
        self.remote.as_ref()
    }

    pub fn local(&self) -> Option<&LocalCacheSettings> {
        self.local.as_ref()
    }
}

/// Validates the host environment and resolves build-cache settings.
pub struct EnvironmentService {
    config: Box<dyn ConfigSource>,
    filesystem: Box<dyn Filesystem>,
}

impl EnvironmentService {
    pub fn new(config: Box<dyn ConfigSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { config, filesystem }
    }

    /// Run the full environment check against a version floor.
    ///
    /// Checks run in a fixed order and stop at the first failure, so one
    /// run reports one problem.
    #[instrument(skip_all, fields(root = %root.display(), floor = floor.major()))]
    pub fn check(&self, root: &Path, floor: RuntimeVersion) -> BaselineResult<EnvironmentReport> {
        let resolver = self.resolver();

        // 1. Operating system family.
        let os_raw = self.host_fact(keys::OS_NAME_PROPERTY, std::env::consts::OS);
        let os = OperatingSystem::detect(&os_raw);
        let mut os_check_bypassed = false;
        if os.is_unsupported() {
            if resolver.flag(keys::OS_CHECK_DISABLE_ENV, keys::OS_CHECK_DISABLE_PROPERTY) {
                os_check_bypassed = true;
                warn!(detected = %os_raw, "Unrecognized operating system allowed by bypass flag");
            } else {
                return Err(DomainError::UnsupportedOperatingSystem { detected: os_raw }.into());
            }
        }

        // 2. CPU architecture. No bypass exists for this one.
        let arch_raw = self.host_fact(keys::OS_ARCH_PROPERTY, std::env::consts::ARCH);
        let arch = Architecture::detect(&arch_raw);
        if arch.is_unsupported() {
            return Err(DomainError::UnsupportedArchitecture { detected: arch_raw }.into());
        }

        // 3. Runtime version against the floor.
        let runtime = self.runtime_version()?;
        let mut runtime_check_bypassed = false;
        if runtime < floor {
            if resolver.flag(keys::JAVA_CHECK_DISABLE_ENV, keys::JAVA_CHECK_DISABLE_PROPERTY) {
                runtime_check_bypassed = true;
                warn!(
                    current = runtime.major(),
                    required = floor.major(),
                    "Runtime below the version floor allowed by bypass flag"
                );
            } else {
                return Err(DomainError::RuntimeVersionTooLow {
                    required: floor.major(),
                    current: runtime.major(),
                }
                .into());
            }
        }

        // 4. Formatting settings presence.
        let editorconfig = self.editorconfig_path(root);

        info!(
            os = %os_raw,
            arch = %arch_raw,
            runtime = runtime.major(),
            editorconfig = editorconfig.is_some(),
            "Environment check passed"
        );

        Ok(EnvironmentReport {
            os_raw,
            os,
            os_check_bypassed,
            arch_raw,
            arch,
            runtime,
            floor,
            runtime_check_bypassed,
            editorconfig,
        })
    }

    /// Resolve the build-cache plan, or `None` when nothing configures a
    /// cache at all.
    #[instrument(skip_all)]
    pub fn build_cache_plan(&self) -> BaselineResult<Option<BuildCachePlan>> {
        let url = self.config.property(keys::BUILD_CACHE_URL_PROPERTY);
        let dir = self.config.property(keys::BUILD_CACHE_DIR_PROPERTY);
        if url.is_none() && dir.is_none() {
            return Ok(None);
        }

        let remote = url.map(|url| self.remote_cache(url)).transpose()?;
        let local = dir.map(|dir| self.local_cache(dir)).transpose()?;

        info!(
            remote = remote.is_some(),
            local = local.is_some(),
            "Build-cache plan resolved"
        );
        Ok(Some(BuildCachePlan { remote, local }))
    }

    /// Path of the project's formatting settings file, when present.
    pub fn editorconfig_path(&self, root: &Path) -> Option<PathBuf> {
        let path = root.join(keys::EDITORCONFIG_FILE);
        self.filesystem.exists(&path).then_some(path)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn resolver(&self) -> ConfigResolver<'_> {
        ConfigResolver::new(self.config.as_ref(), None)
    }

    /// Host fact with a property override in front of the built-in probe.
    fn host_fact(&self, property: &str, probed: &str) -> String {
        self.config
            .property(property)
            .unwrap_or_else(|| probed.to_string())
    }

    fn runtime_version(&self) -> BaselineResult<RuntimeVersion> {
        let raw = self
            .config
            .property(keys::JAVA_VERSION_PROPERTY)
            .or_else(|| self.config.env_var(keys::JAVA_VERSION_ENV))
            .ok_or_else(|| ApplicationError::MissingConfiguration {
                key: keys::JAVA_VERSION_PROPERTY.to_string(),
            })?;
        Ok(raw.parse()?)
    }

    fn remote_cache(&self, url: String) -> BaselineResult<RemoteCacheSettings> {
        let allow_insecure = scheme(&url).is_some_and(|s| s.eq_ignore_ascii_case("http"));
        let push_enabled = self.config.env_var(keys::CI_ENV).is_some();

        let credentials = match self.config.property(keys::BUILD_CACHE_USERNAME_PROPERTY) {
            Some(username) => {
                let password = self
                    .config
                    .property(keys::BUILD_CACHE_PASSWORD_PROPERTY)
                    .ok_or_else(|| ApplicationError::MissingCredential {
                        username_key: keys::BUILD_CACHE_USERNAME_PROPERTY.to_string(),
                        password_key: keys::BUILD_CACHE_PASSWORD_PROPERTY.to_string(),
                    })?;
                Some(CacheCredentials { username, password })
            }
            None => None,
        };

        if allow_insecure {
            warn!(url = %url, "Remote build cache uses plain HTTP");
        }

        Ok(RemoteCacheSettings {
            url,
            allow_insecure,
            push_enabled,
            credentials,
        })
    }

    fn local_cache(&self, dir: String) -> BaselineResult<LocalCacheSettings> {
        let path = PathBuf::from(dir);
        if !self.filesystem.is_dir(&path) {
            return Err(ApplicationError::InvalidCacheDirectory { path }.into());
        }
        Ok(LocalCacheSettings {
            directory: path,
            remove_unused_entries_after_days: keys::LOCAL_CACHE_RETENTION_DAYS,
        })
    }
}

/// URI scheme: everything before the first `:`, when there is one.
fn scheme(url: &str) -> Option<&str> {
    url.split_once(':').map(|(scheme, _)| scheme)
}
