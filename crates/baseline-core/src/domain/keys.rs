//! Well-known lookup keys, file locations, and hard defaults.
//!
//! One table for every name the resolver, the services, and the error
//! guidance agree on. Adding a configurable setting means adding its
//! channel names here and nowhere else.

// ── Publishing ────────────────────────────────────────────────────────────────

/// Properties file consulted first for publishing credentials, relative to
/// the project root. When this file exists it wins outright over every
/// other channel.
pub const PUBLISHING_PROPERTIES_PATH: &str = "gradle/publishing.properties";

/// Access-key entry inside [`PUBLISHING_PROPERTIES_PATH`].
pub const PUBLISHING_ACCESS_KEY: &str = "s3.accessKey";

/// Secret-key entry inside [`PUBLISHING_PROPERTIES_PATH`].
pub const PUBLISHING_SECRET_KEY: &str = "s3.secretKey";

/// Environment fallback for the access key. Only honored when the secret
/// is also present and non-blank.
pub const PUBLISHING_ACCESS_KEY_ENV: &str = "BASELINE_PUBLISHING_ACCESS_KEY";

/// Environment fallback for the secret key.
pub const PUBLISHING_SECRET_KEY_ENV: &str = "BASELINE_PUBLISHING_SECRET_KEY";

/// Publish target used when nothing overrides it.
pub const DEFAULT_REPOSITORY_URL: &str = "s3://artifacts/baseline/maven";

// ── Environment checks ────────────────────────────────────────────────────────

/// Environment channel disabling the Java version sanity check.
pub const JAVA_CHECK_DISABLE_ENV: &str = "BASELINE_DISABLE_JAVA_SANITY_CHECK";

/// Property channel disabling the Java version sanity check.
pub const JAVA_CHECK_DISABLE_PROPERTY: &str = "baseline.ignoreJavaCheck";

/// Environment channel allowing an unrecognized operating system.
pub const OS_CHECK_DISABLE_ENV: &str = "BASELINE_ALLOW_UNSUPPORTED_OS";

/// Property channel allowing an unrecognized operating system.
pub const OS_CHECK_DISABLE_PROPERTY: &str = "baseline.allowUnsupportedOs";

/// Lowest Java major version accepted without a bypass.
pub const DEFAULT_JAVA_FLOOR: u32 = 17;

// ── Host probes ───────────────────────────────────────────────────────────────

/// Property override for the detected operating system name.
pub const OS_NAME_PROPERTY: &str = "os.name";

/// Property override for the detected CPU architecture.
pub const OS_ARCH_PROPERTY: &str = "os.arch";

/// Property channel for the active Java runtime version.
pub const JAVA_VERSION_PROPERTY: &str = "java.version";

/// Environment channel for the active Java runtime version.
pub const JAVA_VERSION_ENV: &str = "JAVA_VERSION";

/// Set (to anything) on CI hosts; toggles remote build-cache pushes.
pub const CI_ENV: &str = "CI";

// ── Build cache ───────────────────────────────────────────────────────────────

pub const BUILD_CACHE_URL_PROPERTY: &str = "baseline.buildCache.url";
pub const BUILD_CACHE_DIR_PROPERTY: &str = "baseline.buildCache.dir";
pub const BUILD_CACHE_USERNAME_PROPERTY: &str = "baseline.buildCache.username";
pub const BUILD_CACHE_PASSWORD_PROPERTY: &str = "baseline.buildCache.password";

/// Local cache entries unused for this many days are dropped.
pub const LOCAL_CACHE_RETENTION_DAYS: u32 = 14;

// ── Templates ─────────────────────────────────────────────────────────────────

/// Environment override pointing at a directory of header templates.
pub const TEMPLATE_DIR_ENV: &str = "BASELINE_TEMPLATE_DIR";

/// File probed for presence only; when it exists its path is handed to the
/// formatting toolchain.
pub const EDITORCONFIG_FILE: &str = ".editorconfig";
