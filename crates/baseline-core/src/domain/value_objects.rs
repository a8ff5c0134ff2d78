//! Domain value objects: LicenseKind, OperatingSystem, Architecture,
//! RuntimeVersion, LineEnding.
//!
//! # Design
//!
//! These are pure value types — `Copy` where payload-free, equality-by-value,
//! no identity. Detection from raw host strings is total (`detect` maps
//! unknowns to `Unsupported`); parsing from user input is fallible
//! (`FromStr` rejects unknowns with a domain error). Nothing here touches
//! the host: callers pass raw strings in.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LicenseKind ───────────────────────────────────────────────────────────────

/// A supported license heading.
///
/// Closed set. Each variant owns its display name, canonical URL, and the
/// identifier of its heading template; the template text itself lives with
/// the template store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKind {
    Apache,
    Mit,
}

impl LicenseKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache => "apache",
            Self::Mit => "mit",
        }
    }

    /// Human-readable license name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Apache => "Apache 2.0",
            Self::Mit => "MIT License",
        }
    }

    /// Canonical license URL.
    pub const fn url(&self) -> &'static str {
        match self {
            Self::Apache => "http://www.apache.org/licenses/LICENSE-2.0",
            Self::Mit => "https://mit-license.org",
        }
    }

    /// Identifier of the heading template for this kind.
    ///
    /// Template stores resolve this to on-disk overrides or the embedded
    /// fallback text.
    pub const fn template_id(&self) -> &'static str {
        match self {
            Self::Apache => "apache.heading.tmpl",
            Self::Mit => "mit.heading.tmpl",
        }
    }

    /// Every kind, in declaration order.
    pub const fn all() -> [Self; 2] {
        [Self::Apache, Self::Mit]
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apache" | "apache2" | "apache-2.0" | "apache-2" => Ok(Self::Apache),
            "mit" => Ok(Self::Mit),
            other => Err(DomainError::InvalidLicense {
                input: other.to_string(),
            }),
        }
    }
}

// ── OperatingSystem ───────────────────────────────────────────────────────────

/// The host operating system family.
///
/// `detect` accepts both JVM-style names (`Mac OS X`, `Windows 11`) and
/// Rust/uname-style names (`macos`, `windows`), because the value can come
/// from a property override as easily as from the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    MacOs,
    Windows,
    Unsupported,
}

impl OperatingSystem {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Unsupported => "unsupported",
        }
    }

    /// Total detection: unknown families come back as `Unsupported`.
    pub fn detect(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unsupported)
    }

    /// The family this process is running on.
    pub fn current() -> Self {
        Self::detect(std::env::consts::OS)
    }

    /// Name used in toolchain download queries: `darwin` for macOS, the
    /// lowercase family name otherwise. `None` for unsupported families.
    pub const fn toolchain_name(&self) -> Option<&'static str> {
        match self {
            Self::Linux => Some("linux"),
            Self::MacOs => Some("darwin"),
            Self::Windows => Some("windows"),
            Self::Unsupported => None,
        }
    }

    /// Linux and macOS count as Unix-family hosts.
    pub const fn is_unix(&self) -> bool {
        matches!(self, Self::Linux | Self::MacOs)
    }

    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }

    /// Line terminator convention for this family.
    pub const fn line_ending(&self) -> LineEnding {
        if self.is_unix() {
            LineEnding::Lf
        } else {
            LineEnding::CrLf
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "linux" => Ok(Self::Linux),
            "macos" | "mac os x" | "darwin" | "osx" => Ok(Self::MacOs),
            _ if normalized.starts_with("windows") => Ok(Self::Windows),
            _ => Err(DomainError::UnsupportedOperatingSystem {
                detected: s.trim().to_string(),
            }),
        }
    }
}

// ── Architecture ──────────────────────────────────────────────────────────────

/// The host CPU architecture. There is no bypass for unsupported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X64,
    Arm64,
    Unsupported,
}

impl Architecture {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X64 => "x86_64",
            Self::Arm64 => "arm64",
            Self::Unsupported => "unsupported",
        }
    }

    /// Total detection: unknown architectures come back as `Unsupported`.
    pub fn detect(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unsupported)
    }

    /// The architecture this process is running on.
    pub fn current() -> Self {
        Self::detect(std::env::consts::ARCH)
    }

    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" => Ok(Self::X64),
            "arm64" | "aarch64" => Ok(Self::Arm64),
            other => Err(DomainError::UnsupportedArchitecture {
                detected: other.to_string(),
            }),
        }
    }
}

// ── RuntimeVersion ────────────────────────────────────────────────────────────

/// A platform runtime version, compared by major version only.
///
/// Both version schemes the JVM ecosystem has used parse here: the modern
/// `17` / `17.0.2` / `21-ea` shapes and the legacy `1.8.0_292` shape (major
/// version 8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RuntimeVersion {
    major: u32,
}

impl RuntimeVersion {
    pub const fn new(major: u32) -> Self {
        Self { major }
    }

    pub const fn major(&self) -> u32 {
        self.major
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)
    }
}

impl FromStr for RuntimeVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidRuntimeVersion {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        // Legacy scheme: "1.8.0_292" is Java 8.
        let effective = trimmed.strip_prefix("1.").unwrap_or(trimmed);
        let digits: String = effective
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return Err(invalid());
        }

        let major = digits.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { major })
    }
}

// ── LineEnding ────────────────────────────────────────────────────────────────

/// Line terminator style, chosen by OS family at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        }
    }

    /// The literal terminator characters.
    pub const fn terminator(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Terminator convention of the host this process runs on.
    pub fn current() -> Self {
        OperatingSystem::current().line_ending()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_kind_owns_name_url_and_template_id() {
        assert_eq!(LicenseKind::Apache.display_name(), "Apache 2.0");
        assert_eq!(
            LicenseKind::Apache.url(),
            "http://www.apache.org/licenses/LICENSE-2.0"
        );
        assert_eq!(LicenseKind::Apache.template_id(), "apache.heading.tmpl");
        assert_eq!(LicenseKind::Mit.display_name(), "MIT License");
        assert_eq!(LicenseKind::Mit.url(), "https://mit-license.org");
        assert_eq!(LicenseKind::Mit.template_id(), "mit.heading.tmpl");
    }

    #[test]
    fn license_kind_from_str_accepts_aliases() {
        assert_eq!("apache".parse::<LicenseKind>().unwrap(), LicenseKind::Apache);
        assert_eq!(
            "Apache-2.0".parse::<LicenseKind>().unwrap(),
            LicenseKind::Apache
        );
        assert_eq!("MIT".parse::<LicenseKind>().unwrap(), LicenseKind::Mit);
    }

    #[test]
    fn license_kind_from_str_unknown_errors() {
        assert!("gpl".parse::<LicenseKind>().is_err());
        assert!("".parse::<LicenseKind>().is_err());
    }

    #[test]
    fn operating_system_detects_jvm_style_names() {
        assert_eq!(OperatingSystem::detect("Linux"), OperatingSystem::Linux);
        assert_eq!(OperatingSystem::detect("Mac OS X"), OperatingSystem::MacOs);
        assert_eq!(
            OperatingSystem::detect("Windows 11"),
            OperatingSystem::Windows
        );
    }

    #[test]
    fn operating_system_detects_rust_style_names() {
        assert_eq!(OperatingSystem::detect("linux"), OperatingSystem::Linux);
        assert_eq!(OperatingSystem::detect("macos"), OperatingSystem::MacOs);
        assert_eq!(OperatingSystem::detect("windows"), OperatingSystem::Windows);
    }

    #[test]
    fn operating_system_unknown_is_unsupported() {
        assert_eq!(
            OperatingSystem::detect("SomeFutureOS"),
            OperatingSystem::Unsupported
        );
        assert!("SomeFutureOS".parse::<OperatingSystem>().is_err());
    }

    #[test]
    fn operating_system_unix_families() {
        assert!(OperatingSystem::Linux.is_unix());
        assert!(OperatingSystem::MacOs.is_unix());
        assert!(!OperatingSystem::Windows.is_unix());
        assert!(!OperatingSystem::Unsupported.is_unix());
    }

    #[test]
    fn operating_system_line_ending_follows_family() {
        assert_eq!(OperatingSystem::Linux.line_ending(), LineEnding::Lf);
        assert_eq!(OperatingSystem::MacOs.line_ending(), LineEnding::Lf);
        assert_eq!(OperatingSystem::Windows.line_ending(), LineEnding::CrLf);
        assert_eq!(OperatingSystem::Unsupported.line_ending(), LineEnding::CrLf);
    }

    #[test]
    fn architecture_detects_aliases() {
        assert_eq!(Architecture::detect("x86_64"), Architecture::X64);
        assert_eq!(Architecture::detect("amd64"), Architecture::X64);
        assert_eq!(Architecture::detect("aarch64"), Architecture::Arm64);
        assert_eq!(Architecture::detect("arm64"), Architecture::Arm64);
    }

    #[test]
    fn architecture_unknown_is_unsupported() {
        assert_eq!(Architecture::detect("riscv64"), Architecture::Unsupported);
        assert!("riscv64".parse::<Architecture>().is_err());
    }

    #[test]
    fn runtime_version_parses_modern_scheme() {
        assert_eq!("17".parse::<RuntimeVersion>().unwrap().major(), 17);
        assert_eq!("17.0.2".parse::<RuntimeVersion>().unwrap().major(), 17);
        assert_eq!("21-ea".parse::<RuntimeVersion>().unwrap().major(), 21);
    }

    #[test]
    fn runtime_version_parses_legacy_scheme() {
        assert_eq!("1.8.0_292".parse::<RuntimeVersion>().unwrap().major(), 8);
        assert_eq!("1.8".parse::<RuntimeVersion>().unwrap().major(), 8);
    }

    #[test]
    fn runtime_version_rejects_garbage() {
        assert!("".parse::<RuntimeVersion>().is_err());
        assert!("abc".parse::<RuntimeVersion>().is_err());
        assert!("v17".parse::<RuntimeVersion>().is_err());
    }

    #[test]
    fn runtime_version_orders_by_major() {
        assert!(RuntimeVersion::new(8) < RuntimeVersion::new(17));
        assert!(RuntimeVersion::new(21) >= RuntimeVersion::new(17));
    }

    #[test]
    fn line_ending_terminators() {
        assert_eq!(LineEnding::Lf.terminator(), "\n");
        assert_eq!(LineEnding::CrLf.terminator(), "\r\n");
    }
}
