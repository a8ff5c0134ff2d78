// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::domain::keys;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (services hand them upward by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions, including every bypass channel)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("unknown license kind: {input}")]
    InvalidLicense { input: String },

    #[error("unrecognized runtime version string: '{input}'")]
    InvalidRuntimeVersion { input: String },

    // ========================================================================
    // Platform Compatibility Errors
    // ========================================================================
    #[error("unsupported operating system '{detected}': Windows, macOS, or Linux is required")]
    UnsupportedOperatingSystem { detected: String },

    #[error("unsupported architecture '{detected}': only x86_64 and ARM64 hosts are supported")]
    UnsupportedArchitecture { detected: String },

    #[error("Java {required} or higher is required, the active runtime is Java {current}")]
    RuntimeVersionTooLow { required: u32, current: u32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    ///
    /// Bypassable checks list every channel that disables them; the
    /// architecture check deliberately offers none.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLicense { .. } => vec![
                "Supported license kinds: apache, mit".into(),
            ],
            Self::InvalidRuntimeVersion { .. } => vec![
                "Version strings look like `17`, `17.0.2`, or the legacy `1.8.0_292`".into(),
            ],
            Self::UnsupportedOperatingSystem { .. } => vec![
                format!(
                    "Set environment variable `{}` to `yes`, `true`, `1`, or `si` to continue anyway",
                    keys::OS_CHECK_DISABLE_ENV
                ),
                format!(
                    "Set system property `{}` (for example `-D {}=true`)",
                    keys::OS_CHECK_DISABLE_PROPERTY,
                    keys::OS_CHECK_DISABLE_PROPERTY
                ),
            ],
            Self::UnsupportedArchitecture { .. } => vec![
                "Use an x86_64 (amd64) or ARM64 (aarch64) host; this check cannot be disabled"
                    .into(),
            ],
            Self::RuntimeVersionTooLow { required, .. } => vec![
                format!("Install a Java {required} or newer toolchain"),
                format!(
                    "Set environment variable `{}` to `yes`, `true`, `1`, or `si`",
                    keys::JAVA_CHECK_DISABLE_ENV
                ),
                format!(
                    "Set system property `{}` to `yes`, `true`, `1`, or `si`",
                    keys::JAVA_CHECK_DISABLE_PROPERTY
                ),
                format!(
                    "Add `systemProp.{}=true` to `gradle.properties`",
                    keys::JAVA_CHECK_DISABLE_PROPERTY
                ),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLicense { .. } | Self::InvalidRuntimeVersion { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedOperatingSystem { .. }
            | Self::UnsupportedArchitecture { .. }
            | Self::RuntimeVersionTooLow { .. } => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_version_error_names_floor_and_current() {
        let err = DomainError::RuntimeVersionTooLow {
            required: 17,
            current: 11,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("17"));
        assert!(rendered.contains("11"));
    }

    #[test]
    fn runtime_version_suggestions_name_all_three_disable_mechanisms() {
        let err = DomainError::RuntimeVersionTooLow {
            required: 17,
            current: 8,
        };
        let suggestions = err.suggestions().join("\n");
        assert!(suggestions.contains(keys::JAVA_CHECK_DISABLE_ENV));
        assert!(suggestions.contains(keys::JAVA_CHECK_DISABLE_PROPERTY));
        assert!(suggestions.contains("gradle.properties"));
    }

    #[test]
    fn architecture_error_offers_no_bypass() {
        let err = DomainError::UnsupportedArchitecture {
            detected: "riscv64".into(),
        };
        let suggestions = err.suggestions().join("\n");
        assert!(suggestions.contains("cannot be disabled"));
        assert!(!suggestions.contains(keys::OS_CHECK_DISABLE_ENV));
    }

    #[test]
    fn platform_errors_are_compatibility_category() {
        let err = DomainError::UnsupportedOperatingSystem {
            detected: "SomeFutureOS".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Compatibility);
    }
}
