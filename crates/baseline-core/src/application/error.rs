//! Application layer errors.
//!
//! These errors represent failures in orchestration and resolution, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::keys;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No template is registered for a license kind. Defensive: the kind
    /// set is closed and the built-in store covers all of it.
    #[error("no heading template registered for license kind '{kind}'")]
    TemplateNotFound { kind: String },

    /// Filesystem operation failed (template override read, properties
    /// file read, header write).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A required setting resolved through no channel.
    #[error("missing required configuration value for `{key}`")]
    MissingConfiguration { key: String },

    /// A username was configured without its password. Never skipped.
    #[error("missing `{password_key}`: `{username_key}` is set but has no matching password")]
    MissingCredential {
        username_key: String,
        password_key: String,
    },

    /// The configured local build-cache path is absent or not a directory.
    #[error("expected path [{path}] to be a directory")]
    InvalidCacheDirectory { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { .. } => vec![
                "Built-in templates cover: apache, mit".into(),
                format!(
                    "If `{}` points at an override directory, check its contents",
                    keys::TEMPLATE_DIR_ENV
                ),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and you have permission to read it".into(),
            ],
            Self::MissingConfiguration { key } => vec![
                format!("Provide it with `-D {key}=<value>` or the matching environment channel"),
            ],
            Self::MissingCredential {
                username_key,
                password_key,
            } => vec![
                format!("Set `{password_key}` alongside `{username_key}`"),
                format!("Or drop `{username_key}` to use anonymous access"),
            ],
            Self::InvalidCacheDirectory { path } => vec![
                format!("Create the directory first: {}", path.display()),
                format!(
                    "Or point `{}` at an existing directory",
                    keys::BUILD_CACHE_DIR_PROPERTY
                ),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::MissingConfiguration { .. }
            | Self::MissingCredential { .. }
            | Self::InvalidCacheDirectory { .. } => ErrorCategory::Configuration,
        }
    }
}
