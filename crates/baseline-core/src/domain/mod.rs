// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Baseline.
//!
//! This module contains pure business logic with no I/O and no host
//! lookups. Environment access, file reads, and template storage are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment calls
//! - **Pure helpers only**: std plus `thiserror`/`heck`/`serde` derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Total detection**: raw host strings map to closed enums, never panic
//!
// Public API - what the world sees
pub mod error;
pub mod keys;
pub mod license;
pub mod publication;
pub mod toolchain;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};

pub use license::{LicenseParameters, RenderedHeader, render_header};

pub use publication::{ArtifactSet, PublicationDecision, PublicationRequest, reconcile};

pub use toolchain::download_uri;

pub use value_objects::{Architecture, LicenseKind, LineEnding, OperatingSystem, RuntimeVersion};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Cross-module behavior
    // ========================================================================

    #[test]
    fn header_renders_end_to_end_from_kind_metadata() {
        let kind = LicenseKind::from_str("apache").unwrap();
        assert_eq!(kind, LicenseKind::Apache);

        let params = LicenseParameters::new("baseline", "project standards toolkit", "2026")
            .with_emoji("📐");
        let template = "{{ Emoji }} {{ Name }}: {{ Description }}\n\
                        Copyright {{ CurrentYear }}";
        let header = render_header(template, &params, OperatingSystem::Linux.line_ending());

        assert!(header.as_str().starts_with("📐 baseline: project standards toolkit"));
        assert!(header.as_str().ends_with("Copyright 2026\n"));
    }

    #[test]
    fn sibling_module_requests_reconcile_in_declaration_order() {
        let mut declared = BTreeSet::new();

        let java = reconcile(&PublicationRequest::new("infra", "java"), &mut declared);
        let kotlin = reconcile(&PublicationRequest::new("infra", "kotlin"), &mut declared);

        assert_eq!(java.resolved_name(), "infra");
        assert_eq!(kotlin.resolved_name(), "infraKotlin");

        let names: Vec<_> = declared.iter().cloned().collect();
        assert_eq!(names, vec!["infraKotlin".to_string()]);
    }

    #[test]
    fn toolchain_uri_respects_runtime_parse() {
        let version = RuntimeVersion::from_str("17.0.2").unwrap();
        let uri = download_uri(version, OperatingSystem::MacOs).unwrap();
        assert!(uri.contains("jdk_version=17"));
        assert!(uri.contains("operating_system=darwin"));
    }
}
