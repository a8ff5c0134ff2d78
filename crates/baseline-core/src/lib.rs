//! Baseline Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Baseline
//! project-standards toolkit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          baseline-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (HeaderService, PublishService,         │
//! │  EnvironmentService)                    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: ConfigSource, Filesystem,      │
//! │  TemplateStore)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    baseline-adapters (Infrastructure)   │
//! │ (ProcessConfigSource, LocalFilesystem,  │
//! │  BuiltinTemplates, etc)                 │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (LicenseKind, PublicationDecision,      │
//! │  OperatingSystem, RuntimeVersion)       │
//! │       No I/O, No Host Lookups           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use baseline_core::domain::{
//!     LicenseParameters, LineEnding, render_header,
//! };
//!
//! let params = LicenseParameters::new("mylib", "an internal library", "2026");
//! let header = render_header(
//!     "{{ Emoji }} {{ Name }}: {{ Description }}\nCopyright (c) {{ CurrentYear }}",
//!     &params,
//!     LineEnding::Lf,
//! );
//! assert!(header.as_str().starts_with("mylib: an internal library"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EnvironmentService, HeaderService, PublishService,
        ports::{ConfigSource, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Architecture, LicenseKind, LicenseParameters, LineEnding, OperatingSystem,
        PublicationDecision, PublicationRequest, RenderedHeader, RuntimeVersion,
    };
    pub use crate::error::{BaselineError, BaselineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
