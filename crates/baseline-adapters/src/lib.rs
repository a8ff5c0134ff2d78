//! Infrastructure adapters for Baseline.
//!
//! This crate implements the ports defined in
//! `baseline_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod config_source;
pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use config_source::{MemoryConfigSource, ProcessConfigSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::BuiltinTemplates;
