//! Ports (interfaces) between the application core and the outside world.
//!
//! The core depends only on these traits. Concrete adapters live in the
//! `baseline-adapters` crate and are injected at the composition root.

pub mod output;

pub use output::{ConfigSource, Filesystem, TemplateStore};
