//! Command implementations.
//!
//! Each command lives in its own module with a single `execute` entry point
//! taking the parsed arguments plus whatever slice of the global state it
//! needs.  Handlers build their services from the adapter crate, call into
//! `baseline-core`, and format the result; no business rules live here.

pub mod cache;
pub mod check;
pub mod completions;
pub mod config;
pub mod header;
pub mod publish;
pub mod toolchain;
