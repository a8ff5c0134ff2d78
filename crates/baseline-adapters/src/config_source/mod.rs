//! Configuration source adapters.

pub mod memory;
pub mod process;

pub use memory::MemoryConfigSource;
pub use process::ProcessConfigSource;
