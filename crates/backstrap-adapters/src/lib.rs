//! Infrastructure adapters for Backstrap.
//!
//! This crate implements the ports defined in `backstrap-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::NpmInstaller;
