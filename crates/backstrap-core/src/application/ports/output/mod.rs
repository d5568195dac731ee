//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `backstrap-adapters` crate provides implementations.

use crate::domain::DependencyManifest;
use crate::error::BackstrapResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `backstrap_adapters::filesystem::LocalFilesystem` (production)
/// - `backstrap_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every path handed to the port is already joined onto the explicit project
/// root; adapters never consult the process working directory.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BackstrapResult<()>;

    /// Write content to a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &str) -> BackstrapResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents. Used for rollback only.
    fn remove_dir_all(&self, path: &Path) -> BackstrapResult<()>;
}

/// Port for installing the packages of a generated project.
///
/// Implemented by `backstrap_adapters::installer::NpmInstaller`.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// Install `manifest` into the project at `root`.
    fn install(&self, root: &Path, manifest: &DependencyManifest) -> BackstrapResult<()>;
}
