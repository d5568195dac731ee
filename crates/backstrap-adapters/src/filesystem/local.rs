//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use backstrap_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BackstrapError, BackstrapResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BackstrapResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BackstrapResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> BackstrapResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BackstrapError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes_a_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("demo");

        fs.create_dir_all(&root.join("src/config")).unwrap();
        fs.write_file(&root.join("src/config/config.js"), "export {};\n")
            .unwrap();
        assert!(fs.exists(&root.join("src/config/config.js")));
        assert_eq!(
            std::fs::read_to_string(root.join("src/config/config.js")).unwrap(),
            "export {};\n"
        );

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("missing/index.js");

        let err = fs.write_file(&target, "").unwrap_err();
        match err {
            BackstrapError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, target);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
