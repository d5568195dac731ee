//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Compose files and manifest from the options
//! 2. Lay them out under the explicit project root and validate
//! 3. Write to the filesystem, rolling back on failure
//! 4. Optionally install dependencies
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DependencyInstaller, Filesystem},
    },
    domain::{
        self, Composition, DependencyManifest, DomainValidator as validator, FsEntry,
        ProjectOptions, ProjectStructure,
    },
    error::{BackstrapError, BackstrapResult},
};

/// What a scaffold run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    /// Absolute or caller-relative project root.
    pub root: PathBuf,
    /// Written files, relative to `root`, in write order.
    pub files: Vec<PathBuf>,
    pub directories: usize,
    pub manifest: DependencyManifest,
    /// Whether the dependency installer ran successfully.
    pub installed: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    installer: Option<Box<dyn DependencyInstaller>>,
}

impl ScaffoldService {
    /// Create a service that writes files but never installs packages.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            installer: None,
        }
    }

    /// Attach a dependency installer, run after all files are written.
    pub fn with_installer(mut self, installer: Box<dyn DependencyInstaller>) -> Self {
        self.installer = Some(installer);
        self
    }

    pub fn has_installer(&self) -> bool {
        self.installer.is_some()
    }

    /// Compose without touching the filesystem.
    pub fn preview(&self, options: &ProjectOptions) -> Composition {
        domain::compose(options)
    }

    /// Root directory a project named by `options` gets under `parent`.
    pub fn project_root(options: &ProjectOptions, parent: &Path) -> PathBuf {
        parent.join(options.name().as_str())
    }

    /// Write the project, then install dependencies if an installer is set.
    ///
    /// An install failure leaves the written files in place.
    #[instrument(skip_all, fields(project = %options.name(), parent = %parent.as_ref().display()))]
    pub fn scaffold(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
    ) -> BackstrapResult<ScaffoldReport> {
        let mut report = self.write(options, parent)?;
        report.installed = self.install(&report)?;
        Ok(report)
    }

    /// Compose and write the project under `parent/<name>`.
    #[instrument(skip_all, fields(project = %options.name()))]
    pub fn write(
        &self,
        options: &ProjectOptions,
        parent: impl AsRef<Path>,
    ) -> BackstrapResult<ScaffoldReport> {
        info!(options = %options, "Scaffolding project");

        let composition = domain::compose(options);
        let root = Self::project_root(options, parent.as_ref());
        let structure = ProjectStructure::from_composition(root.clone(), &composition);

        validator::validate_project_structure(&structure).map_err(BackstrapError::Domain)?;
        debug!(entries = structure.entry_count(), "Structure validated");

        self.write_structure(&structure)?;

        info!(root = %root.display(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            root,
            files: structure
                .files()
                .map(|f| f.path.as_path().to_path_buf())
                .collect(),
            directories: structure.directories().count(),
            manifest: composition.manifest,
            installed: false,
        })
    }

    /// Run the installer for a written project. Returns `false` when no
    /// installer is configured.
    #[instrument(skip_all, fields(root = %report.root.display()))]
    pub fn install(&self, report: &ScaffoldReport) -> BackstrapResult<bool> {
        let Some(installer) = &self.installer else {
            debug!("No installer configured, skipping");
            return Ok(false);
        };

        info!(
            runtime = report.manifest.dependencies().len(),
            dev = report.manifest.dev_dependencies().len(),
            "Installing dependencies"
        );
        installer.install(&report.root, &report.manifest)?;
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> BackstrapResult<()> {
        if self.filesystem.exists(&structure.root) {
            return Err(ApplicationError::ProjectExists {
                path: structure.root.clone(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(&structure.root);
                Err(e)
            }
        }
    }

    /// Root first, then directories, then files.
    fn write_all(&self, structure: &ProjectStructure) -> BackstrapResult<()> {
        self.filesystem.create_dir_all(&structure.root)?;

        for entry in &structure.entries {
            let path = structure.root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    debug!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    debug!(path = %path.display(), bytes = file.size(), "Writing file");
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
