//! Core domain layer for Backstrap.
//!
//! Pure business logic: options in, file contents and dependency manifest
//! out. All I/O happens behind the ports defined in the application layer.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectOptions ──► layout::plan ──► FilePlan
//!        │                               │
//!        │                               ▼ templates::*
//!        └──────► dependencies::resolve ──► composer::compose ──► Composition
//! ```
//!
//! - **No async**, **no I/O**, **no tracing**
//! - **Immutable entities**: everything is built once and never mutated

pub mod composer;
pub mod databases;
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod layout;
pub mod templates;
pub mod value_objects;

mod validation;

pub use composer::compose;
pub use dependencies::resolve;
pub use layout::plan;

pub use entities::{
    Composition, DependencyKind, DependencyManifest, FilePlan, FilePlanEntry, FileRole,
    OptionsBuilder, ProjectName, ProjectOptions, ProjectStructure, RelativePath, RenderedFile,
    RoleKind,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Database, Framework, LanguageVariant, Orm};

pub use validation::DomainValidator;
