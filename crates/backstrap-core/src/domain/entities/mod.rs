pub mod common;
pub mod composition;
pub mod file_plan;
pub mod manifest;
pub mod options;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use common::{ProjectName, RelativePath};
pub use composition::{Composition, RenderedFile};
pub use file_plan::{FilePlan, FilePlanEntry, FileRole, RoleKind};
pub use manifest::{DependencyKind, DependencyManifest};
pub use options::{OptionsBuilder, ProjectOptions};
pub use project_structure::ProjectStructure;
