use serde::Serialize;

use crate::domain::entities::{
    common::RelativePath,
    file_plan::{FileRole, RoleKind},
    manifest::DependencyManifest,
};

/// A planned file with its final content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub role: FileRole,
    pub content: String,
}

/// Everything generation produces for one set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub files: Vec<RenderedFile>,
    pub manifest: DependencyManifest,
}

impl Composition {
    pub fn file(&self, path: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }

    pub fn first_of(&self, kind: RoleKind) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.role.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<RoleKind> {
        self.files.iter().map(|f| f.role.kind()).collect()
    }
}
