use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{
    entities::{common::RelativePath, composition::Composition},
    error::DomainError,
};

/// Final project structure ready for materialization.
///
/// Directory actions come first (shallowest first), then file actions in
/// plan order. Paths are relative to `root`.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Lay out a composition under `root`: every implied directory, then
    /// every file.
    pub fn from_composition(root: impl Into<PathBuf>, composition: &Composition) -> Self {
        let mut structure = Self::new(root);
        let mut seen = HashSet::new();

        for file in &composition.files {
            for dir in file.path.ancestors() {
                if seen.insert(dir.clone()) {
                    structure.add_directory(dir);
                }
            }
        }
        for file in &composition.files {
            structure.add_file(file.path.clone(), file.content.clone());
        }
        structure
    }

    pub fn add_file(&mut self, path: impl Into<RelativePath>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<RelativePath>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path().as_path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
