use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Dev,
}

/// Resolved packages and scripts for a generated project.
///
/// Insertion order is preserved and the first insertion of a package wins,
/// so adding `typescript` twice (once as dev, once as runtime) keeps it a
/// dev dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyManifest {
    packages: IndexMap<String, DependencyKind>,
    scripts: IndexMap<String, String>,
}

impl DependencyManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, package: &str, kind: DependencyKind) -> &mut Self {
        self.packages.entry(package.to_string()).or_insert(kind);
        self
    }

    pub fn runtime(&mut self, packages: &[&str]) -> &mut Self {
        for p in packages {
            self.add(p, DependencyKind::Runtime);
        }
        self
    }

    pub fn dev(&mut self, packages: &[&str]) -> &mut Self {
        for p in packages {
            self.add(p, DependencyKind::Dev);
        }
        self
    }

    pub fn script(&mut self, name: &str, command: impl Into<String>) -> &mut Self {
        self.scripts.insert(name.to_string(), command.into());
        self
    }

    pub fn packages(&self) -> impl Iterator<Item = (&str, DependencyKind)> {
        self.packages.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn dependencies(&self) -> Vec<&str> {
        self.of_kind(DependencyKind::Runtime)
    }

    pub fn dev_dependencies(&self) -> Vec<&str> {
        self.of_kind(DependencyKind::Dev)
    }

    fn of_kind(&self, kind: DependencyKind) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    pub fn kind_of(&self, package: &str) -> Option<DependencyKind> {
        self.packages.get(package).copied()
    }

    pub fn scripts(&self) -> &IndexMap<String, String> {
        &self.scripts
    }

    pub fn script_command(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
