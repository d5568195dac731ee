//! Dependency installer adapters.

mod npm;

pub use npm::{InstallCommand, NpmInstaller};
