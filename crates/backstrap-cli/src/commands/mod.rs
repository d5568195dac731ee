//! Command handlers. Each module exposes an `execute` function that `main`
//! dispatches to.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod plan;

mod selection;

pub use selection::{Selection, show_options};
