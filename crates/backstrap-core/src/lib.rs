//! Backstrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Backstrap
//! Node.js backend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          backstrap-cli (CLI)            │
//! │     (prompts, flags, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (Filesystem, DependencyInstaller)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   backstrap-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem, npm)│
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectOptions, planner, templates,   │
//! │    composer, dependency resolver)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use backstrap_core::domain::{self, Database, Framework, LanguageVariant, ProjectOptions};
//!
//! let options = ProjectOptions::builder()
//!     .name("my-api").unwrap()
//!     .variant(LanguageVariant::Typed)
//!     .framework(Framework::Hono)
//!     .database(Database::MongoDb)
//!     .build()
//!     .unwrap();
//!
//! let composition = domain::compose(&options);
//! assert!(composition.file("src/config/db.ts").is_some());
//! assert!(composition.manifest.contains("mongoose"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ScaffoldReport, ScaffoldService,
        ports::{DependencyInstaller, Filesystem},
    };
    pub use crate::domain::{
        Composition, Database, DependencyManifest, DomainError, Framework, LanguageVariant, Orm,
        ProjectOptions, RoleKind,
    };
    pub use crate::error::{BackstrapError, BackstrapResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
