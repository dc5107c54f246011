//! Mason - template-driven project scaffolding tool
//!
//! Mason derives a new source-project skeleton from a fixed template project:
//! it resolves a dotted package identifier into a nested directory chain,
//! copies a manifest of configuration files and the template's resource
//! subtree into the new project, then prunes template-only placeholders so
//! the output is immediately buildable.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::Scaffolder;
pub use config::{Config, PathsConfig, TemplateConfig};
pub use domain::package_path::PackagePath;
pub use domain::ports::{CopyOutcome, FileStore, FsError, FsResult};
pub use domain::report::{GenerationReport, Outcome, Step, StepOutcome};
pub use domain::request::GenerationRequest;
pub use error::{MasonError, MasonResult};
pub use infrastructure::fs::LocalStore;
