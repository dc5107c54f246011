//! Application layer - scaffolding orchestration

mod scaffold;

pub use scaffold::{Scaffolder, JAVA_SOURCE_DIR, RESOURCES_DIR};
