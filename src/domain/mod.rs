//! Domain layer - pure scaffolding logic and port definitions
//!
//! Nothing in this module touches the filesystem directly; all I/O goes
//! through the `ports::FileStore` abstraction.

pub mod package_path;
pub mod ports;
pub mod report;
pub mod request;
