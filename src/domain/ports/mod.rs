//! Ports - abstractions the domain depends on
//!
//! Concrete implementations live in the `infrastructure` layer.

mod file_store;

pub use file_store::{CopyOutcome, FileStore, FsError, FsResult};
