//! File store implementations
//!
//! Concrete implementations of the FileStore port.

mod local;

pub use local::LocalStore;
