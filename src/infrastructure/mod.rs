//! Infrastructure layer - concrete implementations of domain ports

pub mod fs;
