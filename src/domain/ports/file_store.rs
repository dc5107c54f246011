//! FileStore port - abstraction over filesystem primitives
//!
//! This trait allows the scaffolding pipeline to create, copy, and delete
//! files without depending on a concrete implementation (local disk, mock).

use std::path::{Path, PathBuf};

/// Result type for file store operations
pub type FsResult<T> = Result<T, FsError>;

/// File store operation errors
#[derive(Debug)]
pub enum FsError {
    /// Path not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path exists but is not a directory
    NotADirectory(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::Io(err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::NotADirectory(path) => {
                write!(f, "exists but is not a directory: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Result of a copy primitive: a missing source is a reported no-op,
/// not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source existed and was copied
    Copied,
    /// Source did not exist; nothing was created at the destination
    SkippedMissing,
}

/// Abstract filesystem interface for scaffolding
///
/// Implementations:
/// - `LocalStore` - standard file I/O
/// - in-memory fakes for testing the pipeline's error aggregation
pub trait FileStore {
    /// Ensure `path` exists as a directory, creating all missing ancestors.
    /// Succeeds silently if the directory already exists.
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Copy a single file, bytes verbatim. Creates the destination's parent
    /// directories and overwrites an existing destination. A missing source
    /// yields `CopyOutcome::SkippedMissing`.
    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<CopyOutcome>;

    /// Recursively copy a directory subtree, preserving relative structure.
    /// Pre-existing destination files are overwritten. A missing source
    /// yields `CopyOutcome::SkippedMissing`.
    fn copy_dir(&self, src: &Path, dst: &Path) -> FsResult<CopyOutcome>;

    /// Delete exactly one regular file. No-op if `path` is a directory or
    /// does not exist; never recurses.
    fn delete_file(&self, path: &Path) -> FsResult<()>;

    /// Recursively delete a directory and its contents. No-op if `path` is
    /// a regular file or does not exist.
    fn delete_dir(&self, path: &Path) -> FsResult<()>;

    /// Read a UTF-8 text file into ordered lines, dropping blank lines and
    /// lines beginning with `#`. A missing file yields an empty list.
    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>>;
}
