//! Error types for Mason
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mason operations
pub type MasonResult<T> = Result<T, MasonError>;

/// Main error type for Mason operations
#[derive(Error, Debug)]
pub enum MasonError {
    /// Project name is empty or not a single filesystem segment
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// Package name is empty or contains empty dot-separated segments
    #[error("invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    /// Template root directory does not exist
    #[error("template root not found: {path}")]
    TemplateRootNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_project_name() {
        let err = MasonError::InvalidProjectName {
            name: "a/b".to_string(),
            reason: "must not contain path separators".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid project name 'a/b': must not contain path separators"
        );
    }

    #[test]
    fn test_error_display_invalid_package_name() {
        let err = MasonError::InvalidPackageName {
            name: "a..b".to_string(),
            reason: "empty segment".to_string(),
        };
        assert_eq!(err.to_string(), "invalid package name 'a..b': empty segment");
    }

    #[test]
    fn test_error_display_template_root_not_found() {
        let err = MasonError::TemplateRootNotFound {
            path: PathBuf::from("/missing/template"),
        };
        assert_eq!(err.to_string(), "template root not found: /missing/template");
    }
}
