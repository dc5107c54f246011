//! Validated generation request
//!
//! The pipeline itself never inspects path strings; all input validation
//! happens here, once, when the request is constructed. Malformed package
//! names (empty dot-separated segments) and project names that are not a
//! single filesystem segment are rejected up front rather than propagated
//! as broken paths.

use crate::error::{MasonError, MasonResult};

/// A validated `(project name, package name)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    project_name: String,
    package_name: String,
}

impl GenerationRequest {
    /// Validate and construct a request.
    ///
    /// Rules:
    /// - project name: non-empty, no path separators, not `.` or `..`
    /// - package name: one or more dot-separated non-empty segments
    pub fn new(project_name: &str, package_name: &str) -> MasonResult<Self> {
        validate_project_name(project_name)?;
        validate_package_name(package_name)?;
        Ok(Self {
            project_name: project_name.to_string(),
            package_name: package_name.to_string(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// Check that a project name is a single, non-empty filesystem segment.
///
/// Also used on its own by operations that take only a project name, such
/// as cleanup of a generated project.
pub fn validate_project_name(name: &str) -> MasonResult<()> {
    let invalid = |reason: &str| MasonError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("must not be a relative path component"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("must not contain path separators"));
    }
    Ok(())
}

fn validate_package_name(name: &str) -> MasonResult<()> {
    let invalid = |reason: &str| MasonError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(invalid("empty segment (leading, trailing, or doubled dot)"));
        }
        if segment.contains('/') || segment.contains('\\') {
            return Err(invalid("segment must not contain path separators"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_request() {
        let req = GenerationRequest::new("demo", "com.example.app").unwrap();
        assert_eq!(req.project_name(), "demo");
        assert_eq!(req.package_name(), "com.example.app");
    }

    #[test]
    fn accepts_single_segment_package() {
        assert!(GenerationRequest::new("demo", "com").is_ok());
    }

    #[test]
    fn rejects_empty_project_name() {
        let err = GenerationRequest::new("", "com.example").unwrap_err();
        assert!(matches!(err, MasonError::InvalidProjectName { .. }));
    }

    #[test]
    fn rejects_project_name_with_separator() {
        assert!(GenerationRequest::new("a/b", "com.example").is_err());
        assert!(GenerationRequest::new("a\\b", "com.example").is_err());
    }

    #[test]
    fn rejects_dot_project_names() {
        assert!(GenerationRequest::new(".", "com.example").is_err());
        assert!(GenerationRequest::new("..", "com.example").is_err());
    }

    #[test]
    fn rejects_empty_package_name() {
        let err = GenerationRequest::new("demo", "").unwrap_err();
        assert!(matches!(err, MasonError::InvalidPackageName { .. }));
    }

    #[test]
    fn rejects_empty_package_segments() {
        assert!(GenerationRequest::new("demo", "a..b").is_err());
        assert!(GenerationRequest::new("demo", ".a.b").is_err());
        assert!(GenerationRequest::new("demo", "a.b.").is_err());
    }

    #[test]
    fn rejects_separator_in_package_segment() {
        assert!(GenerationRequest::new("demo", "a.b/c").is_err());
    }
}
