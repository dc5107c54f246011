//! Package directory chain derived from a dotted package identifier
//!
//! `com.example.app` + project `demo` resolves to the chain
//! `["com", "example", "app", "demo"]`; each prefix of the chain is one
//! directory level under the generated project's Java source root.

use std::path::PathBuf;

/// Ordered directory segments for a Java-style package layout, ending in a
/// project-named leaf segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePath {
    segments: Vec<String>,
}

impl PackagePath {
    /// Resolve a dotted package identifier plus a project name into a
    /// directory chain.
    ///
    /// Pure split-and-append: splits on the literal `.`, preserving order
    /// and discarding nothing, then appends the project name as the final
    /// segment. Malformed input (empty segments from doubled or edge dots)
    /// passes through structurally; callers validate via
    /// [`crate::domain::request::GenerationRequest`].
    pub fn resolve(project_name: &str, package_name: &str) -> Self {
        let mut segments: Vec<String> =
            package_name.split('.').map(str::to_string).collect();
        segments.push(project_name.to_string());
        Self { segments }
    }

    /// The full ordered chain, project name last.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Incrementally deeper relative paths, one per chain prefix:
    /// `a/`, `a/b/`, `a/b/proj/`. Each corresponds to one directory that
    /// must exist under the generated source root.
    pub fn prefixes(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.segments.len()).map(|depth| self.segments[..depth].iter().collect())
    }

    /// The deepest directory in the chain, relative to the source root.
    pub fn leaf(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_splits_on_dots_and_appends_project() {
        let chain = PackagePath::resolve("proj", "a.b.c");
        assert_eq!(chain.segments(), &["a", "b", "c", "proj"]);
    }

    #[test]
    fn resolve_single_segment_package() {
        let chain = PackagePath::resolve("demo", "com");
        assert_eq!(chain.segments(), &["com", "demo"]);
    }

    #[test]
    fn resolve_preserves_empty_segments() {
        // Structural passthrough; validation happens in GenerationRequest.
        let chain = PackagePath::resolve("p", "a..b");
        assert_eq!(chain.segments(), &["a", "", "b", "p"]);
    }

    #[test]
    fn prefixes_are_incrementally_deeper() {
        let chain = PackagePath::resolve("proj", "a.b");
        let prefixes: Vec<PathBuf> = chain.prefixes().collect();
        assert_eq!(
            prefixes,
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/b"),
                PathBuf::from("a/b/proj"),
            ]
        );
    }

    #[test]
    fn leaf_is_full_chain() {
        let chain = PackagePath::resolve("proj", "com.example");
        assert_eq!(chain.leaf(), PathBuf::from("com/example/proj"));
    }
}
