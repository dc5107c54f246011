//! Project scaffolding pipeline
//!
//! The pipeline is strictly linear and single-pass:
//! root creation -> package directory creation -> config-file copy ->
//! resource-tree copy -> pruning. No step branches on file content and no
//! step aborts the ones after it; every outcome lands in the report.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::package_path::PackagePath;
use crate::domain::ports::{CopyOutcome, FileStore, FsResult};
use crate::domain::report::{GenerationReport, Outcome, Step};
use crate::domain::request::{validate_project_name, GenerationRequest};
use crate::error::MasonResult;

/// Source root for the generated package directory chain
pub const JAVA_SOURCE_DIR: &str = "src/main/java";
/// Resource subtree copied wholesale from the template
pub const RESOURCES_DIR: &str = "src/main/resources";

/// Orchestrates end-to-end project generation against a FileStore
pub struct Scaffolder<'a, S: FileStore> {
    store: &'a S,
    config: &'a Config,
}

impl<'a, S: FileStore> Scaffolder<'a, S> {
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Generate a complete target project from a validated request.
    ///
    /// Best-effort: a missing template resource or a failed step is
    /// recorded and the pipeline continues with the next independent step.
    /// Repeated invocations with identical inputs converge to the same
    /// on-disk state.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationReport {
        let project_root = self.config.paths.output_root.join(request.project_name());
        let mut report = GenerationReport::new(project_root.clone());

        // 1. Project root (idempotent; pre-existing contents are kept)
        report.record(
            Step::ProjectRoot,
            outcome_of(self.store.create_dir(&project_root)),
        );

        // 2. Package directory chain, one level per prefix
        let chain = PackagePath::resolve(request.project_name(), request.package_name());
        let source_root = project_root.join(JAVA_SOURCE_DIR);
        for prefix in chain.prefixes() {
            let outcome = outcome_of(self.store.create_dir(&source_root.join(&prefix)));
            report.record(Step::PackageDir(display_rel(&prefix)), outcome);
        }

        // 3. Fixed manifest of config/metadata files
        for name in &self.config.template.manifest {
            let src = self.config.paths.template_root.join(name);
            let dst = project_root.join(name);
            let outcome = copy_outcome_of(self.store.copy_file(&src, &dst));
            report.record(Step::ConfigFile(name.clone()), outcome);
        }

        // 4. Resource subtree, wholesale
        let outcome = copy_outcome_of(self.store.copy_dir(
            &self.config.paths.template_root.join(RESOURCES_DIR),
            &project_root.join(RESOURCES_DIR),
        ));
        report.record(Step::ResourceTree, outcome);

        // 5. Prune placeholder artifacts (no-op when absent)
        for rel in &self.config.template.pruned {
            let target = project_root.join(RESOURCES_DIR).join(rel);
            let outcome = outcome_of(self.store.delete_file(&target));
            report.record(Step::Prune(rel.clone()), outcome);
        }

        report
    }

    /// Remove a previously generated project tree.
    ///
    /// Validates the project name first so a malformed name can never turn
    /// into a recursive delete outside the output root. No-op if the
    /// project does not exist. Returns the removed root.
    pub fn clean(&self, project_name: &str) -> MasonResult<PathBuf> {
        validate_project_name(project_name)?;
        let project_root = self.config.paths.output_root.join(project_name);
        self.store
            .delete_dir(&project_root)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(project_root)
    }
}

fn outcome_of(result: FsResult<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Done,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

fn copy_outcome_of(result: FsResult<CopyOutcome>) -> Outcome {
    match result {
        Ok(CopyOutcome::Copied) => Outcome::Done,
        Ok(CopyOutcome::SkippedMissing) => Outcome::SkippedMissing,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

fn display_rel(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
