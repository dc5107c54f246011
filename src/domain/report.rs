//! Per-step generation report
//!
//! The pipeline is best-effort: a failed or skipped step never aborts the
//! remaining independent steps. Instead every step records its outcome here
//! so callers can distinguish "fully generated" from "generated with N
//! skipped resources".

use std::path::PathBuf;

use serde::Serialize;

/// One step of the scaffolding pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Creation of the target project root directory
    ProjectRoot,
    /// Creation of one package-chain directory (relative to the source root)
    PackageDir(String),
    /// Copy of one manifest config file (by file name)
    ConfigFile(String),
    /// Recursive copy of the template resource subtree
    ResourceTree,
    /// Removal of one placeholder artifact (relative to the resource root)
    Prune(String),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::ProjectRoot => write!(f, "project root"),
            Step::PackageDir(path) => write!(f, "package dir {}", path),
            Step::ConfigFile(name) => write!(f, "config file {}", name),
            Step::ResourceTree => write!(f, "resource tree"),
            Step::Prune(path) => write!(f, "prune {}", path),
        }
    }
}

/// Outcome of a single pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Step completed
    Done,
    /// Template resource was absent; step skipped, pipeline continued
    SkippedMissing,
    /// Step failed (I/O error); pipeline continued
    Failed(String),
}

/// A recorded `(step, outcome)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub outcome: Outcome,
}

/// Aggregated result of one `generate` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Root of the generated project tree
    pub project_root: PathBuf,
    steps: Vec<StepOutcome>,
}

impl GenerationReport {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, step: Step, outcome: Outcome) {
        self.steps.push(StepOutcome { step, outcome });
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// True when every step completed (nothing skipped, nothing failed).
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|s| s.outcome == Outcome::Done)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| s.outcome == Outcome::SkippedMissing)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_complete() {
        let report = GenerationReport::new(PathBuf::from("out/demo"));
        assert!(report.is_complete());
        assert_eq!(report.steps().len(), 0);
    }

    #[test]
    fn report_with_only_done_steps_is_complete() {
        let mut report = GenerationReport::new(PathBuf::from("out/demo"));
        report.record(Step::ProjectRoot, Outcome::Done);
        report.record(Step::ConfigFile("pom.xml".into()), Outcome::Done);
        assert!(report.is_complete());
    }

    #[test]
    fn skipped_step_makes_report_incomplete() {
        let mut report = GenerationReport::new(PathBuf::from("out/demo"));
        report.record(Step::ProjectRoot, Outcome::Done);
        report.record(Step::ConfigFile("Dockerfile".into()), Outcome::SkippedMissing);
        assert!(!report.is_complete());
        assert_eq!(report.skipped().count(), 1);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn failures_are_counted_separately() {
        let mut report = GenerationReport::new(PathBuf::from("out/demo"));
        report.record(Step::ResourceTree, Outcome::Failed("disk full".into()));
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.skipped().count(), 0);
    }

    #[test]
    fn step_display_names() {
        assert_eq!(Step::ProjectRoot.to_string(), "project root");
        assert_eq!(
            Step::PackageDir("a/b".into()).to_string(),
            "package dir a/b"
        );
        assert_eq!(
            Step::ConfigFile("pom.xml".into()).to_string(),
            "config file pom.xml"
        );
        assert_eq!(
            Step::Prune("mapper/user.xml".into()).to_string(),
            "prune mapper/user.xml"
        );
    }
}
