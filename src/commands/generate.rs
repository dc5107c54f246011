//! Generate command - scaffold a new project from the template

use std::path::{Path, PathBuf};

use anyhow::Result;

use mason::{
    Config, GenerationReport, GenerationRequest, LocalStore, MasonError, Outcome, Scaffolder,
};

/// Generate a project. Partial generation (skipped or failed steps) is
/// reported as warnings, not a process failure; only invalid input or an
/// absent template root aborts.
pub fn cmd_generate(
    project: &str,
    package: &str,
    template_root: Option<PathBuf>,
    output_root: Option<PathBuf>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(root) = template_root {
        config.paths.template_root = root;
    }
    if let Some(root) = output_root {
        config.paths.output_root = root;
    }

    let request = GenerationRequest::new(project, package)?;

    if !config.paths.template_root.is_dir() {
        return Err(MasonError::TemplateRootNotFound {
            path: config.paths.template_root.clone(),
        }
        .into());
    }

    let store = LocalStore::new();
    let scaffolder = Scaffolder::new(&store, &config);
    let report = scaffolder.generate(&request);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "generate",
                "project": request.project_name(),
                "package": request.package_name(),
                "complete": report.is_complete(),
                "report": report,
            })
        );
    } else {
        print_report(&request, &report);
    }

    Ok(())
}

fn print_report(request: &GenerationRequest, report: &GenerationReport) {
    for step in report.steps() {
        match &step.outcome {
            Outcome::Done => {}
            Outcome::SkippedMissing => {
                eprintln!("warning: skipped {} (missing in template)", step.step);
            }
            Outcome::Failed(reason) => {
                eprintln!("warning: failed {}: {}", step.step, reason);
            }
        }
    }

    let skipped = report.skipped().count();
    let failed = report.failures().count();
    if report.is_complete() {
        println!(
            "Generated {} at {} ({} steps)",
            request.project_name(),
            report.project_root.display(),
            report.steps().len()
        );
    } else {
        println!(
            "Generated {} at {} with {} skipped, {} failed",
            request.project_name(),
            report.project_root.display(),
            skipped,
            failed
        );
    }
}
