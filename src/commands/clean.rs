//! Clean command - remove a previously generated project

use std::path::{Path, PathBuf};

use anyhow::Result;

use mason::{Config, LocalStore, Scaffolder};

pub fn cmd_clean(
    project: &str,
    output_root: Option<PathBuf>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(root) = output_root {
        config.paths.output_root = root;
    }

    let store = LocalStore::new();
    let scaffolder = Scaffolder::new(&store, &config);
    let removed = scaffolder.clean(project)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "clean",
                "project": project,
                "path": removed.display().to_string(),
            })
        );
    } else {
        println!("Removed {}", removed.display());
    }

    Ok(())
}
