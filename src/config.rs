//! Configuration module for Mason
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command layer)
//! 2. Environment variables (`MASON_TEMPLATE_ROOT`, `MASON_OUTPUT_ROOT`)
//! 3. Project config (`./mason.toml`)
//! 4. User config (`~/.config/mason/config.toml`)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MasonError, MasonResult};

/// Environment variable overriding the template root
pub const TEMPLATE_ROOT_VAR: &str = "MASON_TEMPLATE_ROOT";
/// Environment variable overriding the output root
pub const OUTPUT_ROOT_VAR: &str = "MASON_OUTPUT_ROOT";

/// Filesystem roots the scaffolder reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the read-only template project
    #[serde(default = "default_template_root")]
    pub template_root: PathBuf,

    /// Directory under which generated projects are created
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template_root: default_template_root(),
            output_root: default_output_root(),
        }
    }
}

fn default_template_root() -> PathBuf {
    PathBuf::from("model-project")
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

/// What to take from the template, and what to prune afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Top-level template files copied into the generated project root
    #[serde(default = "default_manifest")]
    pub manifest: Vec<String>,

    /// Placeholder artifacts removed after the resource copy, relative to
    /// the resource root
    #[serde(default = "default_pruned")]
    pub pruned: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            pruned: default_pruned(),
        }
    }
}

fn default_manifest() -> Vec<String> {
    ["Dockerfile", "pom.xml", "README.md", "startup.sh"]
        .map(String::from)
        .to_vec()
}

fn default_pruned() -> Vec<String> {
    vec!["mapper/user.xml".to_string()]
}

/// Mason configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub template: TemplateConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path, that file must exist and parse. Otherwise the
    /// first of `./mason.toml` and the user config that exists is used, and
    /// built-in defaults apply when neither does. Environment overrides are
    /// applied last.
    pub fn load(explicit: Option<&Path>) -> MasonResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = PathBuf::from("mason.toml");
                if project.is_file() {
                    Self::from_file(&project)?
                } else if let Some(user) = default_user_config_path().filter(|p| p.is_file()) {
                    Self::from_file(&user)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a single TOML config file.
    pub fn from_file(path: &Path) -> MasonResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MasonError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply `MASON_*` environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(root) = std::env::var(TEMPLATE_ROOT_VAR) {
            if !root.is_empty() {
                self.paths.template_root = PathBuf::from(root);
            }
        }
        if let Ok(root) = std::env::var(OUTPUT_ROOT_VAR) {
            if !root.is_empty() {
                self.paths.output_root = PathBuf::from(root);
            }
        }
    }
}

/// Default user config location (`~/.config/mason/config.toml` on Linux)
pub fn default_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mason").join("config.toml"))
}
