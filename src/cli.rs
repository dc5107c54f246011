use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mason - template-driven project scaffolding tool
#[derive(Parser, Debug)]
#[command(name = "mason")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new project from the template
    Generate {
        /// Name of the project to generate (single path segment)
        project: String,

        /// Dotted package identifier, e.g. com.example.app
        package: String,

        /// Root of the template project (overrides config)
        #[arg(long)]
        template_root: Option<PathBuf>,

        /// Directory to generate the project under (overrides config)
        #[arg(long)]
        output_root: Option<PathBuf>,

        /// Path to a mason.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Remove a previously generated project
    Clean {
        /// Name of the project to remove
        project: String,

        /// Directory the project was generated under (overrides config)
        #[arg(long)]
        output_root: Option<PathBuf>,

        /// Path to a mason.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
