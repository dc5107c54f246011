//! Mason CLI - template-driven project scaffolding tool
//!
//! Usage: mason <COMMAND>
//!
//! Commands:
//!   generate  Scaffold a new project from the template
//!   clean     Remove a previously generated project

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{cmd_clean, cmd_generate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            project,
            package,
            template_root,
            output_root,
            config,
        } => cmd_generate(
            &project,
            &package,
            template_root,
            output_root,
            config.as_deref(),
            cli.json,
        ),
        Commands::Clean {
            project,
            output_root,
            config,
        } => cmd_clean(&project, output_root, config.as_deref(), cli.json),
    }
}
