//! localetypes CLI
//!
//! Usage: localetypes <COMMAND>
//!
//! Commands:
//!   generate  Regenerate the declaration file once
//!   check     Validate the plugin options
//!   resolve   Resolve an import specifier through the plugin
//!   watch     Keep the declaration file current

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project = commands::Project::locate(cli.config.as_deref())?;
    localetypes::logging::init_with_config(&project.config.logging, cli.verbose);
    project.report_warnings(cli.json);

    match cli.command {
        Commands::Generate { target, stdout } => {
            commands::generate::cmd_generate(&project, target, stdout, cli.json)
        }
        Commands::Check => commands::check::cmd_check(&project, cli.json),
        Commands::Resolve { specifier, from } => {
            commands::resolve::cmd_resolve(&project, &specifier, from.as_deref(), cli.json)
        }
        Commands::Watch => commands::watch::cmd_watch(&project, cli.json),
    }
}
