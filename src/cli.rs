use std::path::PathBuf;

use clap::{Parser, Subcommand};
use localetypes::Target;

/// localetypes - typed i18n modules for TypeScript
#[derive(Parser, Debug)]
#[command(name = "localetypes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to localetypes.toml (default: nearest one above the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the declaration file once
    Generate {
        /// What to generate
        #[arg(short, long, default_value = "type")]
        target: Target,

        /// Print to stdout instead of writing the output file
        #[arg(long)]
        stdout: bool,
    },

    /// Validate the plugin options against the locales directory
    Check,

    /// Resolve an import specifier the way the plugin-enabled host would
    Resolve {
        /// Import specifier (e.g. the configured module name)
        specifier: String,

        /// File containing the import (default: <project>/index.ts)
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Keep the declaration file current while locale files change
    Watch,
}
