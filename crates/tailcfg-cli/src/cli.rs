//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tailcfg - Resolve utility-class CSS generator configuration
#[derive(Parser, Debug)]
#[command(name = "tailcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a configuration and print the result
    ///
    /// Examples:
    ///   tailcfg resolve                          # Config in current directory
    ///   tailcfg resolve frontend/                # Config in frontend/
    ///   tailcfg resolve tailwind.config.toml --json
    ///   tailcfg resolve --base base-theme.json   # Also print the merged theme
    Resolve {
        /// Configuration file or project directory
        #[arg(env = "TAILCFG_CONFIG", default_value = ".")]
        path: PathBuf,

        /// Base theme (JSON, TOML or YAML) to merge extensions onto
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check that a configuration resolves without errors
    Check {
        /// Configuration file or project directory
        #[arg(env = "TAILCFG_CONFIG", default_value = ".")]
        path: PathBuf,
    },
}
