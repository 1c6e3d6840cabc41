//! tailcfg CLI
//!
//! Loads a utility-class CSS generator configuration, resolves it and
//! prints the result for inspection or for other build steps.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} utility-class configuration resolver", "tailcfg".green().bold());
            println!();
            println!("Run {} for available commands.", "tailcfg --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { path, base, json } => {
            commands::run_resolve(&path, base.as_deref(), json)
        }
        Commands::Check { path } => commands::run_check(&path),
    }
}
