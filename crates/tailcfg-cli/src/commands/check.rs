//! Check command

use std::path::Path;

use colored::Colorize;
use tailcfg_core::{ConfigLocator, load_and_resolve};

use crate::error::Result;

/// Load and resolve the configuration at `path`, reporting success
///
/// Failures propagate to `main`, which prints them and exits non-zero.
pub fn run_check(path: &Path) -> Result<()> {
    let config_path = ConfigLocator::resolve_path(path)?;
    tracing::debug!(?config_path, "Checking configuration");

    let config = load_and_resolve(&config_path)?;

    println!(
        "{} {} ({} content globs, dark mode: {})",
        "ok".green().bold(),
        config_path.display(),
        config.content_globs().len(),
        config.dark_mode()
    );
    Ok(())
}
