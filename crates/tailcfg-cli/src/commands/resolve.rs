//! Resolve command: print the resolved configuration

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;
use serde_json::{Value, json};
use tailcfg_core::{ConfigLocator, Configuration, ThemeTokens, load_and_resolve, load_document};

use crate::error::{CliError, Result};

/// Resolve the configuration at `path` and print it
pub fn run_resolve(path: &Path, base: Option<&Path>, json: bool) -> Result<()> {
    let config_path = ConfigLocator::resolve_path(path)?;
    let config = load_and_resolve(&config_path)?;
    let base_theme = base.map(load_base_theme).transpose()?;
    let merged = base_theme.as_ref().map(|base| config.theme().merge_onto(base));

    if json {
        let output = json_output(&config_path, &config, merged.as_ref());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render_summary(&config_path, &config));
    if let Some(merged) = &merged {
        print!("{}", render_theme(merged));
    }
    Ok(())
}

/// Load a base theme document; it must be a mapping of categories
fn load_base_theme(path: &Path) -> Result<ThemeTokens> {
    tracing::debug!(?path, "Loading base theme");
    match load_document(path)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(CliError::user(format!(
            "Base theme {} must be a mapping of token categories",
            path.display()
        ))),
    }
}

fn json_output(path: &Path, config: &Configuration, merged: Option<&ThemeTokens>) -> Value {
    let mut output = json!({
        "source": path.display().to_string(),
        "config": config,
    });
    if let Some(merged) = merged {
        output["mergedTheme"] = json!(merged);
    }
    output
}

fn render_summary(path: &Path, config: &Configuration) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", "Configuration".bold(), path.display());
    let _ = writeln!(out);
    let dark_mode = config.dark_mode();
    let _ = writeln!(out, "  {:<12} {}", "Dark mode:".dimmed(), dark_mode.name());
    if let Some(selector) = dark_mode.selector() {
        let _ = writeln!(out, "  {:<12} {}", "Dark under:".dimmed(), selector);
    }
    if !config.prefix().is_empty() {
        let _ = writeln!(out, "  {:<12} {}", "Prefix:".dimmed(), config.prefix());
    }
    let _ = writeln!(out, "  {:<12} {}", "Separator:".dimmed(), config.separator());
    let _ = writeln!(out);

    render_list(&mut out, "Content", config.content_globs().iter().map(String::as_str));

    let theme = config.theme();
    if theme.is_empty() {
        let _ = writeln!(out, "  {:<12} {}", "Theme:".dimmed(), "(none)".dimmed());
    } else {
        let _ = writeln!(out, "  {}:", "Theme".dimmed());
        for (category, value) in theme.overrides() {
            let _ = writeln!(out, "    {} {} (override)", "=".yellow(), category);
            render_tokens(&mut out, value);
        }
        for (category, value) in theme.extensions() {
            let _ = writeln!(out, "    {} {} (extend)", "+".green(), category);
            render_tokens(&mut out, value);
        }
    }
    let _ = writeln!(out);

    let plugins: Vec<String> = config
        .plugins()
        .iter()
        .map(|plugin| match plugin.identifier() {
            Some(id) => id.to_string(),
            None => plugin.as_value().to_string(),
        })
        .collect();
    render_list(&mut out, "Plugins", plugins.iter().map(String::as_str));

    if !config.safelist().is_empty() {
        render_list(&mut out, "Safelist", config.safelist().iter().map(String::as_str));
    }

    out
}

fn render_theme(merged: &ThemeTokens) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Merged theme".bold());
    let _ = writeln!(out);
    for (category, value) in merged {
        let _ = writeln!(out, "    {} {}", "*".cyan(), category);
        render_tokens(&mut out, value);
    }
    out
}

fn render_list<'a>(out: &mut String, label: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        let _ = writeln!(out, "  {:<12} {}", format!("{label}:").dimmed(), "(none)".dimmed());
    } else {
        let _ = writeln!(out, "  {}:", label.dimmed());
        for item in items {
            let _ = writeln!(out, "    {} {}", "+".green(), item);
        }
    }
    let _ = writeln!(out);
}

fn render_tokens(out: &mut String, category: &Value) {
    match category {
        Value::Object(tokens) => {
            for (token, value) in tokens {
                let _ = writeln!(out, "        {:<16} {}", token, display_value(value));
            }
        }
        other => {
            let _ = writeln!(out, "        {}", display_value(other));
        }
    }
}

/// Fallback lists are shown comma-separated, anything else as JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
