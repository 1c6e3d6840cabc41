//! Loading raw configuration documents from disk
//!
//! Documents are parsed into a [`serde_json::Value`] regardless of their
//! on-disk format. Semantic validation is left to
//! [`ConfigResolver`](crate::config::ConfigResolver).

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigResolver, Configuration};
use crate::error::{Error, Result};

/// File names searched by [`ConfigLocator`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "tailwind.config.json",
    "tailwind.config.toml",
    "tailwind.config.yaml",
    "tailwind.config.yml",
];

/// Script module extensions that would need a JavaScript runtime to evaluate
const SCRIPT_EXTENSIONS: &[&str] = &["js", "cjs", "mjs", "ts", "cts", "mts"];

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a path, explaining why when it cannot be loaded
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if let Some(format) = Self::from_extension(ext) {
            return Ok(format);
        }

        let reason = if SCRIPT_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            "script modules cannot be evaluated; export the configuration as JSON, TOML or YAML"
                .to_string()
        } else if ext.is_empty() {
            "file has no extension".to_string()
        } else {
            format!("unknown extension `.{ext}`")
        };

        Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Get default file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Toml => &["toml"],
            Self::Yaml => &["yaml", "yml"],
        }
    }
}

/// Parse in-memory content in the given format
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Read and parse a configuration document, detecting its format from the path
pub fn load_document(path: &Path) -> Result<Value> {
    let format = DocumentFormat::from_path(path)?;
    tracing::debug!(?path, ?format, "Loading configuration document");
    let content = fs::read_to_string(path)?;
    parse_document(&content, format)
}

/// Load a document and resolve it in one step
pub fn load_and_resolve(path: &Path) -> Result<Configuration> {
    let document = load_document(path)?;
    ConfigResolver::for_source(path.display().to_string()).resolve(document)
}

/// Finds the configuration file of a project directory
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    root: PathBuf,
}

impl ConfigLocator {
    /// Create a locator for the given project directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Paths checked by [`locate`](Self::locate), in order
    pub fn candidates(&self) -> Vec<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .collect()
    }

    /// Return the first existing configuration file
    pub fn locate(&self) -> Result<PathBuf> {
        for candidate in self.candidates() {
            if candidate.is_file() {
                tracing::debug!(?candidate, "Found configuration file");
                return Ok(candidate);
            }
            tracing::trace!(?candidate, "No configuration file - skipping");
        }
        Err(Error::ConfigNotFound {
            path: self.root.clone(),
        })
    }

    /// Resolve a path that is either a configuration file or a project directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_dir() {
            Self::new(path).locate()
        } else {
            Ok(path.to_path_buf())
        }
    }
}
