//! Error types for tailcfg-core

use std::path::PathBuf;

/// Result type for tailcfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognized key is present but has the wrong shape or value.
    ///
    /// `key` is the dotted path of the offending key, or `(root)` when the
    /// document itself is not a mapping.
    #[error("Malformed config at `{key}`: {reason}")]
    MalformedConfig { key: String, reason: String },

    /// No configuration file was found in a project directory
    #[error("No configuration file found in {path}")]
    ConfigNotFound { path: PathBuf },

    /// The configuration file has a format that cannot be loaded
    #[error("Unsupported configuration format for {path}: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// YAML deserialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a malformed-config error for the given key
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was raised by resolution rather than loading
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig { .. })
    }
}
