//! The resolved configuration model
//!
//! A [`Configuration`] is only ever built by [`ConfigResolver`](super::ConfigResolver).
//! Its fields are private and exposed through read-only accessors, so a value
//! handed to the generation engine cannot change underneath it.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::theme::Theme;
use crate::error::{Error, Result};

/// Selector used by the `selector` strategy when none is given
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// Variant separator used when the document does not set one
pub const DEFAULT_SEPARATOR: &str = ":";

/// How dark-mode variant classes are emitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// `prefers-color-scheme` media query
    #[default]
    Media,
    /// A `dark` class on an ancestor element
    Class,
    /// A custom selector on an ancestor element
    Selector(String),
}

impl DarkModeStrategy {
    /// Strategy name as written in a configuration document
    pub fn name(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Class => "class",
            Self::Selector(_) => "selector",
        }
    }

    /// The ancestor selector that activates dark mode, if any
    pub fn selector(&self) -> Option<&str> {
        match self {
            Self::Media => None,
            Self::Class => Some(DEFAULT_DARK_SELECTOR),
            Self::Selector(selector) => Some(selector),
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => write!(f, "selector ({selector})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for DarkModeStrategy {
    type Err = Error;

    /// Parse the string form of `darkMode`.
    ///
    /// `media` and `class` name the built-in strategies, `selector` selects
    /// the selector strategy with [`DEFAULT_DARK_SELECTOR`], and any other
    /// non-blank string is taken as a custom selector.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(Error::malformed(
                "darkMode",
                "strategy must not be an empty string",
            )),
            "media" => Ok(Self::Media),
            "class" => Ok(Self::Class),
            "selector" => Ok(Self::Selector(DEFAULT_DARK_SELECTOR.to_string())),
            custom => Ok(Self::Selector(custom.to_string())),
        }
    }
}

/// Whether generated declarations are marked `!important`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportantStrategy {
    #[default]
    Disabled,
    /// Every declaration gets `!important`
    All,
    /// Utilities are nested under this selector to raise specificity
    Selector(String),
}

/// An opaque plugin handle
///
/// Plugins are passed through to the engine untouched, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Plugin(Value);

impl Plugin {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw handle
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// A best-effort identifier: the handle itself when it is a string,
    /// or its `name` field when it is a mapping.
    pub fn identifier(&self) -> Option<&str> {
        match &self.0 {
            Value::String(name) => Some(name),
            Value::Object(map) => map.get("name").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// The validated, defaulted configuration consumed by the generation engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub(crate) content_globs: Vec<String>,
    pub(crate) dark_mode: DarkModeStrategy,
    pub(crate) theme: Theme,
    pub(crate) plugins: Vec<Plugin>,
    pub(crate) prefix: String,
    pub(crate) separator: String,
    pub(crate) important: ImportantStrategy,
    pub(crate) safelist: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            content_globs: Vec::new(),
            dark_mode: DarkModeStrategy::default(),
            theme: Theme::default(),
            plugins: Vec::new(),
            prefix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            important: ImportantStrategy::default(),
            safelist: Vec::new(),
        }
    }
}

impl Configuration {
    /// Glob patterns of files scanned for class names, in document order
    pub fn content_globs(&self) -> &[String] {
        &self.content_globs
    }

    pub fn dark_mode(&self) -> &DarkModeStrategy {
        &self.dark_mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Plugin handles, in the order the engine must invoke them
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Prefix prepended to every generated class name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Separator between variants and the utility name, e.g. `:` in `hover:underline`
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn important(&self) -> &ImportantStrategy {
        &self.important
    }

    /// Class names generated regardless of content scanning
    pub fn safelist(&self) -> &[String] {
        &self.safelist
    }
}
