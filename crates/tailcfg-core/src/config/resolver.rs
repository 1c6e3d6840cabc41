//! Configuration resolution
//!
//! The `ConfigResolver` turns a raw structured document into a validated,
//! defaulted [`Configuration`]. Absent keys fall back to defaults, present
//! keys with the wrong shape are errors, and unrecognized keys are ignored
//! so that newer documents still resolve.

use serde_json::{Map, Value};

use super::model::{Configuration, DarkModeStrategy, ImportantStrategy, Plugin};
use super::theme::{Theme, ThemeTokens, extend_category};
use crate::error::{Error, Result};

/// Resolves raw configuration documents into [`Configuration`] values
///
/// Resolution is a pure transformation. The optional source label only
/// shows up in log output.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    source: Option<String>,
}

impl ConfigResolver {
    /// Create a resolver with no source label
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that tags its log output with `source`
    /// (typically the path the document was loaded from)
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    /// Resolve a document into a configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedConfig`] when the document is not a mapping,
    /// or when a recognized key is present with the wrong shape. A key set
    /// to `null` is present, so it fails the shape check like any other
    /// wrong value.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tailcfg_core::config::{ConfigResolver, DarkModeStrategy};
    ///
    /// let config = ConfigResolver::new()
    ///     .resolve(json!({ "content": ["./templates/**/*.html"], "darkMode": "class" }))
    ///     .unwrap();
    ///
    /// assert_eq!(config.content_globs(), ["./templates/**/*.html"]);
    /// assert_eq!(config.dark_mode(), &DarkModeStrategy::Class);
    /// ```
    pub fn resolve(&self, document: Value) -> Result<Configuration> {
        let mut map = match document {
            Value::Object(map) => map,
            other => {
                return Err(Error::malformed(
                    "(root)",
                    format!("expected a mapping, found {}", kind(&other)),
                ));
            }
        };

        let source = self.source.as_deref().unwrap_or("<memory>");
        tracing::debug!(source, keys = map.len(), "Resolving configuration");

        let mut config = Configuration::default();

        if let Some(value) = map.remove("content") {
            config.content_globs = string_list("content", value)?;
        }
        if let Some(value) = map.remove("darkMode") {
            config.dark_mode = dark_mode(value)?;
        }
        if let Some(value) = map.remove("theme") {
            config.theme = theme(value)?;
        }
        if let Some(value) = map.remove("plugins") {
            config.plugins = plugins(value)?;
        }
        if let Some(value) = map.remove("prefix") {
            config.prefix = string("prefix", value)?;
        }
        if let Some(value) = map.remove("separator") {
            config.separator = separator(value)?;
        }
        if let Some(value) = map.remove("important") {
            config.important = important(value)?;
        }
        if let Some(value) = map.remove("safelist") {
            config.safelist = string_list("safelist", value)?;
        }

        for key in map.keys() {
            tracing::debug!(source, %key, "Ignoring unrecognized configuration key");
        }

        tracing::debug!(
            source,
            content = config.content_globs.len(),
            dark_mode = %config.dark_mode,
            plugins = config.plugins.len(),
            "Configuration resolved"
        );

        Ok(config)
    }
}

/// Describe a value's shape for error messages
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn string_list(key: &str, value: Value) -> Result<Vec<String>> {
    if !value.is_array() {
        return Err(Error::malformed(
            key,
            format!("expected a sequence of strings, found {}", kind(&value)),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| Error::malformed(key, format!("expected a sequence of strings: {e}")))
}

fn string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(Error::malformed(
            key,
            format!("expected a string, found {}", kind(&other)),
        )),
    }
}

fn separator(value: Value) -> Result<String> {
    let separator = string("separator", value)?;
    if separator.is_empty() {
        return Err(Error::malformed("separator", "must not be empty"));
    }
    Ok(separator)
}

fn dark_mode(value: Value) -> Result<DarkModeStrategy> {
    match value {
        Value::String(s) => s.parse(),
        Value::Array(items) => match items.as_slice() {
            [Value::String(strategy)] if matches!(strategy.as_str(), "class" | "selector") => {
                strategy.parse()
            }
            [Value::String(strategy), Value::String(selector)]
                if matches!(strategy.as_str(), "class" | "selector")
                    && !selector.trim().is_empty() =>
            {
                Ok(DarkModeStrategy::Selector(selector.trim().to_string()))
            }
            _ => Err(Error::malformed(
                "darkMode",
                r#"expected ["class" | "selector"] or ["class" | "selector", "<selector>"]"#,
            )),
        },
        other => Err(Error::malformed(
            "darkMode",
            format!(
                "expected one of media, class, selector or a selector string, found {}",
                kind(&other)
            ),
        )),
    }
}

fn theme(value: Value) -> Result<Theme> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::malformed(
                "theme",
                format!("expected a mapping, found {}", kind(&other)),
            ));
        }
    };

    let mut extensions = ThemeTokens::new();
    match map.remove("extend") {
        None => {}
        Some(Value::Object(extend)) => {
            for (category, tokens) in &extend {
                extend_category(&mut extensions, category, tokens);
            }
        }
        Some(other) => {
            return Err(Error::malformed(
                "theme.extend",
                format!("expected a mapping, found {}", kind(&other)),
            ));
        }
    }

    let overrides: ThemeTokens = map.into_iter().collect();
    Ok(Theme::new(extensions, overrides))
}

fn plugins(value: Value) -> Result<Vec<Plugin>> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Plugin::new).collect()),
        other => Err(Error::malformed(
            "plugins",
            format!("expected a sequence, found {}", kind(&other)),
        )),
    }
}

fn important(value: Value) -> Result<ImportantStrategy> {
    match value {
        Value::Bool(false) => Ok(ImportantStrategy::Disabled),
        Value::Bool(true) => Ok(ImportantStrategy::All),
        Value::String(selector) if !selector.trim().is_empty() => {
            Ok(ImportantStrategy::Selector(selector))
        }
        other => Err(Error::malformed(
            "important",
            format!("expected a boolean or a selector string, found {}", kind(&other)),
        )),
    }
}
