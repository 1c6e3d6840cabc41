//! Design-token theme and its merge onto the engine's base theme
//!
//! Merge semantics:
//! - Overrides (`theme.<category>`): replace the base category entirely
//! - Extensions (`theme.extend.<category>`): additive per category,
//!   replacing per token. A redefined token's value list wins outright,
//!   other tokens in the same category are kept. An extension that is not
//!   a mapping is skipped.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Theme tokens keyed by category (`fontFamily`, `colors`, ...).
///
/// Each category value is normally a mapping of token name to value.
pub type ThemeTokens = BTreeMap<String, Value>;

/// The theme section of a resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Theme {
    extensions: ThemeTokens,
    overrides: ThemeTokens,
}

impl Theme {
    pub(crate) fn new(extensions: ThemeTokens, overrides: ThemeTokens) -> Self {
        Self {
            extensions,
            overrides,
        }
    }

    /// Categories from `theme.extend`
    pub fn extensions(&self) -> &ThemeTokens {
        &self.extensions
    }

    /// Categories set directly under `theme`, replacing the base category
    pub fn overrides(&self) -> &ThemeTokens {
        &self.overrides
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.overrides.is_empty()
    }

    /// A single extended token, e.g. `extension("fontFamily", "poppins")`
    pub fn extension(&self, category: &str, token: &str) -> Option<&Value> {
        self.extensions.get(category)?.get(token)
    }

    /// Merge this theme onto `base`, producing the effective token set
    pub fn merge_onto(&self, base: &ThemeTokens) -> ThemeTokens {
        let mut merged = base.clone();

        for (category, value) in &self.overrides {
            tracing::trace!(%category, "Replacing base theme category");
            merged.insert(category.clone(), value.clone());
        }

        for (category, value) in &self.extensions {
            extend_category(&mut merged, category, value);
        }

        merged
    }

    /// Borrowing view for token lookups against `base` without merging
    pub fn view<'a>(&'a self, base: &'a ThemeTokens) -> ThemeView<'a> {
        ThemeView { theme: self, base }
    }
}

/// Merge one extension category into `target`.
///
/// The extension's tokens are inserted one by one, replacing same-named
/// tokens and keeping the rest. An extension that is not a mapping has no
/// tokens to add, so it is skipped and `target` is left as it was.
pub fn extend_category(target: &mut ThemeTokens, category: &str, extension: &Value) {
    let Value::Object(tokens) = extension else {
        tracing::warn!(%category, "Ignoring theme extension that is not a mapping of tokens");
        return;
    };

    match target.get_mut(category) {
        Some(Value::Object(existing)) => {
            for (token, value) in tokens {
                if existing.contains_key(token) {
                    tracing::trace!(%category, %token, "Extension replaces base token");
                }
                existing.insert(token.clone(), value.clone());
            }
        }
        _ => {
            target.insert(category.to_string(), extension.clone());
        }
    }
}

/// Token lookup that checks extensions before the base theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeView<'a> {
    theme: &'a Theme,
    base: &'a ThemeTokens,
}

impl<'a> ThemeView<'a> {
    /// Find a token's value.
    ///
    /// Extensions are checked first. An overridden category hides the base
    /// category entirely.
    pub fn lookup(&self, category: &str, token: &str) -> Option<&'a Value> {
        if let Some(value) = self.theme.extension(category, token) {
            return Some(value);
        }
        match self.theme.overrides.get(category) {
            Some(overridden) => overridden.get(token),
            None => self.base.get(category)?.get(token),
        }
    }

    /// A token's value as an ordered list of fallbacks.
    ///
    /// A plain string is a single fallback; non-string entries in a
    /// sequence are skipped.
    pub fn fallbacks(&self, category: &str, token: &str) -> Option<Vec<&'a str>> {
        match self.lookup(category, token)? {
            Value::String(single) => Some(vec![single.as_str()]),
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }
}
