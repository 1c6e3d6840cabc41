//! Configuration resolution and the resolved configuration model
//!
//! A configuration document declares:
//!
//! - `content` - glob patterns of files scanned for class names
//! - `darkMode` - how dark-mode variants are emitted
//! - `theme` - direct category overrides and `extend`ed design tokens
//! - `plugins` - opaque plugin handles, invoked in order by the engine
//!
//! plus the smaller `prefix`, `separator`, `important` and `safelist` keys.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tailcfg_core::config::{ConfigResolver, ThemeTokens};
//!
//! let config = ConfigResolver::new().resolve(json!({
//!     "theme": { "extend": { "fontFamily": { "sans": ["Poppins", "sans-serif"] } } }
//! }))?;
//!
//! let base: ThemeTokens = [(
//!     "fontFamily".to_string(),
//!     json!({ "sans": ["Arial"], "serif": ["Times"] }),
//! )]
//! .into_iter()
//! .collect();
//!
//! let view = config.theme().view(&base);
//! assert_eq!(view.fallbacks("fontFamily", "sans"), Some(vec!["Poppins", "sans-serif"]));
//! assert_eq!(view.fallbacks("fontFamily", "serif"), Some(vec!["Times"]));
//! # Ok::<(), tailcfg_core::Error>(())
//! ```

mod model;
mod resolver;
mod theme;

pub use model::{
    Configuration, DEFAULT_DARK_SELECTOR, DEFAULT_SEPARATOR, DarkModeStrategy,
    ImportantStrategy, Plugin,
};
pub use resolver::ConfigResolver;
pub use theme::{Theme, ThemeTokens, ThemeView, extend_category};
