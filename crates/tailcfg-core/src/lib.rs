//! # tailcfg-core
//!
//! Configuration resolution for a utility-class CSS generator.
//!
//! A configuration document (JSON, TOML or YAML) names the source files to
//! scan for class names, the dark-mode strategy, design-token theme
//! extensions and plugins. This crate validates such a document, fills in
//! defaults and produces an immutable [`Configuration`] that is handed to
//! the generation engine explicitly.
//!
//! Generating CSS is not part of this crate.
//!
//! ## Modules
//!
//! - [`config`] - [`ConfigResolver`], the resolved model and theme merging
//! - [`document`] - loading documents from disk and locating config files
//! - [`error`] - error types

pub mod config;
pub mod document;
pub mod error;

pub use config::{ConfigResolver, Configuration, DarkModeStrategy, Theme, ThemeTokens};
pub use document::{ConfigLocator, DocumentFormat, load_and_resolve, load_document};
pub use error::{Error, Result};
