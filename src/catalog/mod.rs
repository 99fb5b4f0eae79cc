//! Catalog of named styles and how it is built.
//!
//! This module provides:
//!
//! - [`Catalog`]: the name to sheet registry used by resolution
//! - [`StyleSheet`]: a settings overlay plus the styles it builds on
//! - [`read_style_dir`] and [`is_style_file`]: directory discovery
//! - [`SourceLoader`] and [`FileLoader`]: the external-source seam
//!
//! Catalog merge policy is a per-name, per-key union with the incoming
//! (user) side winning, so user sheets refine base sheets.

#[allow(clippy::module_inception)]
mod catalog;
mod discover;
mod loader;
mod sheet;

pub use catalog::Catalog;
pub use discover::{is_style_file, read_style_dir, STYLE_EXTENSION};
pub use loader::{FileLoader, SourceLoader};
pub use sheet::{StyleSheet, STYLE_KEY};
