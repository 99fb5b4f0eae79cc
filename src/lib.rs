//! Named style sheets with nested includes, cumulative overlays, and
//! scoped application.
//!
//! A style is a named, reusable overlay of setting key/value pairs that
//! may build on other styles. A caller asks for a name, an inline
//! override mapping, or an ordered mix of both; the crate resolves that
//! request into one flat application sequence and folds it onto a
//! host-owned settings store, last writer wins.
//!
//! The main pieces:
//!
//! - [`StyleSpec`]: a request to apply styles and/or inline overlays
//! - [`StyleSheet`] and [`Catalog`]: named sheets and their registry
//! - [`Library`]: catalog ownership, directory discovery, reload, and the
//!   `use`/`context` operations
//! - [`expand`], [`apply`], [`scoped`]: the resolution core, usable with
//!   an explicit catalog and store
//! - [`SourceLoader`] / [`FileLoader`]: the seam for styles loaded from
//!   outside the catalog
//!
//! The scoped form guarantees the store comes back to its prior state on
//! every exit path, including failures inside the application itself:
//!
//! ```rust
//! use stylelib::{Library, Settings, StyleSheet, Value};
//!
//! let library = Library::builder()
//!     .style("base", StyleSheet::new().set("grid", true))
//!     .style("dark", StyleSheet::new().include("base").set("palette", "dark"))
//!     .build()
//!     .unwrap();
//!
//! let mut store = Settings::new();
//! library
//!     .context(&mut store, "dark", false, |store| {
//!         assert_eq!(store["palette"], Value::from("dark"));
//!         assert_eq!(store["grid"], Value::Bool(true));
//!     })
//!     .unwrap();
//!
//! // The overlay is gone once the context ends.
//! assert!(store.is_empty());
//! ```
//!
//! Everything here is synchronous and single-threaded by contract: one
//! logical style application at a time per store, serialized by the
//! caller.

mod apply;
mod catalog;
mod error;
mod expand;
mod library;
mod scope;
mod spec;

pub use apply::apply;
pub use catalog::{
    is_style_file, read_style_dir, Catalog, FileLoader, SourceLoader, StyleSheet, STYLE_EXTENSION,
    STYLE_KEY,
};
pub use error::StyleError;
pub use expand::{expand, StyleItem};
pub use library::{Library, LibraryBuilder};
pub use scope::scoped;
pub use spec::{Settings, StyleSpec, Value};
