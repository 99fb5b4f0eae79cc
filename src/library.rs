//! The style library: catalog ownership, discovery, and the public
//! application operations.

use std::path::PathBuf;

use crate::apply::apply;
use crate::catalog::{read_style_dir, Catalog, FileLoader, SourceLoader, StyleSheet};
use crate::error::StyleError;
use crate::expand::{expand, StyleItem};
use crate::scope::scoped;
use crate::spec::{Settings, StyleSpec};

/// Owns the catalog for a process lifetime and exposes the application
/// operations.
///
/// A library is built once from programmatic sheets plus base and user
/// style directories, and rebuilt only through [`Library::reload`]. The
/// settings store stays owned by the host and is passed `&mut` into every
/// operation, so isolated stores (and tests) never couple through hidden
/// globals.
///
/// Single-threaded by contract: at most one style application may be in
/// flight against a given store; callers serialize.
///
/// # Example
///
/// ```rust
/// use stylelib::{Library, Settings, StyleSheet, Value};
///
/// let library = Library::builder()
///     .style("base", StyleSheet::new().set("grid", true))
///     .style("dark", StyleSheet::new().include("base").set("palette", "dark"))
///     .build()
///     .unwrap();
///
/// let mut store = Settings::new();
/// library.use_style(&mut store, "dark").unwrap();
///
/// assert_eq!(store["grid"], Value::Bool(true));
/// assert_eq!(store["palette"], Value::from("dark"));
/// ```
pub struct Library {
    catalog: Catalog,
    builtin: Catalog,
    base_dirs: Vec<PathBuf>,
    user_dirs: Vec<PathBuf>,
    defaults: Settings,
    loader: Box<dyn SourceLoader>,
}

impl Library {
    /// Starts building a library.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// The current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All currently known style names, sorted.
    pub fn available(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.catalog.names().collect();
        names.sort_unstable();
        names
    }

    /// Rebuilds the catalog from the same sheets and directories.
    ///
    /// The new catalog is assembled completely before it replaces the old
    /// one, so lookups never observe a partially merged catalog and a
    /// failed reload leaves the previous catalog in place.
    pub fn reload(&mut self) -> Result<(), StyleError> {
        let fresh = build_catalog(&self.builtin, &self.base_dirs, &self.user_dirs)?;
        self.catalog = fresh;
        Ok(())
    }

    /// Expands a specification against the current catalog.
    pub fn expand(&self, spec: impl Into<StyleSpec>) -> Result<Vec<StyleItem>, StyleError> {
        expand(&spec.into(), &self.catalog, self.loader.as_ref())
    }

    /// Applies a specification permanently onto the store.
    ///
    /// No rollback: overlays applied before a failure stay applied.
    pub fn use_style(
        &self,
        store: &mut Settings,
        spec: impl Into<StyleSpec>,
    ) -> Result<(), StyleError> {
        let spec = spec.into();
        let sequence = expand(&spec, &self.catalog, self.loader.as_ref())?;
        apply(&sequence, &self.catalog, self.loader.as_ref(), store)
    }

    /// Applies a specification for the duration of `body`, restoring the
    /// store's prior state on every exit path.
    ///
    /// With `after_reset`, the store is first reset to the library's
    /// default baseline and the overlay applied on top of that.
    pub fn context<R, F>(
        &self,
        store: &mut Settings,
        spec: impl Into<StyleSpec>,
        after_reset: bool,
        body: F,
    ) -> Result<R, StyleError>
    where
        F: FnOnce(&mut Settings) -> R,
    {
        let spec = spec.into();
        let reset_to = if after_reset { Some(&self.defaults) } else { None };
        scoped(
            &spec,
            &self.catalog,
            self.loader.as_ref(),
            store,
            reset_to,
            body,
        )
    }
}

/// Builder for [`Library`].
///
/// Base directories must exist; user directories are skipped silently when
/// absent, so a library works before the user has created one. Where names
/// collide, later sources win key by key: programmatic sheets, then base
/// directories, then user directories.
pub struct LibraryBuilder {
    builtin: Catalog,
    base_dirs: Vec<PathBuf>,
    user_dirs: Vec<PathBuf>,
    defaults: Settings,
    loader: Box<dyn SourceLoader>,
}

impl LibraryBuilder {
    fn new() -> Self {
        Self {
            builtin: Catalog::new(),
            base_dirs: Vec::new(),
            user_dirs: Vec::new(),
            defaults: Settings::new(),
            loader: Box::new(FileLoader),
        }
    }

    /// Registers a programmatic sheet in the base layer.
    pub fn style(mut self, name: impl Into<String>, sheet: impl Into<StyleSheet>) -> Self {
        self.builtin.insert(name, sheet);
        self
    }

    /// Adds a base style directory. It must exist at build and reload time.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dirs.push(dir.into());
        self
    }

    /// Adds a user style directory, overlaid onto the base layer.
    pub fn user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dirs.push(dir.into());
        self
    }

    /// Sets the baseline the store is reset to under
    /// [`Library::context`] with `after_reset`.
    pub fn defaults(mut self, defaults: Settings) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the external-source loader.
    pub fn loader(mut self, loader: impl SourceLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Scans the configured sources and builds the library.
    pub fn build(self) -> Result<Library, StyleError> {
        let catalog = build_catalog(&self.builtin, &self.base_dirs, &self.user_dirs)?;
        Ok(Library {
            catalog,
            builtin: self.builtin,
            base_dirs: self.base_dirs,
            user_dirs: self.user_dirs,
            defaults: self.defaults,
            loader: self.loader,
        })
    }
}

fn build_catalog(
    builtin: &Catalog,
    base_dirs: &[PathBuf],
    user_dirs: &[PathBuf],
) -> Result<Catalog, StyleError> {
    let mut catalog = builtin.clone();
    for dir in base_dirs {
        catalog.merge(read_style_dir(dir)?);
    }
    for dir in user_dirs {
        if dir.is_dir() {
            catalog.merge(read_style_dir(dir)?);
        }
    }
    Ok(catalog)
}
