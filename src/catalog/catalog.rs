//! The style catalog: all known named styles, keyed by name.

use std::collections::HashMap;

use super::sheet::StyleSheet;

/// Registry of named style sheets.
///
/// Keys are unique; ordering carries no meaning. A catalog is built once
/// (programmatically, or by scanning style directories) and handed by
/// reference into the resolution operations.
///
/// # Example
///
/// ```rust
/// use stylelib::{Catalog, StyleSheet};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("base", StyleSheet::new().set("grid", true));
/// catalog.insert("dark", StyleSheet::new().include("base").set("palette", "dark"));
///
/// assert!(catalog.has("dark"));
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sheets: HashMap<String, StyleSheet>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a sheet by name.
    pub fn get(&self, name: &str) -> Option<&StyleSheet> {
        self.sheets.get(name)
    }

    /// Registers a sheet under a name, replacing any previous sheet.
    pub fn insert(&mut self, name: impl Into<String>, sheet: impl Into<StyleSheet>) {
        self.sheets.insert(name.into(), sheet.into());
    }

    /// Returns true if a style with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Iterates over all registered style names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(|name| name.as_str())
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Overlays another catalog onto this one.
    ///
    /// Names only in the incoming catalog are added. Where a name exists on
    /// both sides the sheets are merged key by key with the incoming side
    /// winning, so a user sheet tweaks a base sheet instead of replacing it.
    pub fn merge(&mut self, incoming: Catalog) {
        for (name, sheet) in incoming.sheets {
            match self.sheets.get_mut(&name) {
                Some(existing) => existing.merge_from(sheet),
                None => {
                    self.sheets.insert(name, sheet);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Value;

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        catalog.insert("base", StyleSheet::new().set("grid", true));

        assert!(catalog.has("base"));
        assert!(!catalog.has("dark"));
        assert_eq!(
            catalog.get("base").unwrap().settings()["grid"],
            Value::Bool(true)
        );
        assert!(catalog.get("dark").is_none());
    }

    #[test]
    fn test_names_and_len() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert("a", StyleSheet::new());
        catalog.insert("b", StyleSheet::new());

        let mut names: Vec<&str> = catalog.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_merge_adds_new_names() {
        let mut base = Catalog::new();
        base.insert("a", StyleSheet::new().set("x", 1));

        let mut user = Catalog::new();
        user.insert("b", StyleSheet::new().set("y", 2));

        base.merge(user);
        assert!(base.has("a"));
        assert!(base.has("b"));
    }

    #[test]
    fn test_merge_is_per_key_union_user_wins() {
        let mut base = Catalog::new();
        base.insert("a", StyleSheet::new().set("x", 1).set("y", 1));

        let mut user = Catalog::new();
        user.insert("a", StyleSheet::new().set("y", 2).set("z", 2));

        base.merge(user);
        let merged = base.get("a").unwrap();
        assert_eq!(merged.settings()["x"], Value::from(1));
        assert_eq!(merged.settings()["y"], Value::from(2));
        assert_eq!(merged.settings()["z"], Value::from(2));
    }
}
