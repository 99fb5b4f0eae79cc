//! Style specifications.
//!
//! A [`StyleSpec`] is a caller-supplied request to apply one or more styles
//! and/or inline overlays, in order. It is an explicit tagged union rather
//! than runtime type inspection:
//!
//! - [`StyleSpec::Name`]: a catalog style name, or a path to a style file
//! - [`StyleSpec::Inline`]: an overlay of settings applied as given
//! - [`StyleSpec::Sequence`]: specs applied from first to last, nesting freely
//!
//! The untagged serde representation lets a sheet's `style:` key hold a bare
//! name (`style: base`) or a list (`style: [base, fonts]`) and deserialize
//! straight into a spec.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// Flat mapping of setting keys to opaque values.
///
/// The store, every overlay, and every sheet body share this shape. Values
/// are never interpreted here; semantic validation belongs to the host.
pub type Settings = HashMap<String, Value>;

/// A style specification.
///
/// # Example
///
/// ```rust
/// use stylelib::{Settings, StyleSpec, Value};
///
/// // A single name, a list of names, or a mix with inline overlays.
/// let by_name = StyleSpec::from("dark");
/// let layered = StyleSpec::from(vec!["dark", "fonts"]);
///
/// let mut tweak = Settings::new();
/// tweak.insert("grid".to_string(), Value::Bool(false));
/// let mixed = StyleSpec::Sequence(vec![by_name, StyleSpec::from(tweak)]);
/// assert!(matches!(mixed, StyleSpec::Sequence(_)));
/// # let _ = layered;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    /// The name of a catalog style, or a locator for an external style file.
    Name(String),
    /// An inline overlay of settings, passed through unchanged.
    Inline(Settings),
    /// Specs applied from first to last; sequences may nest arbitrarily.
    Sequence(Vec<StyleSpec>),
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        StyleSpec::Name(name.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(name: String) -> Self {
        StyleSpec::Name(name)
    }
}

impl From<Settings> for StyleSpec {
    fn from(settings: Settings) -> Self {
        StyleSpec::Inline(settings)
    }
}

impl<T: Into<StyleSpec>> From<Vec<T>> for StyleSpec {
    fn from(specs: Vec<T>) -> Self {
        StyleSpec::Sequence(specs.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(StyleSpec::from("dark"), StyleSpec::Name("dark".to_string()));
    }

    #[test]
    fn test_from_string() {
        let spec = StyleSpec::from(String::from("dark"));
        assert_eq!(spec, StyleSpec::Name("dark".to_string()));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::new();
        settings.insert("grid".to_string(), Value::Bool(true));
        let spec = StyleSpec::from(settings.clone());
        assert_eq!(spec, StyleSpec::Inline(settings));
    }

    #[test]
    fn test_from_vec_of_names() {
        let spec = StyleSpec::from(vec!["a", "b"]);
        assert_eq!(
            spec,
            StyleSpec::Sequence(vec![
                StyleSpec::Name("a".to_string()),
                StyleSpec::Name("b".to_string()),
            ])
        );
    }

    #[test]
    fn test_deserialize_bare_name() {
        let spec: StyleSpec = serde_yaml::from_str("dark").unwrap();
        assert_eq!(spec, StyleSpec::Name("dark".to_string()));
    }

    #[test]
    fn test_deserialize_sequence() {
        let spec: StyleSpec = serde_yaml::from_str("[base, fonts]").unwrap();
        assert_eq!(spec, StyleSpec::from(vec!["base", "fonts"]));
    }

    #[test]
    fn test_deserialize_mapping_as_inline() {
        let spec: StyleSpec = serde_yaml::from_str("grid: true").unwrap();
        match spec {
            StyleSpec::Inline(settings) => {
                assert_eq!(settings["grid"], Value::Bool(true));
            }
            other => panic!("expected inline settings, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_nested_sequence() {
        let spec: StyleSpec = serde_yaml::from_str("[[a, b], c]").unwrap();
        match spec {
            StyleSpec::Sequence(items) => {
                assert_eq!(items.len(), 2);
                assert!(matches!(items[0], StyleSpec::Sequence(_)));
                assert_eq!(items[1], StyleSpec::from("c"));
            }
            other => panic!("expected sequence, got {:?}", other),
        }
    }
}
