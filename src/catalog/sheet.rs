//! Style sheets: the catalog's value type.

use serde::Deserialize;

use crate::spec::{Settings, StyleSpec, Value};

/// The reserved sheet key naming the styles a sheet builds on.
pub const STYLE_KEY: &str = "style";

/// A named, reusable overlay of settings, optionally built on other styles.
///
/// The reserved `style:` key of a sheet file is split out at parse time into
/// the include spec and is never treated as a setting. Included styles are
/// applied before the sheet's own settings, so the sheet's keys win where
/// they overlap.
///
/// # Example
///
/// ```rust
/// use stylelib::StyleSheet;
///
/// let sheet = StyleSheet::new()
///     .include("palette")
///     .set("grid", true)
///     .set("line.width", 2);
///
/// assert!(sheet.includes().is_some());
/// assert_eq!(sheet.settings().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    settings: Settings,
    includes: Option<StyleSpec>,
}

#[derive(Deserialize)]
struct RawSheet {
    #[serde(rename = "style")]
    includes: Option<StyleSpec>,
    #[serde(flatten)]
    settings: Settings,
}

impl StyleSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting, returning an updated sheet for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Declares the styles this sheet builds on, returning an updated sheet.
    pub fn include(mut self, spec: impl Into<StyleSpec>) -> Self {
        self.includes = Some(spec.into());
        self
    }

    /// Parses a sheet from its file format.
    ///
    /// The body is a flat YAML mapping of setting keys to values; the
    /// reserved `style:` key may hold a name or a list of names. Empty
    /// documents parse as an empty sheet.
    pub fn parse(source: &str) -> Result<Self, serde_yaml::Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<RawSheet> = serde_yaml::from_str(source)?;
        Ok(raw
            .map(|raw| Self {
                settings: raw.settings,
                includes: raw.includes,
            })
            .unwrap_or_default())
    }

    /// The sheet's own settings, without the reserved include key.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The styles this sheet builds on, if any.
    pub fn includes(&self) -> Option<&StyleSpec> {
        self.includes.as_ref()
    }

    /// Consumes the sheet, returning only its settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Returns true if the sheet has no settings and no includes.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.includes.is_none()
    }

    /// Folds another sheet into this one, key by key, with the incoming
    /// side winning. An incoming include spec replaces the existing one.
    pub(crate) fn merge_from(&mut self, incoming: StyleSheet) {
        self.settings.extend(incoming.settings);
        if incoming.includes.is_some() {
            self.includes = incoming.includes;
        }
    }
}

impl From<Settings> for StyleSheet {
    fn from(settings: Settings) -> Self {
        Self {
            settings,
            includes: None,
        }
    }
}
