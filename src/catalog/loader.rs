//! Loading styles from external sources.

use std::fs;
use std::path::Path;

use super::sheet::StyleSheet;
use crate::error::StyleError;
use crate::spec::Settings;

/// Resolves a locator that is not a catalog name into a flat settings
/// mapping.
///
/// This is the seam for external style sources. The shipped [`FileLoader`]
/// treats locators as filesystem paths; hosts that want URLs or other
/// schemes implement this trait and hand their loader to
/// [`LibraryBuilder::loader`](crate::LibraryBuilder::loader).
///
/// A loader returns the flat settings only: include declarations inside an
/// external source contribute no nested references.
pub trait SourceLoader {
    /// Loads the settings behind a locator.
    ///
    /// An unresolvable locator is [`StyleError::NotFound`]; a source that
    /// exists but cannot be read or parsed keeps its underlying cause in
    /// [`StyleError::Read`] or [`StyleError::Parse`].
    fn load(&self, source: &str) -> Result<Settings, StyleError>;
}

/// Loads style sheets from filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl SourceLoader for FileLoader {
    fn load(&self, source: &str) -> Result<Settings, StyleError> {
        let path = Path::new(source);
        if !path.is_file() {
            return Err(StyleError::NotFound {
                name: source.to_string(),
            });
        }
        let text = fs::read_to_string(path).map_err(|cause| StyleError::Read {
            path: path.to_path_buf(),
            cause,
        })?;
        let sheet = StyleSheet::parse(&text).map_err(|cause| StyleError::Parse {
            path: path.to_path_buf(),
            cause,
        })?;
        Ok(sheet.into_settings())
    }
}
