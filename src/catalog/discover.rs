//! Style-file discovery.
//!
//! A style source file's logical name is its filename with the fixed
//! [`STYLE_EXTENSION`] suffix stripped; the match is case-sensitive and
//! exact, and any other filename is ignored during discovery.

use std::fs;
use std::path::Path;

use super::catalog::Catalog;
use super::sheet::StyleSheet;
use crate::error::StyleError;

/// Filename suffix that marks a style sheet file.
pub const STYLE_EXTENSION: &str = ".style";

/// Returns true if the filename looks like a style file.
pub fn is_style_file(filename: &str) -> bool {
    style_name(filename).is_some()
}

/// The logical style name for a filename, if it is a style file.
fn style_name(filename: &str) -> Option<&str> {
    filename
        .strip_suffix(STYLE_EXTENSION)
        .filter(|stem| !stem.is_empty())
}

/// Reads every style file in a directory into a catalog.
///
/// The scan is a flat directory listing; subdirectories and files without
/// the style extension are skipped. Read and parse failures surface with
/// the offending path and the underlying cause.
pub fn read_style_dir(dir: impl AsRef<Path>) -> Result<Catalog, StyleError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|cause| StyleError::Read {
        path: dir.to_path_buf(),
        cause,
    })?;

    let mut catalog = Catalog::new();
    for entry in entries {
        let entry = entry.map_err(|cause| StyleError::Read {
            path: dir.to_path_buf(),
            cause,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()).and_then(style_name) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let text = fs::read_to_string(&path).map_err(|cause| StyleError::Read {
            path: path.clone(),
            cause,
        })?;
        let sheet = StyleSheet::parse(&text).map_err(|cause| StyleError::Parse {
            path: path.clone(),
            cause,
        })?;
        catalog.insert(name, sheet);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Value;
    use std::io::Write;

    #[test]
    fn test_is_style_file() {
        assert!(is_style_file("dark.style"));
        assert!(is_style_file("solarized-light.style"));
        assert!(!is_style_file("dark.styles"));
        assert!(!is_style_file("dark.Style"));
        assert!(!is_style_file(".style"));
        assert!(!is_style_file("notes.txt"));
        assert!(!is_style_file("style"));
    }

    #[test]
    fn test_read_style_dir_collects_sheets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dark.style"), "palette: dark\n").unwrap();
        std::fs::write(dir.path().join("base.style"), "grid: true\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "ignored\n").unwrap();
        std::fs::create_dir(dir.path().join("nested.style")).unwrap();

        let catalog = read_style_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("dark").unwrap().settings()["palette"],
            Value::from("dark")
        );
        assert!(catalog.has("base"));
    }

    #[test]
    fn test_read_style_dir_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = read_style_dir(&missing).unwrap_err();
        assert!(matches!(err, StyleError::Read { .. }));
    }

    #[test]
    fn test_read_style_dir_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.style");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"grid: [unclosed\n").unwrap();

        let err = read_style_dir(dir.path()).unwrap_err();
        match err {
            StyleError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
