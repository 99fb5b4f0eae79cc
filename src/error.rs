//! Errors from style resolution and application.

use std::path::PathBuf;

/// Error returned when a style specification cannot be resolved or applied.
#[derive(Debug)]
pub enum StyleError {
    /// A referenced name is neither in the catalog nor a loadable style file
    NotFound { name: String },
    /// A style source exists but could not be read
    Read {
        path: PathBuf,
        cause: std::io::Error,
    },
    /// A style source could not be parsed
    Parse {
        path: PathBuf,
        cause: serde_yaml::Error,
    },
    /// A chain of includes loops back on itself
    Cycle { path: Vec<String> },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::NotFound { name } => {
                write!(
                    f,
                    "style '{}' not found in the library and not loadable as a style file",
                    name
                )
            }
            StyleError::Read { path, cause } => {
                write!(f, "failed to read style source \"{}\": {}", path.display(), cause)
            }
            StyleError::Parse { path, cause } => {
                write!(f, "failed to parse style source \"{}\": {}", path.display(), cause)
            }
            StyleError::Cycle { path } => {
                write!(f, "cycle detected in style includes: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Read { cause, .. } => Some(cause),
            StyleError::Parse { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
