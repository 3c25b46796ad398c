//! Configuration file format detection.

use std::fmt;
use std::path::Path;

/// The format of a candidate configuration file, decided by its extension.
///
/// # Examples
///
/// ```
/// use multiconfig::config::ConfigFormat;
/// use std::path::Path;
///
/// assert_eq!(ConfigFormat::from_path(Path::new("_config.YML")), ConfigFormat::Yaml);
/// assert_eq!(ConfigFormat::from_path(Path::new("site.json")), ConfigFormat::Json);
/// assert_eq!(ConfigFormat::from_path(Path::new("site.xml")), ConfigFormat::Unsupported);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `.yml` or `.yaml`
    Yaml,
    /// `.json`
    Json,
    /// Any other extension, or none at all.
    Unsupported,
}

impl ConfigFormat {
    /// Detect the format from the path's extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Self::Yaml,
            "json" => Self::Json,
            _ => Self::Unsupported,
        }
    }

    /// Returns true for formats that can be parsed and merged.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}
