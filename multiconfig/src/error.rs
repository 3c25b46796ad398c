//! Error types for the multiconfig library.
//!
//! Only unrecoverable conditions become errors. Missing files, unsupported
//! extensions and empty inputs are reported through the logger and resolved
//! to the default path instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a multiconfig error.
///
/// # Examples
///
/// ```
/// use multiconfig::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the multiconfig library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The combined configuration could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The output file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML configuration file is malformed.
    #[error("invalid YAML in {}: {source}", path.display())]
    YamlParse {
        /// The malformed file.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A JSON configuration file is malformed.
    #[error("invalid JSON in {}: {source}", path.display())]
    JsonParse {
        /// The malformed file.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration file parsed, but its top level is not a mapping.
    #[error("configuration in {} must be a mapping, found {found}", path.display())]
    InvalidFragment {
        /// The offending file.
        path: PathBuf,
        /// The kind of value found at the top level.
        found: &'static str,
    },

    /// The merged configuration could not be serialized.
    #[error("failed to serialize combined configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Returns the configuration file this error concerns, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiconfig::Error;
    /// use std::path::{Path, PathBuf};
    ///
    /// let err = Error::InvalidFragment {
    ///     path: PathBuf::from("/site/a.yml"),
    ///     found: "sequence",
    /// };
    /// assert_eq!(err.path(), Some(Path::new("/site/a.yml")));
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::YamlParse { path, .. }
            | Self::JsonParse { path, .. }
            | Self::InvalidFragment { path, .. }
            | Self::InvalidPath { path, .. } => Some(path),
            Self::Serialize(_) => None,
        }
    }

    /// Returns true if the error was caused by malformed file content rather
    /// than by the filesystem.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::YamlParse { .. } | Self::JsonParse { .. } | Self::InvalidFragment { .. }
        )
    }
}
