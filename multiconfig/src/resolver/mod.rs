//! Resolution of the effective configuration file.
//!
//! Given a site's base directory and the user's list of config paths, the
//! resolver decides which single file the site generator should load:
//!
//! - no paths given: the default `_config.yml`
//! - one path: that path if it exists, otherwise the default
//! - several paths: every usable file merged in order and written to
//!   `_multiconfig.yml`, or the default if none were usable
//!
//! Recoverable problems are reported through the [`LogSink`]; only I/O and
//! parse failures on files that do exist are returned as errors.
//!
//! # Examples
//!
//! ```
//! use multiconfig::{resolve, MemoryLogger};
//!
//! let site = tempfile::tempdir().unwrap();
//! std::fs::write(site.path().join("_config.yml"), "title: Blog\n").unwrap();
//! std::fs::write(site.path().join("_config.dev.yml"), "url: http://localhost:4000\n").unwrap();
//!
//! let logger = MemoryLogger::new();
//! let path = resolve(site.path(), Some("_config.yml,_config.dev.yml"), None, &logger).unwrap();
//!
//! assert_eq!(path, site.path().join("_multiconfig.yml"));
//! ```

mod output;
mod single;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Candidates, ConfigCombiner};
use crate::error::Result;
use crate::fs::{FileSystem, OsFileSystem};
use crate::logging::LogSink;

/// File used when no usable configuration was supplied.
pub const DEFAULT_CONFIG_FILENAME: &str = "_config.yml";

/// File the merged configuration is written to.
pub const COMBINED_CONFIG_FILENAME: &str = "_multiconfig.yml";

/// How the effective configuration path was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    /// Fell back to the default configuration file.
    Default,
    /// The single candidate exists and is used as is.
    Found,
    /// Several files were merged into a freshly written file.
    Combined,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Found => write!(f, "found"),
            Self::Combined => write!(f, "combined"),
        }
    }
}

/// The outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The configuration file the caller should load.
    pub path: PathBuf,
    /// Which branch produced `path`.
    pub kind: ResolutionKind,
    /// Number of source files behind `path` (zero for the default).
    pub sources: usize,
}

impl Resolution {
    fn default_config(default_path: PathBuf) -> Self {
        Self {
            path: default_path,
            kind: ResolutionKind::Default,
            sources: 0,
        }
    }
}

/// Resolves the effective configuration file for a site.
///
/// # Examples
///
/// ```
/// use multiconfig::{ConfigResolver, MemoryLogger, ResolutionKind};
/// use multiconfig::fs::OsFileSystem;
///
/// let site = tempfile::tempdir().unwrap();
/// let logger = MemoryLogger::new();
/// let resolver = ConfigResolver::new(&OsFileSystem, &logger);
///
/// let resolution = resolver.resolve(site.path(), None, None).unwrap();
/// assert_eq!(resolution.kind, ResolutionKind::Default);
/// assert_eq!(resolution.path, site.path().join("_config.yml"));
/// ```
pub struct ConfigResolver<'a> {
    fs: &'a dyn FileSystem,
    logger: &'a dyn LogSink,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver using `fs` for file access and `logger` for reports.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, logger: &'a dyn LogSink) -> Self {
        Self { fs, logger }
    }

    /// Decide which configuration file to use.
    ///
    /// `config_paths` is the raw, comma-separated list given by the user. An
    /// absent or empty list selects the default file. The combined file is
    /// written under `output_dir` when given, else under `base`. A lone
    /// candidate is always returned as an absolute path, even for a relative
    /// `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing candidate cannot be read or parsed, or
    /// if the combined file cannot be written.
    pub fn resolve(
        &self,
        base: &Path,
        config_paths: Option<&str>,
        output_dir: Option<&Path>,
    ) -> Result<Resolution> {
        let default_path = default_config_path(base);

        let Some(raw) = config_paths.filter(|raw| !raw.is_empty()) else {
            self.logger.warn("No config file entered.");
            return Ok(Resolution::default_config(default_path));
        };

        match Candidates::parse(raw, base)? {
            Candidates::Single(path) => Ok(self.resolve_single(path, default_path)),
            Candidates::Multiple(paths) => {
                let combined = ConfigCombiner::new(self.fs, self.logger).combine(&paths, base)?;
                self.write_combined(combined, base, output_dir)
            }
        }
    }
}

/// The default configuration path for a site: `<base>/_config.yml`.
///
/// # Examples
///
/// ```
/// use multiconfig::resolver::default_config_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(default_config_path(Path::new("/site")), PathBuf::from("/site/_config.yml"));
/// ```
#[must_use]
pub fn default_config_path(base: &Path) -> PathBuf {
    base.join(DEFAULT_CONFIG_FILENAME)
}

/// Resolve the effective configuration file using the real filesystem.
///
/// Shorthand for [`ConfigResolver::resolve`] with [`OsFileSystem`] that
/// returns only the path.
///
/// # Errors
///
/// See [`ConfigResolver::resolve`].
pub fn resolve(
    base: &Path,
    config_paths: Option<&str>,
    output_dir: Option<&Path>,
    logger: &dyn LogSink,
) -> Result<PathBuf> {
    ConfigResolver::new(&OsFileSystem, logger)
        .resolve(base, config_paths, output_dir)
        .map(|resolution| resolution.path)
}
