//! Combining several candidate files into one configuration.

use std::path::Path;

use serde_yaml::Mapping;

use crate::config::format::ConfigFormat;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::logging::LogSink;
use crate::path::resolve_against;

/// The result of combining candidate files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedConfig {
    /// All usable fragments merged in input order.
    pub config: Mapping,
    /// How many candidates existed and had a supported format.
    pub count: usize,
}

/// Reads, parses and merges candidate files in the order given.
pub struct ConfigCombiner<'a> {
    fs: &'a dyn FileSystem,
    logger: &'a dyn LogSink,
}

impl<'a> ConfigCombiner<'a> {
    /// Create a combiner reading through `fs` and reporting to `logger`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, logger: &'a dyn LogSink) -> Self {
        Self { fs, logger }
    }

    /// Merge every usable candidate into one mapping.
    ///
    /// Relative candidates are resolved against `base`; absolute ones are
    /// used as typed. Missing files and unsupported extensions are logged as
    /// warnings and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as an existing file cannot be read or parsed,
    /// or a relative candidate cannot be made absolute; nothing merged so far
    /// is returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiconfig::config::ConfigCombiner;
    /// use multiconfig::fs::OsFileSystem;
    /// use multiconfig::MemoryLogger;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// std::fs::write(dir.path().join("a.yml"), "author: foo\n").unwrap();
    /// std::fs::write(dir.path().join("b.json"), r#"{"author": "bar"}"#).unwrap();
    ///
    /// let logger = MemoryLogger::new();
    /// let combined = ConfigCombiner::new(&OsFileSystem, &logger)
    ///     .combine(&["a.yml", "b.json", "c.yml"], dir.path())
    ///     .unwrap();
    ///
    /// assert_eq!(combined.count, 2);
    /// assert_eq!(combined.config["author"], "bar");
    /// ```
    pub fn combine<S: AsRef<str>>(&self, candidates: &[S], base: &Path) -> Result<CombinedConfig> {
        let loader = ConfigLoader::new(self.fs);
        let mut combined = CombinedConfig::default();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let config_path = resolve_against(base, candidate)?;

            if !self.fs.exists(&config_path) {
                self.logger.warn(&format!("Config file {candidate} not found."));
                continue;
            }

            let format = ConfigFormat::from_path(Path::new(candidate));
            if !format.is_supported() {
                self.logger.warn(&format!("Config file {candidate} not supported type."));
                continue;
            }

            let fragment = loader.load(&config_path, format)?;
            ConfigMerger::merge_into(&mut combined.config, fragment);
            combined.count += 1;
        }

        Ok(combined)
    }
}
