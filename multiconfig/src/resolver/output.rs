//! Materializing the combined configuration.

use std::path::Path;

use super::{
    default_config_path, ConfigResolver, Resolution, ResolutionKind, COMBINED_CONFIG_FILENAME,
    DEFAULT_CONFIG_FILENAME,
};
use crate::config::CombinedConfig;
use crate::error::{Error, Result};

impl ConfigResolver<'_> {
    /// Write `combined` to `_multiconfig.yml` and return its path, or fall
    /// back to the default file if nothing was merged.
    ///
    /// Any existing file at the output path is overwritten.
    pub(super) fn write_combined(
        &self,
        combined: CombinedConfig,
        base: &Path,
        output_dir: Option<&Path>,
    ) -> Result<Resolution> {
        if combined.count == 0 {
            self.logger.error(&format!("No config files found. Using {DEFAULT_CONFIG_FILENAME}."));
            return Ok(Resolution::default_config(default_config_path(base)));
        }

        self.logger.info(&format!("Config based on {} files", combined.count));

        let output_path = output_dir.unwrap_or(base).join(COMBINED_CONFIG_FILENAME);
        self.logger.debug(&format!(
            "Writing {COMBINED_CONFIG_FILENAME} to {}",
            output_path.display()
        ));

        let contents = serde_yaml::to_string(&combined.config)?;
        self.fs
            .write(&output_path, &contents)
            .map_err(|source| Error::Write {
                path: output_path.clone(),
                source,
            })?;

        Ok(Resolution {
            path: output_path,
            kind: ResolutionKind::Combined,
            sources: combined.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::logging::{MemoryLogger, Severity};
    use serde_yaml::Mapping;
    use std::io;
    use std::path::PathBuf;

    fn combined(yaml: &str, count: usize) -> CombinedConfig {
        CombinedConfig {
            config: serde_yaml::from_str::<Mapping>(yaml).unwrap(),
            count,
        }
    }

    #[test]
    fn test_zero_count_falls_back_without_writing() {
        let mut fs = MockFileSystem::new();
        fs.expect_write().never();
        let logger = MemoryLogger::new();

        let resolution = ConfigResolver::new(&fs, &logger)
            .write_combined(CombinedConfig::default(), Path::new("/site"), Some(Path::new("/out")))
            .unwrap();

        assert_eq!(resolution.path, Path::new("/site/_config.yml"));
        assert_eq!(resolution.kind, ResolutionKind::Default);
        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[0].message, "No config files found. Using _config.yml.");
    }

    #[test]
    fn test_writes_to_base_dir() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .times(1)
            .withf(|path, contents| {
                path == Path::new("/site/_multiconfig.yml") && contents.contains("author: bar")
            })
            .returning(|_, _| Ok(()));
        let logger = MemoryLogger::new();

        let resolution = ConfigResolver::new(&fs, &logger)
            .write_combined(combined("author: bar\n", 2), Path::new("/site"), None)
            .unwrap();

        assert_eq!(resolution.path, PathBuf::from("/site/_multiconfig.yml"));
        assert_eq!(resolution.sources, 2);
    }

    #[test]
    fn test_writes_to_output_dir() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .times(1)
            .withf(|path, _| path == Path::new("/site/public/_multiconfig.yml"))
            .returning(|_, _| Ok(()));
        let logger = MemoryLogger::new();

        let resolution = ConfigResolver::new(&fs, &logger)
            .write_combined(
                combined("a: 1\n", 1),
                Path::new("/site"),
                Some(Path::new("/site/public")),
            )
            .unwrap();

        assert_eq!(resolution.path, Path::new("/site/public/_multiconfig.yml"));
    }

    #[test]
    fn test_log_messages() {
        let mut fs = MockFileSystem::new();
        fs.expect_write().returning(|_, _| Ok(()));
        let logger = MemoryLogger::new();

        ConfigResolver::new(&fs, &logger)
            .write_combined(combined("a: 1\n", 3), Path::new("/site"), None)
            .unwrap();

        assert_eq!(logger.messages(Severity::Info), vec!["Config based on 3 files"]);
        assert_eq!(
            logger.messages(Severity::Debug),
            vec!["Writing _multiconfig.yml to /site/_multiconfig.yml"]
        );
        assert!(logger.messages(Severity::Warning).is_empty());
        assert!(logger.messages(Severity::Error).is_empty());
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")));
        let logger = MemoryLogger::new();

        let err = ConfigResolver::new(&fs, &logger)
            .write_combined(combined("a: 1\n", 1), Path::new("/site"), None)
            .unwrap_err();

        match err {
            Error::Write { path, source } => {
                assert_eq!(path, Path::new("/site/_multiconfig.yml"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_count_of_empty_fragments_still_writes() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .times(1)
            .withf(|_, contents| contents.trim() == "{}")
            .returning(|_, _| Ok(()));
        let logger = MemoryLogger::new();

        let resolution = ConfigResolver::new(&fs, &logger)
            .write_combined(
                CombinedConfig {
                    config: Mapping::new(),
                    count: 1,
                },
                Path::new("/site"),
                None,
            )
            .unwrap();

        assert_eq!(resolution.kind, ResolutionKind::Combined);
    }
}
