//! Common test utilities for integration tests.
//!
//! This module provides a scratch site directory pre-populated with the
//! configuration files most tests need.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use tempfile::TempDir;

/// Files written into every [`SiteFixture`].
pub const SITE_FILES: &[(&str, &str)] = &[
    (
        "test1.yml",
        "author: foo\ntype: dinosaur\nfavorites:\n  food: sushi\n  color: purple",
    ),
    (
        "test2.yml",
        "author: bar\nfavorites:\n  food: candy\n  ice_cream: chocolate",
    ),
    (
        "test1.json",
        r#"{"author": "dinosaur","type": "elephant","favorites": {"food": "burgers"}}"#,
    ),
    (
        "test2.json",
        r#"{"author": "waldo","favorites": {"food": "ice cream","ice_cream": "strawberry"}}"#,
    ),
    ("test1.xml", ""),
];

/// A temporary site base directory.
///
/// The directory is removed when the fixture is dropped.
pub struct SiteFixture {
    #[allow(dead_code)]
    temp_dir: TempDir,
    base: PathBuf,
}

#[allow(dead_code)]
impl SiteFixture {
    /// Create a site containing [`SITE_FILES`].
    pub fn new() -> Self {
        let site = Self::empty();
        for (name, content) in SITE_FILES {
            site.write(name, content);
        }
        site
    }

    /// Create a site with no files at all.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        Self { temp_dir, base }
    }

    /// The site's base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Write a file relative to the base directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Path of the combined config under the base directory.
    pub fn combined_path(&self) -> PathBuf {
        self.base.join("_multiconfig.yml")
    }

    /// Path of the default config under the base directory.
    pub fn default_path(&self) -> PathBuf {
        self.base.join("_config.yml")
    }
}

/// Parse a YAML file into a mapping.
#[allow(dead_code)]
pub fn read_mapping(path: &Path) -> Mapping {
    let contents = fs::read_to_string(path).expect("Failed to read config");
    serde_yaml::from_str(&contents).expect("Config is not valid YAML")
}

/// Parse a YAML literal into a mapping.
#[allow(dead_code)]
pub fn mapping(yaml: &str) -> Mapping {
    serde_yaml::from_str(yaml).expect("Invalid YAML literal")
}
