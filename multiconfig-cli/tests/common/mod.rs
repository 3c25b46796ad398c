//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary site directory
//! - Command builder helpers for common patterns
//! - Site fixture files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const TOOL_ENV_VARS: [&str; 4] = [
    "MULTICONFIG_BASE_DIR",
    "MULTICONFIG_CONFIG",
    "MULTICONFIG_OUTPUT_DIR",
    "MULTICONFIG_LOG_MODE",
];

/// Test environment with an isolated site directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the site directory
    pub site: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty site.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let site = temp_dir.path().to_path_buf();

        Self { temp_dir, site }
    }

    /// Create a site holding the standard configuration fixtures.
    pub fn with_fixtures() -> Self {
        let env = Self::new();
        env.write(
            "_config.yml",
            "title: Hexo\nauthor: foo\nfavorites:\n  food: sushi\n",
        );
        env.write(
            "test1.yml",
            "author: foo\ntype: dinosaur\nfavorites:\n  food: sushi\n  color: purple\n",
        );
        env.write(
            "test2.yml",
            "author: bar\nfavorites:\n  food: candy\n  ice_cream: chocolate\n",
        );
        env.write(
            "test1.json",
            r#"{"author": "dinosaur", "type": "elephant", "favorites": {"food": "burgers"}}"#,
        );
        env.write("test1.xml", "<config/>");
        env
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("multiconfig").expect("Failed to find multiconfig binary");
        for var in TOOL_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--base-dir` pointing at the site.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--base-dir").arg(&self.site);
        cmd
    }

    /// Get the site path.
    pub fn path(&self) -> &Path {
        &self.site
    }

    /// Write a file relative to the site, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.site.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    /// Read a YAML file into a value.
    pub fn read_yaml(&self, path: &Path) -> serde_yaml::Value {
        let contents = std::fs::read_to_string(path).expect("Failed to read YAML file");
        serde_yaml::from_str(&contents).expect("Failed to parse YAML file")
    }
}
