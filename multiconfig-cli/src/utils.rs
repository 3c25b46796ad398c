//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! mainly turning the global options into a resolution.

use crate::error::CliError;
use multiconfig::fs::OsFileSystem;
use multiconfig::path::absolutize;
use multiconfig::{ConfigResolver, LogSink, Resolution};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Site base directory.
    pub base_dir: Option<PathBuf>,

    /// Raw comma-separated list of configuration files.
    pub config: Option<String>,

    /// Directory the combined configuration is written to.
    pub output_dir: Option<PathBuf>,
}

/// Resolve a path, using CWD if not specified.
///
/// Explicit paths are made absolute against the current directory and
/// normalized lexically. Symlinks are not followed and the path does not
/// need to exist.
pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(absolutize(p)?),
        None => Ok(env::current_dir()?),
    }
}

/// Resolve the effective configuration for the given global options.
pub fn resolve_configuration(
    global: &GlobalOptions,
    logger: &dyn LogSink,
) -> Result<Resolution, CliError> {
    let base = resolve_path(global.base_dir.as_deref())?;
    let output_dir = global
        .output_dir
        .as_deref()
        .map(absolutize)
        .transpose()?;

    log::debug!("Resolving configuration under {}", base.display());

    let resolver = ConfigResolver::new(&OsFileSystem, logger);
    let resolution = resolver.resolve(&base, global.config.as_deref(), output_dir.as_deref())?;
    Ok(resolution)
}
