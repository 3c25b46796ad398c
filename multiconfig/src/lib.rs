#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # multiconfig
//!
//! A library for resolving a static site's effective configuration file.
//!
//! A site normally reads `_config.yml` from its base directory. Users may
//! instead name one or more configuration files (YAML or JSON) as a
//! comma-separated list; this library decides which file the generator should
//! actually load, merging several files into `_multiconfig.yml` when needed.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`] and [`resolve`]: the resolution entry points
//! - [`Resolution`] and [`ResolutionKind`]: what was chosen and why
//! - [`config::ConfigCombiner`] and [`config::deep_merge`]: multi-file merging
//! - [`LogSink`], [`Logger`] and [`MemoryLogger`]: logging infrastructure
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use multiconfig::{ConfigResolver, MemoryLogger, ResolutionKind, Severity};
//! use multiconfig::fs::OsFileSystem;
//!
//! let site = tempfile::tempdir().unwrap();
//! std::fs::write(site.path().join("_config.yml"), "title: Blog\nauthor: foo\n").unwrap();
//! std::fs::write(site.path().join("author.json"), r#"{"author": "bar"}"#).unwrap();
//!
//! let logger = MemoryLogger::new();
//! let resolver = ConfigResolver::new(&OsFileSystem, &logger);
//!
//! let resolution = resolver
//!     .resolve(site.path(), Some("_config.yml, author.json, missing.yml"), None)
//!     .unwrap();
//! assert_eq!(resolution.kind, ResolutionKind::Combined);
//! assert_eq!(resolution.sources, 2);
//! assert_eq!(logger.messages(Severity::Warning), vec!["Config file missing.yml not found."]);
//!
//! let merged = std::fs::read_to_string(&resolution.path).unwrap();
//! assert!(merged.contains("author: bar"));
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use config::{deep_merge, CombinedConfig, ConfigFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, LogRecord, LogSink, Logger, MemoryLogger, Severity};
pub use resolver::{
    resolve, ConfigResolver, Resolution, ResolutionKind, COMBINED_CONFIG_FILENAME,
    DEFAULT_CONFIG_FILENAME,
};
