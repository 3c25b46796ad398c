//! Candidate parsing, loading, and merging of configuration files.
//!
//! This module covers everything between the raw list of config paths and a
//! single merged mapping:
//! - [`Candidates`]: splitting the raw argument into candidate paths
//! - [`ConfigFormat`]: deciding how a file is parsed from its extension
//! - [`ConfigLoader`]: reading and parsing one file into a fragment
//! - [`ConfigMerger`] / [`deep_merge`]: folding fragments together
//! - [`ConfigCombiner`]: running the above over several candidates in order
//!
//! # Precedence
//!
//! Fragments are merged in the order the paths were listed. A later file
//! overrides scalar values from an earlier one, nested mappings are merged key
//! by key, and sequences are replaced wholesale.
//!
//! # Examples
//!
//! ```
//! use multiconfig::config::{deep_merge, parse_fragment, ConfigFormat};
//! use std::path::Path;
//!
//! let base = parse_fragment(Path::new("_config.yml"), b"title: Blog\nper_page: 10\n", ConfigFormat::Yaml).unwrap();
//! let local = parse_fragment(Path::new("local.json"), br#"{"per_page": 20}"#, ConfigFormat::Json).unwrap();
//!
//! let merged = deep_merge(base, local);
//! assert_eq!(merged["title"], "Blog");
//! assert_eq!(merged["per_page"], 20);
//! ```

pub mod candidates;
pub mod combiner;
pub mod format;
pub mod loader;
pub mod merger;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use candidates::Candidates;
pub use combiner::{CombinedConfig, ConfigCombiner};
pub use format::ConfigFormat;
pub use loader::{parse_fragment, ConfigLoader};
pub use merger::{deep_merge, ConfigMerger};
