//! Reading and parsing individual configuration files.
//!
//! A fragment is always a mapping. Files that are empty (or contain only a
//! YAML/JSON `null`) load as an empty mapping; any other non-mapping top level
//! is rejected. YAML merge keys (`<<`) are expanded while loading.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::format::ConfigFormat;
use crate::error::{Error, Result};
use crate::fs::FileSystem;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads configuration fragments through a [`FileSystem`].
///
/// # Examples
///
/// ```
/// use multiconfig::config::{ConfigFormat, ConfigLoader};
/// use multiconfig::fs::OsFileSystem;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("_config.yml");
/// std::fs::write(&path, "title: My Blog\n").unwrap();
///
/// let loader = ConfigLoader::new(&OsFileSystem);
/// let fragment = loader.load(&path, ConfigFormat::Yaml).unwrap();
/// assert_eq!(fragment["title"], "My Blog");
/// ```
pub struct ConfigLoader<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ConfigLoader<'a> {
    /// Create a loader reading through `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Read `path` and parse it as `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or its
    /// top level is not a mapping. `ConfigFormat::Unsupported` is reported as
    /// an invalid path; callers are expected to filter it out first.
    pub fn load(&self, path: &Path, format: ConfigFormat) -> Result<Mapping> {
        if !format.is_supported() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "unsupported configuration format".to_string(),
            });
        }

        let bytes = self.fs.read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        let fragment = parse_fragment(path, strip_bom(&bytes), format)?;
        log::debug!("{} top-level keys in {}", fragment.len(), path.display());
        Ok(fragment)
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Parse raw file contents into a mapping.
///
/// # Errors
///
/// Returns an error if the contents are malformed or not a mapping.
///
/// # Examples
///
/// ```
/// use multiconfig::config::{parse_fragment, ConfigFormat};
/// use std::path::Path;
///
/// let yaml = parse_fragment(Path::new("a.yml"), b"author: foo\n", ConfigFormat::Yaml).unwrap();
/// let json = parse_fragment(Path::new("a.json"), br#"{"author": "foo"}"#, ConfigFormat::Json).unwrap();
/// assert_eq!(yaml, json);
/// ```
pub fn parse_fragment(path: &Path, bytes: &[u8], format: ConfigFormat) -> Result<Mapping> {
    let value: Value = match format {
        ConfigFormat::Yaml => {
            let yaml_error = |source: serde_yaml::Error| Error::YamlParse {
                path: path.to_path_buf(),
                source,
            };
            let mut value: Value = serde_yaml::from_slice(bytes).map_err(yaml_error)?;
            // Resolve `<<` merge keys so they never leak into the merged output.
            value.apply_merge().map_err(yaml_error)?;
            value
        }
        ConfigFormat::Json => {
            serde_json::from_slice(bytes).map_err(|source| Error::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
        }
        ConfigFormat::Unsupported => {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "unsupported configuration format".to_string(),
            })
        }
    };

    into_mapping(path, value)
}

fn into_mapping(path: &Path, value: Value) -> Result<Mapping> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        Value::Tagged(tagged) => into_mapping(path, tagged.value),
        other => Err(Error::InvalidFragment {
            path: path.to_path_buf(),
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
