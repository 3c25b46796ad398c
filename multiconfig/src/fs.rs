//! Filesystem access used during resolution.
//!
//! The resolver only needs three blocking operations, so they are gathered
//! behind a small trait that tests can replace.

use std::fs;
use std::io;
use std::path::Path;

/// Blocking filesystem operations needed to resolve a configuration.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
///
/// Writing creates any missing parent directories of the target.
///
/// # Examples
///
/// ```
/// use multiconfig::fs::{FileSystem, OsFileSystem};
///
/// let dir = tempfile::tempdir().unwrap();
/// let target = dir.path().join("out").join("_multiconfig.yml");
///
/// OsFileSystem.write(&target, "title: demo\n").unwrap();
/// assert!(OsFileSystem.exists(&target));
/// assert_eq!(OsFileSystem.read(&target).unwrap(), b"title: demo\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)
    }
}
