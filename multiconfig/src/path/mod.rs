//! Lexical path normalization.
//!
//! Candidate paths are resolved against the site's base directory without
//! touching the filesystem: nothing is canonicalized and symlinks are left
//! alone, so a path that does not exist yet still resolves.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// Resolve `.` and `..` components in a path.
///
/// `..` at the root stays at the root, matching how shells and most path
/// libraries treat `/..`.
///
/// # Examples
///
/// ```
/// use multiconfig::path::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/b/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    // Number of leading `..` that could not be collapsed (relative inputs only).
    let mut leading_parents = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = result.has_root() && result.parent().is_none();
                if at_root {
                    continue;
                }
                if result.file_name().is_some() && !result.ends_with("..") {
                    result.pop();
                } else {
                    result.push("..");
                    leading_parents += 1;
                }
            }
            Component::Normal(c) => result.push(c),
        }
    }

    if result.as_os_str().is_empty() && leading_parents == 0 {
        result.push(".");
    }

    result
}

/// Resolve `candidate` against `base` the way a shell would.
///
/// Absolute candidates are returned exactly as given. Relative candidates are
/// joined onto `base` and made absolute with [`absolutize`], so a relative
/// `base` is taken from the current directory.
///
/// # Errors
///
/// Returns an error if the joined path is relative and the current directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use multiconfig::path::resolve_against;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/site");
/// assert_eq!(resolve_against(base, "_config.yml").unwrap(), PathBuf::from("/site/_config.yml"));
/// assert_eq!(resolve_against(base, "../shared/a.yml").unwrap(), PathBuf::from("/shared/a.yml"));
/// assert_eq!(resolve_against(base, "/etc/../site.json").unwrap(), PathBuf::from("/etc/../site.json"));
/// ```
pub fn resolve_against(base: &Path, candidate: impl AsRef<Path>) -> Result<PathBuf> {
    let candidate = candidate.as_ref();
    if candidate.is_absolute() {
        Ok(candidate.to_path_buf())
    } else {
        absolutize(&base.join(candidate))
    }
}

/// Make `path` absolute using the current directory, then normalize it.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```
/// use multiconfig::path::absolutize;
/// use std::path::Path;
///
/// let site = absolutize(Path::new("blog")).unwrap();
/// assert!(site.is_absolute());
/// assert!(site.ends_with("blog"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(resolve_components(&cwd.join(path)))
}
