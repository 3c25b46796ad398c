//! Parsing of the raw `--config` style argument into candidate paths.
//!
//! A lone candidate is resolved against the base directory straight away:
//! relative candidates become absolute, absolute ones are kept as typed.
//! When several candidates are given they are kept exactly as typed (minus
//! surrounding whitespace) and resolved one at a time by the combiner, which
//! also reports them by their original spelling.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::path::resolve_against;

/// Candidate configuration paths parsed from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// One candidate, already absolute.
    Single(PathBuf),
    /// Two or more candidates, in input order, unresolved.
    Multiple(Vec<String>),
}

impl Candidates {
    /// Parse a comma-separated list of config paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a lone relative candidate cannot be made absolute
    /// because the current directory is unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiconfig::config::Candidates;
    /// use std::path::{Path, PathBuf};
    ///
    /// let base = Path::new("/site");
    ///
    /// assert_eq!(
    ///     Candidates::parse("custom.yml", base).unwrap(),
    ///     Candidates::Single(PathBuf::from("/site/custom.yml"))
    /// );
    /// assert_eq!(
    ///     Candidates::parse("a.yml, b.json", base).unwrap(),
    ///     Candidates::Multiple(vec!["a.yml".to_string(), "b.json".to_string()])
    /// );
    /// ```
    pub fn parse(raw: &str, base: &Path) -> Result<Self> {
        if raw.contains(',') {
            Ok(Self::Multiple(
                raw.split(',').map(|piece| piece.trim().to_string()).collect(),
            ))
        } else {
            Ok(Self::Single(resolve_against(base, raw)?))
        }
    }
}
