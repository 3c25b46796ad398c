//! Deep merging of configuration fragments.
//!
//! # Merging Rules
//!
//! - Mappings on both sides: merged key by key, recursively
//! - Anything else: the source value replaces the target value
//!
//! "Anything else" includes sequences (a later list replaces an earlier one
//! rather than being appended to it) and `null` (an explicit `null` in a later
//! file clears the earlier value). Keys keep the position they first appeared
//! at; keys new to the target are appended in source order.

use serde_yaml::{Mapping, Value};

/// Deep-merge `source` on top of `target` and return the result.
///
/// # Examples
///
/// ```
/// use multiconfig::config::deep_merge;
/// use serde_yaml::Mapping;
///
/// let target: Mapping = serde_yaml::from_str("author: foo\nfavorites: {food: sushi, color: purple}").unwrap();
/// let source: Mapping = serde_yaml::from_str("author: bar\nfavorites: {food: candy}").unwrap();
///
/// let merged = deep_merge(target, source);
/// assert_eq!(merged["author"], "bar");
/// assert_eq!(merged["favorites"]["food"], "candy");
/// assert_eq!(merged["favorites"]["color"], "purple");
/// ```
#[must_use]
pub fn deep_merge(mut target: Mapping, source: Mapping) -> Mapping {
    ConfigMerger::merge_into(&mut target, source);
    target
}

/// Merges configuration fragments in order.
///
/// # Examples
///
/// ```
/// use multiconfig::config::ConfigMerger;
/// use serde_yaml::Mapping;
///
/// let low: Mapping = serde_yaml::from_str("title: low").unwrap();
/// let high: Mapping = serde_yaml::from_str("title: high").unwrap();
///
/// let merged = ConfigMerger::merge([low, high]);
/// assert_eq!(merged["title"], "high");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge fragments from first to last; later fragments win.
    #[must_use]
    pub fn merge(fragments: impl IntoIterator<Item = Mapping>) -> Mapping {
        let mut result = Mapping::new();

        for fragment in fragments {
            Self::merge_into(&mut result, fragment);
        }

        result
    }

    /// Merge `source` into `target` (source overwrites target).
    pub fn merge_into(target: &mut Mapping, source: Mapping) {
        for (key, source_value) in source {
            let new_entry = match (target.get_mut(&key), source_value) {
                (Some(Value::Mapping(target_map)), Value::Mapping(source_map)) => {
                    Self::merge_into(target_map, source_map);
                    None
                }
                (Some(slot), source_value) => {
                    *slot = source_value;
                    None
                }
                (None, source_value) => Some(source_value),
            };

            if let Some(value) = new_entry {
                target.insert(key, value);
            }
        }
    }
}
