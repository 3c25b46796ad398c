//! Property-based tests for lexical path resolution.

use super::{resolve_against, resolve_components};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

// Plain names mixed with `.` and `..` so that resolution has work to do
fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    relative_path_strategy().prop_map(|rel| PathBuf::from(format!("/{rel}")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // resolve_components(resolve_components(p)) == resolve_components(p)
    #[test]
    fn resolution_is_idempotent(path in absolute_path_strategy()) {
        let once = resolve_components(&path);
        prop_assert_eq!(resolve_components(&once), once);
    }

    // Resolved absolute paths contain neither `.` nor `..`
    #[test]
    fn absolute_paths_are_fully_resolved(path in absolute_path_strategy()) {
        let resolved = resolve_components(&path);
        prop_assert!(resolved.is_absolute());
        for component in resolved.components() {
            prop_assert!(!matches!(component, Component::CurDir | Component::ParentDir));
        }
    }

    // Relative candidates always come back absolute
    #[test]
    fn candidates_resolve_to_absolute(candidate in relative_path_strategy()) {
        let resolved = resolve_against(std::path::Path::new("/site"), &candidate).unwrap();
        prop_assert!(resolved.is_absolute());
    }

    // Absolute candidates are returned untouched, whatever the base
    #[test]
    fn absolute_candidates_are_verbatim(path in absolute_path_strategy()) {
        let from_site = resolve_against(std::path::Path::new("/site"), &path).unwrap();
        let from_blog = resolve_against(std::path::Path::new("blog"), &path).unwrap();
        prop_assert_eq!(&from_site, &path);
        prop_assert_eq!(from_blog, path);
    }
}
