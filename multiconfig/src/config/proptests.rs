//! Property-based tests for configuration merging.

use super::merger::{deep_merge, ConfigMerger};
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn to_mapping(entries: Vec<(String, Value)>) -> Mapping {
    entries
        .into_iter()
        .map(|(k, v)| (Value::String(k), v))
        .collect()
}

// Small key alphabet so that fragments collide often
fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-d]", inner), 0..4)
                .prop_map(|entries| Value::Mapping(to_mapping(entries))),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::vec(("[a-d]", value_strategy()), 0..5).prop_map(to_mapping)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn merge_with_empty_is_identity(m in mapping_strategy()) {
        prop_assert_eq!(deep_merge(m.clone(), Mapping::new()), m.clone());
        prop_assert_eq!(deep_merge(Mapping::new(), m.clone()), m);
    }

    #[test]
    fn merge_with_self_is_identity(m in mapping_strategy()) {
        prop_assert_eq!(deep_merge(m.clone(), m.clone()), m);
    }

    #[test]
    fn merged_keys_are_union(a in mapping_strategy(), b in mapping_strategy()) {
        let merged = deep_merge(a.clone(), b.clone());
        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        for key in merged.keys() {
            prop_assert!(a.contains_key(key) || b.contains_key(key));
        }
    }

    #[test]
    fn later_non_mapping_values_win(a in mapping_strategy(), b in mapping_strategy()) {
        let merged = deep_merge(a, b.clone());
        for (key, value) in &b {
            if !value.is_mapping() {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }

    #[test]
    fn untouched_keys_survive(a in mapping_strategy(), b in mapping_strategy()) {
        let merged = deep_merge(a.clone(), b.clone());
        for (key, value) in &a {
            if !b.contains_key(key) {
                prop_assert_eq!(&merged[key], value);
            }
        }
    }

    #[test]
    fn fold_matches_pairwise(a in mapping_strategy(), b in mapping_strategy(), c in mapping_strategy()) {
        let folded = ConfigMerger::merge([a.clone(), b.clone(), c.clone()]);
        let pairwise = deep_merge(deep_merge(a, b), c);
        prop_assert_eq!(folded, pairwise);
    }
}
