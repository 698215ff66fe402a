use std::collections::HashSet;

use proptest::prelude::*;
use trellis_codegen::{NameResolver, build_model};
use trellis_ir::CatalogEntry;

const SEGMENTS: &[&str] = &["androidx", "compose", "core", "ktx", "test", "ui"];

fn segment() -> impl Strategy<Value = String> {
    (prop::sample::select(SEGMENTS), any::<bool>()).prop_map(|(segment, upper)| {
        if upper {
            segment.to_uppercase()
        } else {
            segment.to_string()
        }
    })
}

fn alias(depth: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), depth).prop_map(|segments| segments.join("."))
}

/// Library entries whose coordinate is the lower-cased alias, so case
/// variants carry identical payloads and collapse instead of conflicting.
fn entries(depth: std::ops::Range<usize>) -> impl Strategy<Value = Vec<CatalogEntry>> {
    prop::collection::vec(alias(depth), 1..16).prop_map(|aliases| {
        aliases
            .into_iter()
            .map(|alias| {
                let coordinate = alias.to_lowercase();
                CatalogEntry::library(alias, coordinate)
            })
            .collect()
    })
}

fn shuffled_pair() -> impl Strategy<Value = (Vec<CatalogEntry>, Vec<CatalogEntry>)> {
    entries(1..4).prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
}

proptest! {
    #[test]
    fn test_resolution_is_permutation_invariant((entries, shuffled) in shuffled_pair()) {
        let a = NameResolver::resolve(&entries).unwrap();
        let b = NameResolver::resolve(&shuffled).unwrap();

        // IndexMap equality ignores order, the serialized form does not
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        prop_assert_eq!(build_model("libs", &a).unwrap(), build_model("libs", &b).unwrap());
    }

    #[test]
    fn test_every_entry_is_reachable(entries in entries(1..4)) {
        let resolved = NameResolver::resolve(&entries).unwrap();

        for entry in &entries {
            let leaf = resolved.libraries.lookup(&entry.alias);
            prop_assert!(leaf.is_some(), "'{}' is not reachable", entry.alias);
            prop_assert!(leaf.unwrap().entry.same_payload(entry));
        }

        let distinct: HashSet<&str> = entries.iter().map(|e| e.coordinate.as_str()).collect();
        prop_assert_eq!(resolved.libraries.entry_count(), distinct.len());
    }

    #[test]
    fn test_equal_depth_aliases_have_no_defaults(entries in entries(2..3)) {
        let resolved = NameResolver::resolve(&entries).unwrap();
        prop_assert_eq!(resolved.libraries.default_count(), 0);
    }

    #[test]
    fn test_classes_follow_their_references(entries in entries(1..4)) {
        let resolved = NameResolver::resolve(&entries).unwrap();
        let model = build_model("libs", &resolved).unwrap();

        let mut emitted = HashSet::new();
        for class in &model.classes {
            for reference in class.group_methods().filter_map(|m| m.class_ref()) {
                prop_assert!(
                    emitted.contains(reference.name.as_str()),
                    "{} references {} before it is emitted",
                    class.name,
                    reference.name
                );
            }
            emitted.insert(class.name.as_str());
        }
    }
}
