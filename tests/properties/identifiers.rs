//! Property tests for identifier resolution.

use std::collections::HashSet;

use proptest::prelude::*;

use spider::config::NamingConvention;
use spider::domain::services::dart;
use spider::domain::services::identifier::{resolve_names, ResolveOptions};

fn stem() -> impl Strategy<Value = String> {
    // Printable names with separators, digits and a few non-ASCII letters;
    // at least one ASCII alphanumeric so the name is resolvable.
    proptest::string::string_regex("[A-Za-z0-9 _\\-.@éß]{0,16}")
        .unwrap()
        .prop_filter("has an alphanumeric", |s| {
            s.chars().any(|c| c.is_ascii_alphanumeric())
        })
}

/// Names that must never be emitted verbatim: keywords and `Object` members.
fn clashing_stem() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("class".to_string()),
        Just("new".to_string()),
        Just("values".to_string()),
        Just("hashCode".to_string()),
        Just("hash_code".to_string()),
        Just("toString".to_string()),
        Just("runtimeType".to_string()),
        Just("no-such-method".to_string()),
    ]
}

fn any_stem() -> impl Strategy<Value = String> {
    prop_oneof![3 => stem(), 1 => clashing_stem()]
}

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(png|svg|jpg|PNG|json|[a-z0-9]{0,3})").unwrap()
}

fn convention() -> impl Strategy<Value = NamingConvention> {
    prop_oneof![
        Just(NamingConvention::Camel),
        Just(NamingConvention::Snake),
        Just(NamingConvention::Pascal),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every resolved identifier is a legal, non-reserved Dart identifier.
    #[test]
    fn property_identifiers_are_valid(
        names in proptest::collection::vec((any_stem(), extension()), 0..24),
        convention in convention(),
    ) {
        let pairs: Vec<(&str, &str)> =
            names.iter().map(|(s, e)| (s.as_str(), e.as_str())).collect();
        let options = ResolveOptions::new(convention).with_reserved("values");

        let resolved = resolve_names(&pairs, &options).unwrap();
        prop_assert_eq!(resolved.len(), pairs.len());
        for name in &resolved {
            prop_assert!(
                dart::is_valid_identifier(&name.identifier),
                "invalid identifier {:?}",
                name.identifier
            );
            prop_assert_ne!(name.identifier.as_str(), "values");
        }
    }

    /// PROPERTY: identifiers within a group never collide, even ignoring case.
    #[test]
    fn property_identifiers_are_distinct(
        names in proptest::collection::vec((any_stem(), extension()), 0..24),
        convention in convention(),
    ) {
        let pairs: Vec<(&str, &str)> =
            names.iter().map(|(s, e)| (s.as_str(), e.as_str())).collect();
        let options = ResolveOptions::new(convention);

        let resolved = resolve_names(&pairs, &options).unwrap();
        let mut seen = HashSet::new();
        for name in &resolved {
            prop_assert!(
                seen.insert(name.identifier.to_ascii_lowercase()),
                "duplicate identifier {:?} in {:?}",
                name.identifier,
                resolved
            );
        }
    }

    /// PROPERTY: resolution is deterministic for the same input order.
    #[test]
    fn property_resolution_is_deterministic(
        names in proptest::collection::vec((stem(), extension()), 0..16),
    ) {
        let pairs: Vec<(&str, &str)> =
            names.iter().map(|(s, e)| (s.as_str(), e.as_str())).collect();
        let options = ResolveOptions::new(NamingConvention::Camel);

        prop_assert_eq!(
            resolve_names(&pairs, &options).unwrap(),
            resolve_names(&pairs, &options).unwrap()
        );
    }
}
