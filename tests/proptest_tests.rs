// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify the parsers and the URL transformer against
//! arbitrary inputs rather than hand-picked cases.

use envschema::adapters::UrlTransformer;
use envschema::domain::{FieldSpec, Value, ValueKind};
use envschema::ports::CompositeTransformer;
use proptest::prelude::*;

fn parse(raw: &str, spec: &FieldSpec) -> envschema::domain::Result<Value> {
    envschema::domain::parsers::parse_value(&Value::from(raw), spec, "field")
}

// Any integer survives the string round trip through the Int parser
proptest! {
    #[test]
    fn test_int_parsing_round_trip(n in any::<i64>()) {
        let spec = FieldSpec::new(ValueKind::Int);
        let parsed = parse(&n.to_string(), &spec).unwrap();
        prop_assert_eq!(parsed, Value::Int(n));
    }
}

// Surrounding whitespace never changes an integer's value
proptest! {
    #[test]
    fn test_int_parsing_ignores_whitespace(n in any::<i64>(), pad in " {0,4}") {
        let spec = FieldSpec::new(ValueKind::Int);
        let parsed = parse(&format!("{}{}{}", pad, n, pad), &spec).unwrap();
        prop_assert_eq!(parsed, Value::Int(n));
    }
}

// Boolean tokens parse regardless of letter case
proptest! {
    #[test]
    fn test_bool_tokens_case_insensitive(
        token in prop::sample::select(vec![
            "t", "y", "yes", "true", "on", "1",
            "f", "n", "no", "false", "off", "0",
        ]),
        upper in any::<bool>(),
    ) {
        let raw = if upper { token.to_uppercase() } else { token.to_string() };
        let expected = matches!(token, "t" | "y" | "yes" | "true" | "on" | "1");
        let parsed = parse(&raw, &FieldSpec::new(ValueKind::Bool)).unwrap();
        prop_assert_eq!(parsed, Value::Bool(expected));
    }
}

// Strings outside both token sets never parse as booleans
proptest! {
    #[test]
    fn test_bool_rejects_unknown_tokens(s in "[a-z]{2,8}") {
        prop_assume!(!matches!(
            s.as_str(),
            "yes" | "true" | "on" | "no" | "false" | "off"
        ));
        let result = parse(&s, &FieldSpec::new(ValueKind::Bool));
        prop_assert!(result.is_err());
    }
}

// A comma-joined list of tokens parses back element for element
proptest! {
    #[test]
    fn test_list_parsing_preserves_elements(
        items in prop::collection::vec("[a-z0-9]{1,8}", 1..6)
    ) {
        let spec = FieldSpec::new(ValueKind::List);
        let parsed = parse(&items.join(","), &spec).unwrap();
        let expected: Vec<Value> = items.into_iter().map(Value::from).collect();
        prop_assert_eq!(parsed, Value::List(expected));
    }
}

// The list length always equals the comma count plus one
proptest! {
    #[test]
    fn test_list_length_tracks_separators(raw in "[a-z,]{0,20}") {
        let spec = FieldSpec::new(ValueKind::List);
        let parsed = parse(&raw, &spec).unwrap();
        match parsed {
            Value::List(items) => {
                let commas = raw.matches(',').count();
                prop_assert_eq!(items.len(), commas + 1);
            }
            other => prop_assert!(false, "expected a list, got {:?}", other),
        }
    }
}

// Decompose-then-recompose reproduces well-formed URLs exactly
proptest! {
    #[test]
    fn test_url_round_trip(
        scheme in prop::sample::select(vec!["mysql", "postgresql", "redis", "amqp"]),
        user in "[a-z]{1,8}",
        password in "[a-z0-9]{1,8}",
        host in "[a-z]{1,10}(\\.[a-z]{2,5}){0,2}",
        port in 1u16..=65535,
        path in "[a-z0-9]{1,10}",
    ) {
        let url = format!("{}://{}:{}@{}:{}/{}", scheme, user, password, host, port, path);
        let transformer = UrlTransformer::new();
        let parts = transformer.decompose(&Value::from(url.as_str())).unwrap();
        let rebuilt = transformer.recompose(&parts).unwrap();
        prop_assert_eq!(rebuilt, Value::from(url.as_str()));
    }
}

// Decomposed components match what went into the URL
proptest! {
    #[test]
    fn test_url_decompose_extracts_components(
        host in "[a-z]{1,10}",
        port in 1u16..=65535,
        path in "[a-z0-9]{1,10}",
    ) {
        let url = format!("redis://{}:{}/{}", host, port, path);
        let parts = UrlTransformer::new().decompose(&Value::from(url.as_str())).unwrap();
        prop_assert_eq!(parts.get("host"), Some(&Value::from(host.as_str())));
        prop_assert_eq!(parts.get("port"), Some(&Value::Int(i64::from(port))));
        prop_assert_eq!(parts.get("path"), Some(&Value::from(path.as_str())));
    }
}
