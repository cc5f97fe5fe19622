// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value parsers turning raw environment strings into typed values.
//!
//! Each parser is a pure function: it either passes an already-typed value
//! through unchanged or converts a raw string into the declared kind.
//! Container parsers split on `,` and convert each token to the field's
//! element kind; the mapping parser additionally splits each token on the
//! first `:`.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::field::FieldSpec;
use crate::domain::value::{Value, ValueKind};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Tokens recognized as `true` by the boolean parser (lowercased input).
static TRUE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["t", "y", "yes", "true", "on", "1"].into_iter().collect());

/// Tokens recognized as `false` by the boolean parser (lowercased input).
static FALSE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["f", "n", "no", "false", "off", "0"].into_iter().collect());

/// Matches a raw token against the boolean token sets, case-insensitively.
///
/// Returns `None` when the token is in neither set.
pub fn bool_from_token(token: &str) -> Option<bool> {
    let token = token.to_lowercase();
    if TRUE_TOKENS.contains(token.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parses a raw value as a boolean.
///
/// An already-typed boolean passes through unchanged. A string is lowercased
/// and matched against the fixed true set `{t, y, yes, true, on, 1}` and
/// false set `{f, n, no, false, off, 0}`; anything else fails.
///
/// # Examples
///
/// ```
/// use envschema::domain::parsers::parse_bool;
/// use envschema::domain::value::Value;
///
/// assert_eq!(parse_bool(&Value::from("YES"), "debug").unwrap(), Value::Bool(true));
/// assert_eq!(parse_bool(&Value::from("off"), "debug").unwrap(), Value::Bool(false));
/// assert!(parse_bool(&Value::from("maybe"), "debug").is_err());
/// ```
pub fn parse_bool(raw: &Value, field: &str) -> Result<Value> {
    match raw {
        Value::Bool(_) => Ok(raw.clone()),
        Value::Str(s) => bool_from_token(s).map(Value::Bool).ok_or_else(|| {
            ConfigError::parse(field, "bool", format!("cannot parse \"{}\" to boolean", s))
        }),
        other => Err(ConfigError::parse(
            field,
            "bool",
            format!("cannot convert {} to bool", other.kind()),
        )),
    }
}

/// Parses a raw value as a list, tuple, or set.
///
/// A value already of the declared container kind passes through unchanged
/// without re-validating its elements. A string is split on `,`, each token
/// converted to the element kind, and the results collected into the declared
/// container.
///
/// An empty string yields a one-element container holding the converted empty
/// string, because splitting an empty string produces a single empty token.
pub fn parse_sequence(
    raw: &Value,
    kind: ValueKind,
    element: ValueKind,
    field: &str,
) -> Result<Value> {
    debug_assert!(matches!(
        kind,
        ValueKind::List | ValueKind::Tuple | ValueKind::Set
    ));
    if raw.kind() == kind {
        return Ok(raw.clone());
    }
    match raw {
        Value::Str(s) => {
            let items = s
                .split(',')
                .map(|token| Value::Str(token.to_string()).coerce(element, field))
                .collect::<Result<Vec<Value>>>()?;
            Ok(match kind {
                ValueKind::List => Value::List(items),
                ValueKind::Tuple => Value::Tuple(items),
                _ => Value::Set(items.into_iter().collect::<BTreeSet<Value>>()),
            })
        }
        other => Err(ConfigError::parse(
            field,
            kind.as_str(),
            format!("cannot convert {} to {}", other.kind(), kind),
        )),
    }
}

/// Parses a raw value as a mapping.
///
/// An already-typed mapping passes through unchanged. A string is split on
/// `,` into tokens, each token split on the first `:` into key and value;
/// the value is converted to the element kind while keys stay strings. A
/// token without a `:` fails.
///
/// # Examples
///
/// ```
/// use envschema::domain::parsers::parse_map;
/// use envschema::domain::value::{Value, ValueKind};
///
/// let parsed = parse_map(&Value::from("a:1,b:2"), ValueKind::Int, "weights").unwrap();
/// assert_eq!(parsed.to_string(), "a:1,b:2");
/// assert!(parse_map(&Value::from("a1,b2"), ValueKind::Int, "weights").is_err());
/// ```
pub fn parse_map(raw: &Value, element: ValueKind, field: &str) -> Result<Value> {
    match raw {
        Value::Map(_) => Ok(raw.clone()),
        Value::Str(s) => {
            let mut entries = BTreeMap::new();
            for token in s.split(',') {
                let (key, value) = token.split_once(':').ok_or_else(|| {
                    ConfigError::parse(
                        field,
                        "map",
                        format!("entry \"{}\" is missing a ':' separator", token),
                    )
                })?;
                let value = Value::Str(value.to_string()).coerce(element, field)?;
                entries.insert(key.to_string(), value);
            }
            Ok(Value::Map(entries))
        }
        other => Err(ConfigError::parse(
            field,
            "map",
            format!("cannot convert {} to map", other.kind()),
        )),
    }
}

/// Parses a resolved raw value according to a field declaration.
///
/// A custom parser on the field fully overrides the built-in parsers and
/// receives the raw value together with the field's element kind. Otherwise
/// booleans and containers use their dedicated parsers, and every remaining
/// kind falls back to direct coercion with the declared kind.
pub fn parse_value(raw: &Value, spec: &FieldSpec, field: &str) -> Result<Value> {
    if let Some(parser) = spec.custom_parser() {
        return parser(raw, spec.element_kind());
    }
    match spec.kind() {
        ValueKind::Bool => parse_bool(raw, field),
        ValueKind::List | ValueKind::Tuple | ValueKind::Set => {
            parse_sequence(raw, spec.kind(), spec.element_kind(), field)
        }
        ValueKind::Map => parse_map(raw, spec.element_kind(), field),
        kind => raw.coerce(kind, field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_true_tokens_any_case() {
        for token in ["t", "y", "yes", "true", "on", "1", "T", "YES", "True", "ON"] {
            assert_eq!(
                parse_bool(&Value::from(token), "f").unwrap(),
                Value::Bool(true),
                "failed for token: {}",
                token
            );
        }
    }

    #[test]
    fn test_bool_false_tokens_any_case() {
        for token in ["f", "n", "no", "false", "off", "0", "F", "NO", "False", "OFF"] {
            assert_eq!(
                parse_bool(&Value::from(token), "f").unwrap(),
                Value::Bool(false),
                "failed for token: {}",
                token
            );
        }
    }

    #[test]
    fn test_bool_invalid_token() {
        let result = parse_bool(&Value::from("maybe"), "debug");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_bool_passthrough() {
        assert_eq!(
            parse_bool(&Value::Bool(true), "f").unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_list_of_strings() {
        let parsed = parse_sequence(&Value::from("a,b,c"), ValueKind::List, ValueKind::Str, "f")
            .unwrap();
        assert_eq!(
            parsed,
            Value::List(vec![Value::from("a"), Value::from("b"), Value::from("c")])
        );
    }

    #[test]
    fn test_list_of_ints() {
        let parsed = parse_sequence(&Value::from("1,2,3"), ValueKind::List, ValueKind::Int, "f")
            .unwrap();
        assert_eq!(
            parsed,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_tuple_and_set_collection() {
        let parsed = parse_sequence(&Value::from("2,1,2"), ValueKind::Tuple, ValueKind::Int, "f")
            .unwrap();
        assert_eq!(
            parsed,
            Value::Tuple(vec![Value::Int(2), Value::Int(1), Value::Int(2)])
        );

        let parsed = parse_sequence(&Value::from("2,1,2"), ValueKind::Set, ValueKind::Int, "f")
            .unwrap();
        assert_eq!(
            parsed,
            Value::Set([Value::Int(1), Value::Int(2)].into_iter().collect())
        );
    }

    #[test]
    fn test_sequence_passthrough_skips_element_validation() {
        // An already-typed list is returned as-is, even if its elements do
        // not match the declared element kind.
        let list = Value::List(vec![Value::from("not-an-int")]);
        let parsed = parse_sequence(&list, ValueKind::List, ValueKind::Int, "f").unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_empty_string_yields_single_element() {
        let parsed =
            parse_sequence(&Value::from(""), ValueKind::List, ValueKind::Str, "f").unwrap();
        assert_eq!(parsed, Value::List(vec![Value::from("")]));
    }

    #[test]
    fn test_list_bad_element() {
        let result = parse_sequence(&Value::from("1,x,3"), ValueKind::List, ValueKind::Int, "f");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_map_of_ints() {
        let parsed = parse_map(&Value::from("a:1,b:2"), ValueKind::Int, "f").unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("a".to_string(), Value::Int(1));
        expected.insert("b".to_string(), Value::Int(2));
        assert_eq!(parsed, Value::Map(expected));
    }

    #[test]
    fn test_map_missing_colon() {
        let result = parse_map(&Value::from("a1,b2"), ValueKind::Int, "f");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_map_splits_on_first_colon() {
        let parsed = parse_map(&Value::from("url:redis://host"), ValueKind::Str, "f").unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("url".to_string(), Value::from("redis://host"));
        assert_eq!(parsed, Value::Map(expected));
    }

    #[test]
    fn test_map_passthrough() {
        let mut entries = BTreeMap::new();
        entries.insert("k".to_string(), Value::Int(1));
        let map = Value::Map(entries);
        assert_eq!(parse_map(&map, ValueKind::Int, "f").unwrap(), map);
    }

    #[test]
    fn test_parse_value_fallback_coercion() {
        let spec = FieldSpec::new(ValueKind::Int);
        assert_eq!(
            parse_value(&Value::from("8080"), &spec, "port").unwrap(),
            Value::Int(8080)
        );
    }

    #[test]
    fn test_parse_value_custom_parser_overrides() {
        let spec = FieldSpec::new(ValueKind::Int)
            .parser(|raw, _element| Ok(Value::Int(raw.to_string().len() as i64)));
        assert_eq!(
            parse_value(&Value::from("abcd"), &spec, "f").unwrap(),
            Value::Int(4)
        );
    }

    #[test]
    fn test_parse_value_custom_parser_receives_element_kind() {
        let spec = FieldSpec::new(ValueKind::List)
            .element(ValueKind::Int)
            .parser(|_raw, element| Ok(Value::Str(element.to_string())));
        assert_eq!(
            parse_value(&Value::from("1,2"), &spec, "f").unwrap(),
            Value::from("int")
        );
    }
}
