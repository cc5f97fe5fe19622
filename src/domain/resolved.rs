// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable result of a successful configuration load.
//!
//! A `ResolvedConfig` maps every materialized attribute name to its final
//! typed value. It is only ever produced by a fully validated load; no
//! partially constructed instance is exposed.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::{Value, ValueKind};
use std::collections::BTreeMap;

/// An immutable mapping from attribute names to final typed values.
///
/// Instances are safe to share and read across threads; they never change
/// after construction.
///
/// # Examples
///
/// ```
/// use envschema::prelude::*;
///
/// let schema = ConfigSchema::builder("app")
///     .field("debug", FieldSpec::new(ValueKind::Bool).default(true))
///     .build();
/// let config = ConfigLoader::builder(schema)
///     .source(StaticEnvSource::new())
///     .build()
///     .load()
///     .unwrap();
///
/// assert!(config.bool_value("debug").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    pub(crate) fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Returns the value stored under an attribute name, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Whether a value is stored under the attribute name.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Returns the value under an attribute name or a `FieldNotFound` error.
    pub fn require(&self, field: &str) -> Result<&Value> {
        self.values
            .get(field)
            .ok_or_else(|| ConfigError::FieldNotFound {
                field: field.to_string(),
            })
    }

    /// Returns the string stored under an attribute name.
    pub fn str_value(&self, field: &str) -> Result<&str> {
        match self.require(field)? {
            Value::Str(s) => Ok(s),
            other => Err(self.mismatch(field, ValueKind::Str, other)),
        }
    }

    /// Returns the integer stored under an attribute name.
    pub fn int_value(&self, field: &str) -> Result<i64> {
        match self.require(field)? {
            Value::Int(i) => Ok(*i),
            other => Err(self.mismatch(field, ValueKind::Int, other)),
        }
    }

    /// Returns the boolean stored under an attribute name.
    pub fn bool_value(&self, field: &str) -> Result<bool> {
        match self.require(field)? {
            Value::Bool(b) => Ok(*b),
            other => Err(self.mismatch(field, ValueKind::Bool, other)),
        }
    }

    /// Returns the list or tuple items stored under an attribute name.
    pub fn list_value(&self, field: &str) -> Result<&[Value]> {
        match self.require(field)? {
            Value::List(items) | Value::Tuple(items) => Ok(items),
            other => Err(self.mismatch(field, ValueKind::List, other)),
        }
    }

    /// Returns the map entries stored under an attribute name.
    pub fn map_value(&self, field: &str) -> Result<&BTreeMap<String, Value>> {
        match self.require(field)? {
            Value::Map(entries) => Ok(entries),
            other => Err(self.mismatch(field, ValueKind::Map, other)),
        }
    }

    /// Iterates over `(attribute name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// The number of resolved attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attribute was resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn mismatch(&self, field: &str, expected: ValueKind, actual: &Value) -> ConfigError {
        ConfigError::KindMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.kind().to_string(),
        }
    }
}

impl From<ResolvedConfig> for BTreeMap<String, Value> {
    fn from(config: ResolvedConfig) -> Self {
        config.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedConfig {
        let mut values = BTreeMap::new();
        values.insert("host".to_string(), Value::from("localhost"));
        values.insert("port".to_string(), Value::Int(5432));
        values.insert("debug".to_string(), Value::Bool(false));
        values.insert(
            "hosts".to_string(),
            Value::List(vec![Value::from("a"), Value::from("b")]),
        );
        ResolvedConfig::new(values)
    }

    #[test]
    fn test_typed_accessors() {
        let config = sample();
        assert_eq!(config.str_value("host").unwrap(), "localhost");
        assert_eq!(config.int_value("port").unwrap(), 5432);
        assert!(!config.bool_value("debug").unwrap());
        assert_eq!(config.list_value("hosts").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_field() {
        let config = sample();
        let result = config.str_value("missing");
        assert!(matches!(result, Err(ConfigError::FieldNotFound { .. })));
        assert!(config.get("missing").is_none());
        assert!(!config.contains("missing"));
    }

    #[test]
    fn test_kind_mismatch() {
        let config = sample();
        let result = config.int_value("host");
        assert!(matches!(result, Err(ConfigError::KindMismatch { .. })));
    }

    #[test]
    fn test_iteration_and_len() {
        let config = sample();
        assert_eq!(config.len(), 4);
        assert!(!config.is_empty());
        assert!(config.iter().any(|(name, _)| name == "port"));
    }

    #[test]
    fn test_into_map() {
        let map: BTreeMap<String, Value> = sample().into();
        assert_eq!(map.get("port"), Some(&Value::Int(5432)));
    }
}
