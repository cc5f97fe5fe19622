// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values and their semantic kind tags.
//!
//! This module provides the `Value` type, a tagged union covering every
//! value shape a configuration field can materialize to, and `ValueKind`,
//! the semantic tag a field declares for itself and for the elements of
//! container fields.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The semantic kind a configuration field (or container element) declares.
///
/// # Examples
///
/// ```
/// use envschema::domain::value::ValueKind;
///
/// assert_eq!(ValueKind::Int.as_str(), "int");
/// assert_eq!(ValueKind::List.to_string(), "list");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// A plain string.
    Str,
    /// A signed 64-bit integer.
    Int,
    /// A boolean.
    Bool,
    /// An ordered sequence of values.
    List,
    /// An ordered, fixed sequence of values.
    Tuple,
    /// An unordered collection of unique values.
    Set,
    /// A mapping from string keys to values.
    Map,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Str => "str",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::List => "list",
            ValueKind::Tuple => "tuple",
            ValueKind::Set => "set",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed configuration value.
///
/// `Value` is what the loader stores in its internal state and what a
/// resolved configuration exposes. Raw environment input enters the pipeline
/// as `Value::Str`; parsers and transformers produce the other variants.
///
/// The type is totally ordered so sets and maps of values are deterministic.
///
/// # Examples
///
/// ```
/// use envschema::domain::value::{Value, ValueKind};
///
/// let value = Value::from("42");
/// assert_eq!(value.kind(), ValueKind::Str);
/// assert_eq!(value.coerce(ValueKind::Int, "port").unwrap(), Value::Int(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    /// A plain string.
    Str(String),
    /// A signed 64-bit integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// An ordered, fixed sequence of values.
    Tuple(Vec<Value>),
    /// An unordered collection of unique values.
    Set(BTreeSet<Value>),
    /// A mapping from string keys to values.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::List(_) => ValueKind::List,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Set(_) => ValueKind::Set,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Returns the string slice if this value is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this value is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean if this value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts this value to the target kind, used as the fallback parser
    /// and for element and rename-rule conversions.
    ///
    /// Scalars convert between `Str`, `Int`, and `Bool` (booleans via the
    /// usual token sets); a container converts to another container kind by
    /// collecting its items. Anything else fails with a parse error naming
    /// `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::value::{Value, ValueKind};
    ///
    /// assert_eq!(
    ///     Value::from("3306").coerce(ValueKind::Int, "port").unwrap(),
    ///     Value::Int(3306),
    /// );
    /// assert_eq!(
    ///     Value::Int(0).coerce(ValueKind::Str, "db").unwrap(),
    ///     Value::from("0"),
    /// );
    /// ```
    pub fn coerce(&self, kind: ValueKind, field: &str) -> Result<Value> {
        if self.kind() == kind {
            return Ok(self.clone());
        }
        match kind {
            ValueKind::Str => match self {
                Value::Int(i) => Ok(Value::Str(i.to_string())),
                Value::Bool(b) => Ok(Value::Str(b.to_string())),
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::Int => match self {
                Value::Str(s) => s
                    .trim()
                    .parse::<i64>()
                    .map(Value::Int)
                    .map_err(|e| ConfigError::parse(field, kind.as_str(), e.to_string())),
                Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::Bool => match self {
                Value::Str(s) => crate::domain::parsers::bool_from_token(s)
                    .map(Value::Bool)
                    .ok_or_else(|| {
                        ConfigError::parse(
                            field,
                            kind.as_str(),
                            format!("cannot parse \"{}\" to boolean", s),
                        )
                    }),
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::List => match self {
                Value::Tuple(items) => Ok(Value::List(items.clone())),
                Value::Set(items) => Ok(Value::List(items.iter().cloned().collect())),
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::Tuple => match self {
                Value::List(items) => Ok(Value::Tuple(items.clone())),
                Value::Set(items) => Ok(Value::Tuple(items.iter().cloned().collect())),
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::Set => match self {
                Value::List(items) | Value::Tuple(items) => {
                    Ok(Value::Set(items.iter().cloned().collect()))
                }
                _ => Err(self.coerce_error(kind, field)),
            },
            ValueKind::Map => Err(self.coerce_error(kind, field)),
        }
    }

    fn coerce_error(&self, kind: ValueKind, field: &str) -> ConfigError {
        ConfigError::parse(
            field,
            kind.as_str(),
            format!("cannot convert {} to {}", self.kind(), kind),
        )
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeSet<Value>> for Value {
    fn from(items: BTreeSet<Value>) -> Self {
        Value::Set(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) | Value::Tuple(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", rendered.join(","))
            }
            Value::Set(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", rendered.join(","))
            }
            Value::Map(entries) => {
                let rendered: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
                write!(f, "{}", rendered.join(","))
            }
        }
    }
}
