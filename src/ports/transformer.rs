// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composite transformer trait definition and rename rules.
//!
//! A composite transformer is the bidirectional converter between one
//! external scalar representation (for example a URL string) and several
//! internal named fields. `decompose` splits the composite value into keyed
//! parts, `recompose` reassembles the composite value from the loader's
//! internal state. Either direction may be unsupported; the loader treats
//! `ConfigError::UnsupportedTransform` as a per-field no-op.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::{Value, ValueKind};
use std::collections::BTreeMap;

/// A declared renaming between a composite part and a configuration field.
///
/// During decomposition a produced part whose name matches the `part` side is
/// stored under the `field` side's name after conversion to the `field`
/// side's kind; a failed conversion drops the pair from the result (logged at
/// warn level). During recomposition a state entry matching the `field` side
/// is emitted under the `part` side's name after conversion to the `part`
/// side's kind, and a failed conversion propagates.
///
/// # Examples
///
/// ```
/// use envschema::ports::transformer::RenameRule;
/// use envschema::domain::value::ValueKind;
///
/// // Store the URL path component in the `name` field.
/// let rule = RenameRule::new(("path", ValueKind::Str), ("name", ValueKind::Str));
/// assert_eq!(rule.part_name(), "path");
/// assert_eq!(rule.field_name(), "name");
/// ```
#[derive(Clone, Debug)]
pub struct RenameRule {
    part_name: String,
    part_kind: ValueKind,
    field_name: String,
    field_kind: ValueKind,
}

impl RenameRule {
    /// Creates a rename rule from a `(name, kind)` pair for the composite
    /// part side and one for the configuration field side.
    pub fn new(part: (&str, ValueKind), field: (&str, ValueKind)) -> Self {
        Self {
            part_name: part.0.to_string(),
            part_kind: part.1,
            field_name: field.0.to_string(),
            field_kind: field.1,
        }
    }

    /// The composite part name this rule matches during decomposition.
    pub fn part_name(&self) -> &str {
        &self.part_name
    }

    /// The configuration field name this rule matches during recomposition.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

/// Applies rename rules to a decomposed part map.
///
/// Parts without a matching rule pass through unchanged. A part matching a
/// rule is stored under the rule's field name after conversion to the field
/// kind; if the conversion fails the pair is dropped from the result, which
/// is deliberate lossy behavior, surfaced as a warning.
pub fn apply_renames(
    rules: &[RenameRule],
    parts: BTreeMap<String, Value>,
) -> BTreeMap<String, Value> {
    let mut renamed = BTreeMap::new();
    for (key, value) in parts {
        match rules.iter().find(|rule| rule.part_name == key) {
            Some(rule) => match value.coerce(rule.field_kind, &rule.field_name) {
                Ok(converted) => {
                    renamed.insert(rule.field_name.clone(), converted);
                }
                Err(e) => {
                    tracing::warn!(
                        part = %key,
                        field = %rule.field_name,
                        "dropping composite part, rename conversion failed: {}",
                        e
                    );
                }
            },
            None => {
                renamed.insert(key, value);
            }
        }
    }
    renamed
}

/// Reverses rename rules over the loader's internal state.
///
/// Entries without a matching rule pass through unchanged. An entry matching
/// a rule's field side is emitted under the rule's part name after conversion
/// to the part kind; unlike decomposition, a failed conversion here
/// propagates as an error.
pub fn unapply_renames(
    rules: &[RenameRule],
    state: &BTreeMap<String, Value>,
) -> Result<BTreeMap<String, Value>> {
    let mut restored = BTreeMap::new();
    for (key, value) in state {
        match rules.iter().find(|rule| &rule.field_name == key) {
            Some(rule) => {
                let converted = value.coerce(rule.part_kind, &rule.part_name)?;
                restored.insert(rule.part_name.clone(), converted);
            }
            None => {
                restored.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(restored)
}

/// A bidirectional converter between one composite value and several named
/// internal values.
///
/// Implementations must be `Send + Sync`; a transformer is stateless aside
/// from its rename rules and may be shared between field declarations.
///
/// Both methods default to reporting the operation as unsupported, so
/// one-directional transformers only override the direction they implement.
///
/// # Examples
///
/// ```
/// use envschema::ports::transformer::CompositeTransformer;
/// use envschema::domain::value::Value;
/// use envschema::domain::errors::Result;
/// use std::collections::BTreeMap;
///
/// struct SplitAt;
///
/// impl CompositeTransformer for SplitAt {
///     fn decompose(&self, value: &Value) -> Result<BTreeMap<String, Value>> {
///         let raw = value.as_str().unwrap_or_default();
///         let (user, host) = raw.split_once('@').unwrap_or((raw, ""));
///         let mut parts = BTreeMap::new();
///         parts.insert("user".to_string(), Value::from(user));
///         parts.insert("host".to_string(), Value::from(host));
///         Ok(parts)
///     }
/// }
///
/// let parts = SplitAt.decompose(&Value::from("admin@example.com")).unwrap();
/// assert_eq!(parts["user"], Value::from("admin"));
/// ```
pub trait CompositeTransformer: Send + Sync {
    /// Splits a composite value into a map of internal keyed values.
    fn decompose(&self, value: &Value) -> Result<BTreeMap<String, Value>> {
        let _ = value;
        Err(ConfigError::UnsupportedTransform {
            operation: "decompose",
        })
    }

    /// Reassembles the composite value from the current internal state.
    fn recompose(&self, state: &BTreeMap<String, Value>) -> Result<Value> {
        let _ = state;
        Err(ConfigError::UnsupportedTransform {
            operation: "recompose",
        })
    }
}
