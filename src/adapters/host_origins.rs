// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composite transformer fanning a host list out into origin allow-lists.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::Value;
use crate::ports::transformer::CompositeTransformer;
use std::collections::BTreeMap;

/// Derives cross-origin allow-lists from one canonical host list.
///
/// Decomposition maps each target key to a list containing every host
/// prefixed with `https://` followed by every host prefixed with `http://`.
/// The transformer is one-directional: recomposition is unsupported, which
/// the loader treats as a no-op.
///
/// # Examples
///
/// ```
/// use envschema::adapters::HostOriginsTransformer;
/// use envschema::ports::transformer::CompositeTransformer;
/// use envschema::domain::value::Value;
///
/// let hosts = Value::List(vec![Value::from("a.com"), Value::from("b.com")]);
/// let parts = HostOriginsTransformer::new().decompose(&hosts).unwrap();
///
/// let origins = &parts["CORS_ALLOWED_ORIGINS"];
/// assert_eq!(
///     origins.to_string(),
///     "https://a.com,https://b.com,http://a.com,http://b.com"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HostOriginsTransformer {
    targets: Vec<String>,
}

impl HostOriginsTransformer {
    /// Creates a transformer with the default target keys
    /// `CSRF_TRUSTED_ORIGINS` and `CORS_ALLOWED_ORIGINS`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transformer writing the derived list under custom keys.
    pub fn with_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for HostOriginsTransformer {
    fn default() -> Self {
        Self {
            targets: vec![
                "CSRF_TRUSTED_ORIGINS".to_string(),
                "CORS_ALLOWED_ORIGINS".to_string(),
            ],
        }
    }
}

impl CompositeTransformer for HostOriginsTransformer {
    fn decompose(&self, value: &Value) -> Result<BTreeMap<String, Value>> {
        let hosts: Vec<String> = match value {
            Value::List(items) | Value::Tuple(items) => {
                items.iter().map(|host| host.to_string()).collect()
            }
            Value::Set(items) => items.iter().map(|host| host.to_string()).collect(),
            other => {
                return Err(ConfigError::decompose(format!(
                    "expected a host list, got {}",
                    other.kind()
                )))
            }
        };

        let mut origins: Vec<Value> = hosts
            .iter()
            .map(|host| Value::Str(format!("https://{}", host)))
            .collect();
        origins.extend(hosts.iter().map(|host| Value::Str(format!("http://{}", host))));

        Ok(self
            .targets
            .iter()
            .map(|target| (target.clone(), Value::List(origins.clone())))
            .collect())
    }
}
