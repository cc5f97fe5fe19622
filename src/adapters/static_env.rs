// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment source adapter.

use crate::ports::EnvSource;
use std::collections::HashMap;

/// An environment source backed by an in-memory key/value map.
///
/// Primarily intended for tests, where it substitutes the process
/// environment so loads are hermetic and can run in parallel. It is also
/// useful for embedding a fixed configuration.
///
/// # Examples
///
/// ```
/// use envschema::adapters::StaticEnvSource;
/// use envschema::ports::EnvSource;
///
/// let source = StaticEnvSource::from_pairs([("APP_HOST", "localhost")]);
/// assert_eq!(source.get("APP_HOST").as_deref(), Some("localhost"));
/// assert_eq!(source.get("APP_PORT"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticEnvSource {
    values: HashMap<String, String>,
}

impl StaticEnvSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

impl EnvSource for StaticEnvSource {
    fn name(&self) -> &str {
        "static-env"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
