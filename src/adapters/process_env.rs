// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source adapter backed by the process environment.

use crate::ports::EnvSource;
use std::env;

/// Reads environment variables from the real process environment.
///
/// Lookups are case-sensitive and performed lazily on every call, so values
/// set after construction are still visible. A variable set to the empty
/// string is reported as present.
///
/// # Examples
///
/// ```
/// use envschema::adapters::ProcessEnvSource;
/// use envschema::ports::EnvSource;
///
/// let source = ProcessEnvSource::new();
/// assert!(source.get("SOME_UNSET_VARIABLE_12345").is_none());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvSource;

impl ProcessEnvSource {
    /// Creates a new process environment source.
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnvSource {
    fn name(&self) -> &str {
        "process-env"
    }

    fn get(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!(key, "skipping non-unicode environment variable");
                None
            }
        }
    }
}
