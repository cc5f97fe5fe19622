// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the port behind which the
//! process-wide environment variable store is hidden. The loader only ever
//! reads the environment through this interface, so tests can substitute an
//! in-memory key/value source for the real process environment.

/// A read-only source of environment variables.
///
/// Lookups are case-sensitive and must distinguish an absent variable
/// (`None`) from a variable set to the empty string (`Some("")`).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Examples
///
/// ```
/// use envschema::ports::EnvSource;
///
/// struct SingleVar;
///
/// impl EnvSource for SingleVar {
///     fn name(&self) -> &str {
///         "single"
///     }
///
///     fn get(&self, key: &str) -> Option<String> {
///         (key == "APP_PORT").then(|| "8080".to_string())
///     }
/// }
///
/// let source = SingleVar;
/// assert_eq!(source.get("APP_PORT").as_deref(), Some("8080"));
/// assert_eq!(source.get("APP_HOST"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the name of this source, used for logging and debugging.
    fn name(&self) -> &str;

    /// Retrieves the raw value for the given key.
    ///
    /// Returns `None` when the key is not set; an empty string is a present
    /// value, not an absence.
    fn get(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyOrMissing;

    impl EnvSource for EmptyOrMissing {
        fn name(&self) -> &str {
            "empty-or-missing"
        }

        fn get(&self, key: &str) -> Option<String> {
            (key == "EMPTY").then(String::new)
        }
    }

    #[test]
    fn test_absent_is_distinct_from_empty() {
        let source = EmptyOrMissing;
        assert_eq!(source.get("EMPTY"), Some(String::new()));
        assert_eq!(source.get("MISSING"), None);
    }

    #[test]
    fn test_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn EnvSource>>();
    }
}
