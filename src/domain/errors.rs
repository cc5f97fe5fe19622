// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while parsing values,
//! transforming composite values, or resolving a configuration schema.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when parsing,
/// transforming, or resolving configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use envschema::domain::errors::ConfigError;
///
/// fn resolve_field() -> Result<String, ConfigError> {
///     Err(ConfigError::MissingRequiredField {
///         field: "database_url".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A raw value could not be converted to the declared or element kind.
    #[error("Failed to parse value for field '{field}' as {kind}: {message}")]
    Parse {
        /// The field whose value failed to parse
        field: String,
        /// The target kind name
        kind: String,
        /// Details about the failure
        message: String,
    },

    /// A required field had no resolved value after the full load pass.
    #[error("Required configuration field '{field}' was not resolved")]
    MissingRequiredField {
        /// The attribute name of the unresolved field
        field: String,
    },

    /// A resolved configuration was queried for a field it does not hold.
    #[error("Configuration field not found: {field}")]
    FieldNotFound {
        /// The field that was not found
        field: String,
    },

    /// A typed accessor was used on a field holding a different kind.
    #[error("Configuration field '{field}' holds {actual}, expected {expected}")]
    KindMismatch {
        /// The field being accessed
        field: String,
        /// The kind the accessor expected
        expected: String,
        /// The kind the field actually holds
        actual: String,
    },

    /// A composite value could not be decomposed into its parts.
    #[error("Failed to decompose composite value: {message}")]
    Decompose {
        /// Details about the failure
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A transformer does not implement the requested direction.
    ///
    /// The loader swallows this error per field: transformers are allowed
    /// to be one-directional.
    #[error("Transformer does not support {operation}")]
    UnsupportedTransform {
        /// The unsupported operation ("decompose" or "recompose")
        operation: &'static str,
    },

    /// An I/O error occurred while writing an `.env` example file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `Parse` error for the given field and target kind.
    pub fn parse(
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ConfigError::Parse {
            field: field.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Creates a `Decompose` error without an underlying source.
    pub fn decompose(message: impl Into<String>) -> Self {
        ConfigError::Decompose {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
