// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration loader.
//!
//! This module provides `ConfigLoader`, which drives the whole pipeline:
//! field resolution, value lookup, parsing, composite decomposition and
//! recomposition, required-field validation, and materialization into a
//! `ResolvedConfig`.

use crate::adapters::ProcessEnvSource;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::field::FieldSpec;
use crate::domain::parsers;
use crate::domain::resolved::ResolvedConfig;
use crate::domain::schema::ConfigSchema;
use crate::domain::value::Value;
use crate::ports::EnvSource;
use std::collections::BTreeMap;

/// Loads a configuration schema from an environment source.
///
/// A loader owns a schema, an optional key prefix applied to every lookup,
/// and the environment source it reads from (the process environment unless
/// another source is injected).
///
/// # Examples
///
/// ```
/// use envschema::prelude::*;
///
/// let schema = ConfigSchema::builder("app")
///     .field("host", FieldSpec::new(ValueKind::Str).default("localhost"))
///     .field("port", FieldSpec::new(ValueKind::Int).default(8080i64))
///     .build();
///
/// let loader = ConfigLoader::builder(schema)
///     .prefix("APP")
///     .source(StaticEnvSource::from_pairs([("APP_port", "9090")]))
///     .build();
///
/// let config = loader.load().unwrap();
/// assert_eq!(config.str_value("host").unwrap(), "localhost");
/// assert_eq!(config.int_value("port").unwrap(), 9090);
/// ```
pub struct ConfigLoader {
    schema: ConfigSchema,
    prefix: String,
    source: Box<dyn EnvSource>,
}

impl ConfigLoader {
    /// Creates a loader reading the process environment with no prefix.
    pub fn new(schema: ConfigSchema) -> Self {
        Self::builder(schema).build()
    }

    /// Creates a loader builder for the given schema.
    pub fn builder(schema: ConfigSchema) -> ConfigLoaderBuilder {
        ConfigLoaderBuilder {
            schema,
            prefix: None,
            source: None,
        }
    }

    /// The schema this loader resolves.
    pub fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    /// Computes the fully prefixed environment lookup key for a declared
    /// field, or `None` when the attribute is not part of the schema.
    ///
    /// This is the contract the `.env` example writer consumes.
    pub fn lookup_key(&self, name: &str) -> Option<String> {
        self.schema.get(name).map(|spec| self.key_for(name, spec))
    }

    fn key_for(&self, name: &str, spec: &FieldSpec) -> String {
        format!("{}{}", self.prefix, spec.key_override().unwrap_or(name))
    }

    /// Resolves the raw value for one field: environment first, then a
    /// previously resolved internal value, then the field default.
    fn resolve_raw(
        &self,
        name: &str,
        spec: &FieldSpec,
        state: &BTreeMap<String, Value>,
    ) -> Option<Value> {
        let key = self.key_for(name, spec);
        if let Some(raw) = self.source.get(&key) {
            tracing::debug!(field = name, key = %key, "resolved from environment");
            return Some(Value::Str(raw));
        }
        if let Some(value) = state.get(name) {
            tracing::debug!(field = name, "resolved from prior internal value");
            return Some(value.clone());
        }
        spec.default_value()
    }

    /// Runs the full load pipeline and materializes a `ResolvedConfig`.
    ///
    /// Fields are processed in registration order: resolve, parse, store,
    /// and decompose when the field owns a transformer. After the pass,
    /// every transformer-owning field is recomposed from the entire current
    /// state (one-directional transformers are skipped). Finally every
    /// required field must be present, otherwise the load fails with
    /// `MissingRequiredField` and no instance is exposed.
    pub fn load(&self) -> Result<ResolvedConfig> {
        let mut state: BTreeMap<String, Value> = BTreeMap::new();

        for (name, spec) in self.schema.fields() {
            let Some(raw) = self.resolve_raw(name, spec, &state) else {
                tracing::debug!(field = name, "no value resolved, skipping");
                continue;
            };

            let value = parsers::parse_value(&raw, spec, name)?;
            state.insert(name.to_string(), value.clone());

            if let Some(transformer) = spec.composite_transformer() {
                match transformer.decompose(&value) {
                    // Later pairs overwrite same-named keys already in state.
                    Ok(parts) => state.extend(parts),
                    Err(ConfigError::UnsupportedTransform { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        // Recompose runs for every transformer-owning field, resolved or
        // not: a composite field can be synthesized entirely from the
        // individual fields currently in state.
        for (name, spec) in self.schema.fields() {
            if let Some(transformer) = spec.composite_transformer() {
                match transformer.recompose(&state) {
                    Ok(value) => {
                        state.insert(name.to_string(), value);
                    }
                    Err(ConfigError::UnsupportedTransform { .. }) => continue,
                    Err(e) => return Err(e),
                }
            }
        }

        for (name, spec) in self.schema.fields() {
            if spec.is_required() && !state.contains_key(name) {
                return Err(ConfigError::MissingRequiredField {
                    field: name.to_string(),
                });
            }
        }

        Ok(ResolvedConfig::new(state))
    }

    /// Renders an `.env` template section for this schema: a comment header
    /// followed by one `KEY=` line per declared field, using the fully
    /// computed lookup keys.
    pub fn env_example(&self) -> String {
        let prefix_label = self.prefix.trim_end_matches('_');
        let mut example = if prefix_label.is_empty() {
            format!("# {}\n", self.schema.name())
        } else {
            format!("# {} {}\n", prefix_label, self.schema.name())
        };
        for (name, spec) in self.schema.fields() {
            example.push_str(&self.key_for(name, spec));
            example.push_str("=\n");
        }
        example
    }
}

/// Builder for a `ConfigLoader`.
pub struct ConfigLoaderBuilder {
    schema: ConfigSchema,
    prefix: Option<String>,
    source: Option<Box<dyn EnvSource>>,
}

impl ConfigLoaderBuilder {
    /// Sets the key prefix; `prefix("APP")` makes the loader look up
    /// `APP_<key>` for every field.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Injects the environment source to read from instead of the process
    /// environment.
    pub fn source<S>(mut self, source: S) -> Self
    where
        S: EnvSource + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ConfigLoader {
        ConfigLoader {
            schema: self.schema,
            prefix: self
                .prefix
                .map(|p| format!("{}_", p))
                .unwrap_or_default(),
            source: self
                .source
                .unwrap_or_else(|| Box::new(ProcessEnvSource::new())),
        }
    }
}
