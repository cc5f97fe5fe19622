// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named, ordered registration of configuration fields.
//!
//! A `ConfigSchema` is the explicit registration mechanism that replaces
//! annotation scanning: every attribute is registered up front with its
//! `FieldSpec`, in the order fields should be resolved.

use crate::domain::field::FieldSpec;

/// An ordered set of field declarations under a schema name.
///
/// The name labels `.env` example sections; field order is the order the
/// loader resolves fields in, which matters when a transformed key feeds a
/// later field.
///
/// # Examples
///
/// ```
/// use envschema::domain::schema::ConfigSchema;
/// use envschema::domain::field::FieldSpec;
/// use envschema::domain::value::ValueKind;
///
/// let schema = ConfigSchema::builder("redis")
///     .field("host", FieldSpec::new(ValueKind::Str).default("localhost"))
///     .field("port", FieldSpec::new(ValueKind::Int).default(6379i64))
///     .build();
///
/// assert_eq!(schema.name(), "redis");
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ConfigSchema {
    name: String,
    fields: Vec<(String, FieldSpec)>,
}

impl ConfigSchema {
    /// Creates a builder for a schema with the given name.
    pub fn builder(name: impl Into<String>) -> ConfigSchemaBuilder {
        ConfigSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over `(attribute name, field spec)` pairs in registration
    /// order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Looks up the spec registered under an attribute name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, spec)| spec)
    }

    /// The number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for a `ConfigSchema`.
#[derive(Debug)]
pub struct ConfigSchemaBuilder {
    name: String,
    fields: Vec<(String, FieldSpec)>,
}

impl ConfigSchemaBuilder {
    /// Registers a field under an attribute name. Registering the same name
    /// twice replaces the earlier declaration.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        self.fields.retain(|(existing, _)| existing != &name);
        self.fields.push((name, spec));
        self
    }

    /// Finalizes the schema.
    pub fn build(self) -> ConfigSchema {
        ConfigSchema {
            name: self.name,
            fields: self.fields,
        }
    }
}
