// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field declarations describing a single configuration entry.
//!
//! A `FieldSpec` carries everything the loader needs to resolve one
//! configuration attribute: the lookup key, requiredness, a default (plain
//! value or zero-argument producer), the declared kind and element kind,
//! an optional custom parser, and an optional composite transformer.

use crate::domain::errors::Result;
use crate::domain::value::{Value, ValueKind};
use crate::ports::transformer::CompositeTransformer;
use std::fmt;
use std::sync::Arc;

/// A custom parser installed on a field.
///
/// It fully overrides the built-in parsers and receives the resolved raw
/// value together with the field's declared element kind.
pub type CustomParser = Arc<dyn Fn(&Value, ValueKind) -> Result<Value> + Send + Sync>;

/// A zero-argument producer for a field's default value.
pub type DefaultProducer = Arc<dyn Fn() -> Value + Send + Sync>;

#[derive(Clone)]
enum DefaultValue {
    Plain(Value),
    Producer(DefaultProducer),
}

/// Metadata describing one configuration attribute.
///
/// Immutable once registered on a schema. Built with a fluent builder:
///
/// ```
/// use envschema::domain::field::FieldSpec;
/// use envschema::domain::value::ValueKind;
///
/// let spec = FieldSpec::new(ValueKind::Int)
///     .key("MYSQL_PORT")
///     .default(3306i64);
///
/// assert_eq!(spec.key_override(), Some("MYSQL_PORT"));
/// assert!(spec.is_required());
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    key: Option<String>,
    required: bool,
    default: Option<DefaultValue>,
    kind: ValueKind,
    element: ValueKind,
    parser: Option<CustomParser>,
    transformer: Option<Arc<dyn CompositeTransformer>>,
}

impl FieldSpec {
    /// Creates a required field of the given kind with no key override, no
    /// default, string elements, and no custom parser or transformer.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            key: None,
            required: true,
            default: None,
            kind,
            element: ValueKind::Str,
            parser: None,
            transformer: None,
        }
    }

    /// Sets the environment lookup key, overriding the attribute name.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Marks the field as optional: no error when it stays unresolved.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets a plain default value, used when neither the environment nor the
    /// running internal state provides one.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Plain(value.into()));
        self
    }

    /// Sets a zero-argument producer invoked to build the default value.
    pub fn default_with<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Producer(Arc::new(producer)));
        self
    }

    /// Sets the element kind used inside list, tuple, set, and map values.
    pub fn element(mut self, element: ValueKind) -> Self {
        self.element = element;
        self
    }

    /// Installs a custom parser that fully overrides the built-in parsing.
    pub fn parser<F>(mut self, parser: F) -> Self
    where
        F: Fn(&Value, ValueKind) -> Result<Value> + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Attaches a composite transformer to this field.
    pub fn transformer<T>(mut self, transformer: T) -> Self
    where
        T: CompositeTransformer + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// The declared kind of this field.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The declared element kind for container fields.
    pub fn element_kind(&self) -> ValueKind {
        self.element
    }

    /// The explicit lookup key, if one overrides the attribute name.
    pub fn key_override(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Whether this field must be resolved for the load to succeed.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Materializes the default value, invoking a producer if one is set.
    pub fn default_value(&self) -> Option<Value> {
        match &self.default {
            Some(DefaultValue::Plain(value)) => Some(value.clone()),
            Some(DefaultValue::Producer(producer)) => Some(producer()),
            None => None,
        }
    }

    /// The custom parser, if one is installed.
    pub fn custom_parser(&self) -> Option<&CustomParser> {
        self.parser.as_ref()
    }

    /// The composite transformer, if one is attached.
    pub fn composite_transformer(&self) -> Option<&Arc<dyn CompositeTransformer>> {
        self.transformer.as_ref()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("required", &self.required)
            .field("has_default", &self.default.is_some())
            .field("kind", &self.kind)
            .field("element", &self.element)
            .field("has_parser", &self.parser.is_some())
            .field("has_transformer", &self.transformer.is_some())
            .finish()
    }
}
