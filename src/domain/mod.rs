// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and parsing logic.
//!
//! This module contains the core domain types of the crate: typed values and
//! their kind tags, field declarations, schemas, value parsers, resolved
//! configurations, and errors. It is independent of where configuration
//! values actually come from.

pub mod errors;
pub mod field;
pub mod parsers;
pub mod resolved;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use field::{CustomParser, FieldSpec};
pub use resolved::ResolvedConfig;
pub use schema::{ConfigSchema, ConfigSchemaBuilder};
pub use value::{Value, ValueKind};
