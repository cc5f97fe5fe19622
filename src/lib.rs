// SPDX-License-Identifier: MIT OR Apache-2.0

//! A declarative, schema-driven environment configuration crate.
//!
//! This crate turns a set of typed field declarations into a validated
//! configuration loaded from environment variables: each field names its
//! lookup key, type, default, and optional composite transformer, and a
//! single load pass resolves, parses, and validates the whole schema.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`Value`, `FieldSpec`,
//!   `ConfigSchema`, `ResolvedConfig`, errors, parsers)
//! - **Ports**: Trait definitions that define interfaces (`EnvSource`,
//!   `CompositeTransformer`)
//! - **Adapters**: Environment sources (process env, in-memory) and the
//!   built-in transformers (URL strings, host-origin fan-out)
//! - **Service**: The loader that orchestrates resolution, the `.env`
//!   example writer, preset schemas, and the driver-settings adapter
//!
//! # Features
//!
//! - **Typed fields**: strings, integers, booleans, lists, tuples, sets,
//!   and maps parsed from plain environment strings
//! - **Composite values**: one `DATABASE_URL` decomposes into host, port,
//!   credentials, and name fields, and those same fields recompose into a
//!   URL when only the individual variables are set
//! - **Validation**: required fields fail the load with the offending
//!   attribute named, after defaults and recomposition have had their say
//! - **Presets**: ready-made schemas for MySQL, PostgreSQL, SQLite3,
//!   Redis, RabbitMQ, and common web settings
//! - **Testable**: the environment is a port, so tests inject an in-memory
//!   source instead of mutating the process environment
//!
//! # Quick Start
//!
//! ```rust
//! use envschema::prelude::*;
//!
//! # fn main() -> envschema::domain::Result<()> {
//! let schema = ConfigSchema::builder("database")
//!     .field(
//!         "url",
//!         FieldSpec::new(ValueKind::Str).key("DATABASE_URL")
//!             .transformer(envschema::adapters::UrlTransformer::new()),
//!     )
//!     .field("host", FieldSpec::new(ValueKind::Str).default("localhost"))
//!     .field("port", FieldSpec::new(ValueKind::Int).default(5432i64))
//!     .field("scheme", FieldSpec::new(ValueKind::Str).default("postgresql"))
//!     .build();
//!
//! let loader = ConfigLoader::builder(schema)
//!     .source(StaticEnvSource::from_pairs([(
//!         "DATABASE_URL",
//!         "postgresql://db.internal:6432",
//!     )]))
//!     .build();
//!
//! let config = loader.load()?;
//! assert_eq!(config.str_value("host")?, "db.internal");
//! assert_eq!(config.int_value("port")?, 6432);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        HostOriginsTransformer, ProcessEnvSource, StaticEnvSource, UrlTransformer,
    };
    pub use crate::domain::{
        ConfigError, ConfigSchema, ConfigSchemaBuilder, FieldSpec, ResolvedConfig, Result, Value,
        ValueKind,
    };
    pub use crate::ports::{CompositeTransformer, EnvSource, RenameRule};
    pub use crate::service::{ConfigLoader, ConfigLoaderBuilder};
}
