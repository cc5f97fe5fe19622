// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer orchestrating schemas, sources, and transformers.
//!
//! This module contains the loader that drives the resolution pipeline,
//! the `.env` example writer, the preset schemas, and the driver-settings
//! adapter.

pub mod driver;
pub mod example;
pub mod loader;
pub mod presets;

// Re-export commonly used types
pub use driver::{DatabaseKind, DatabaseSettings, DriverSettingsProvider};
pub use example::{render_env_example, write_env_example};
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
