// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the ports: environment
//! sources (the process environment and an in-memory map) and the built-in
//! composite transformers (URL strings and host-origin fan-out).

pub mod host_origins;
pub mod process_env;
pub mod static_env;
pub mod url_transformer;

// Re-export commonly used types
pub use host_origins::HostOriginsTransformer;
pub use process_env::ProcessEnvSource;
pub use static_env::StaticEnvSource;
pub use url_transformer::UrlTransformer;
