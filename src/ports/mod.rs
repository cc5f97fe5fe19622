// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that decouple the
//! loader from its collaborators: the environment variable store and the
//! composite value transformers. Concrete implementations live in the
//! adapters layer.

pub mod source;
pub mod transformer;

// Re-export commonly used types
pub use source::EnvSource;
pub use transformer::{CompositeTransformer, RenameRule};
