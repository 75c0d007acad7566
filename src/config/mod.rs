//! Engine configuration for minuta.
//!
//! This module defines the Config struct that can be loaded from a YAML file
//! (`minuta --config minuta.yaml`). It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for optional fields, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
