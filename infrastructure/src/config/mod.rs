//! Configuration loading
//!
//! Serde-typed configuration files merged from multiple sources via
//! figment.

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileForecastConfig, FileStoreConfig};
pub use loader::ConfigLoader;
