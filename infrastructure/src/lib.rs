//! Infrastructure layer for agoravote
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: document stores, the forecast gateway stand-in, the
//! JSONL audit logger, and configuration file loading.

pub mod config;
pub mod forecast;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileForecastConfig, FileStoreConfig,
};
pub use forecast::HeuristicForecastGateway;
pub use logging::JsonlAuditLogger;
pub use store::{InMemoryDocumentStore, JsonFileDocumentStore};
