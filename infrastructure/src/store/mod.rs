//! Document store adapters
//!
//! Two implementations of the application's `DocumentStore` port: a
//! process-local in-memory store and a JSON-file store whose commits are
//! crash-safe. Both provide the all-or-nothing multi-write primitive the
//! engine's atomic units require.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileDocumentStore;
pub use memory::InMemoryDocumentStore;
