//! Snapshot store adapters.

pub mod json;

pub use json::JsonFileStore;
