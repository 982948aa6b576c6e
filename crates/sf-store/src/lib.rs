//! sf-store - Position-store backends for Stepflow
//!
//! Concrete implementations of the `PositionStore` contract: a DuckDB file
//! store and an atomic JSON file store, selected through `StoreConfig`.

pub mod config;
pub(crate) mod ddl;
pub mod duckdb;
pub mod json;

pub use config::{StoreBackend, StoreConfig};
pub use duckdb::DuckDbStore;
pub use json::JsonFileStore;
