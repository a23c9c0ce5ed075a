//! sqlmig-db - Database abstraction layer for sqlmig
//!
//! This crate provides the `Database` trait (the runner's storage and
//! execution port) and a DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
