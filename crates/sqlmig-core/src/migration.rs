//! Shared types for migration files and history rows.

use serde::{Deserialize, Serialize};

use crate::version::file_version;

/// A migration up-file discovered in the migration directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationFile {
    /// The raw filename, e.g. `001_create_users.up.sql`
    pub name: String,

    /// Version parsed from the leading digits of the filename
    pub version: i64,
}

impl MigrationFile {
    /// Build a migration file record, deriving the version from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let version = file_version(&name);
        Self { name, version }
    }
}

/// A row of the migration history table.
///
/// `name` is the up-file name and is the logical key: a successful up
/// step inserts a row, a successful down step deletes the row of the
/// same name. Rows are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Version of the applied migration
    pub version: i64,

    /// Up-file name of the applied migration
    pub name: String,

    /// When the migration was applied
    pub applied_at: String,
}
