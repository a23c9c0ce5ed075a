//! Error types for sqlmig-core

use thiserror::Error;

/// Core error type for sqlmig
#[derive(Error, Debug)]
pub enum CoreError {
    /// M001: Migration directory missing
    #[error("[M001] Migration directory not found: {path}")]
    MigrationPathNotFound { path: String },

    /// M002: Duplicate versions among pending migration files
    #[error("[M002] Duplicate versions among pending migration files: {}", .files.join(", "))]
    DuplicateVersions { files: Vec<String> },

    /// M003: Target version matches no migration file or history row
    #[error("[M003] No migration with version {version}")]
    NoSuchVersion { version: i64 },

    /// M004: SQL script execution failed
    #[error("[M004] Script execution failed for {file}: {message}")]
    ScriptFailed { file: String, message: String },

    /// M005: History table update failed after a successful script
    #[error("[M005] History update failed for {file}: {message}. The schema change was applied but not recorded; the history table needs manual reconciliation.")]
    HistoryUpdateFailed { file: String, message: String },

    /// M006: Migration script missing on disk
    #[error("[M006] No such migration file: {path}")]
    ScriptNotFound { path: String },

    /// M007: History row whose name is not an up-file name
    #[error("[M007] History entry is not an up-file name: {name}")]
    InvalidHistoryName { name: String },

    /// M008: Failed to parse configuration file
    #[error("[M008] Failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// M009: IO error with file path context
    #[error("[M009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// M010: IO error
    #[error("[M010] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// M011: History table bootstrap or query failed
    #[error("[M011] History store error: {message}")]
    HistoryStore { message: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
