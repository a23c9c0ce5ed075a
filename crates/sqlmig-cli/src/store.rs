//! Migration store: up-files on disk plus the persisted history.
//!
//! The store is the runner's only way to touch the outside world short of
//! the confirmation prompt. Script execution and history updates go
//! through the injected `Database` port; the migration directory is only
//! ever read.

use chrono::Utc;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use sqlmig_core::{discover, CoreError, CoreResult, HistoryRecord, MigrationFile};
use sqlmig_db::{Database, DbResult};

pub struct MigrationStore {
    dir: PathBuf,
    table: String,
    db: Arc<dyn Database>,
}

impl MigrationStore {
    pub fn new(dir: PathBuf, table: String, db: Arc<dyn Database>) -> Self {
        Self { dir, table, db }
    }

    /// Name of the history table, for reporting.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the history table if needed; true when this call created it.
    pub async fn ensure_history(&self) -> CoreResult<bool> {
        self.db
            .ensure_history_table()
            .await
            .map_err(|e| CoreError::HistoryStore {
                message: e.to_string(),
            })
    }

    /// Up-files present in the migration directory, unordered.
    pub fn list_up_files(&self) -> CoreResult<Vec<MigrationFile>> {
        discover::list_up_files(&self.dir)
    }

    /// Full text of a migration script.
    pub fn read_script(&self, name: &str) -> CoreResult<String> {
        discover::read_script(&self.dir, name)
    }

    /// Most recent `limit` history rows (all rows when `None`).
    pub async fn history(&self, limit: Option<usize>) -> CoreResult<Vec<HistoryRecord>> {
        self.db
            .query_history(limit)
            .await
            .map_err(|e| CoreError::HistoryStore {
                message: e.to_string(),
            })
    }

    /// Versions present in history.
    pub async fn applied_versions(&self) -> CoreResult<HashSet<i64>> {
        Ok(self.history(None).await?.iter().map(|r| r.version).collect())
    }

    /// Execute a migration script as one batch.
    pub async fn run_script(&self, sql: &str) -> DbResult<()> {
        self.db.run_batch(sql).await
    }

    /// Record a successful up step.
    ///
    /// Failure here is the dangerous class: the schema change is already
    /// committed, so a lost insert leaves history out of sync and needs a
    /// manual fix to the history table, not the schema.
    pub async fn record_applied(&self, name: &str, version: i64) -> CoreResult<()> {
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.db
            .insert_history_row(version, name, &now)
            .await
            .map_err(|e| CoreError::HistoryUpdateFailed {
                file: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Record a successful down step by deleting the row of the same name.
    pub async fn record_reverted(&self, name: &str) -> CoreResult<()> {
        self.db
            .delete_history_row_by_name(name)
            .await
            .map_err(|e| CoreError::HistoryUpdateFailed {
                file: name.to_string(),
                message: e.to_string(),
            })
    }
}
