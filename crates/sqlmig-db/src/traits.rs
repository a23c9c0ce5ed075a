//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use sqlmig_core::HistoryRecord;

/// Database port for the migration runner
///
/// Covers script execution and the history table. Implementations must
/// be Send + Sync; the runner itself uses a single handle sequentially.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a SQL script as one batch.
    ///
    /// Every statement in the batch must be executed before this returns,
    /// so a failure in a later statement surfaces as an error rather than
    /// a silent partial success. No transaction is wrapped around the
    /// batch; whatever the engine committed before a failure stays
    /// committed.
    async fn run_batch(&self, sql: &str) -> DbResult<()>;

    /// Return at most `limit` history rows (all rows when `None`),
    /// ordered most recent first: `created_at DESC, version DESC`.
    async fn query_history(&self, limit: Option<usize>) -> DbResult<Vec<HistoryRecord>>;

    /// Insert one history row. A single statement.
    async fn insert_history_row(&self, version: i64, name: &str, applied_at: &str)
        -> DbResult<()>;

    /// Delete the history row with the given up-file name. A single statement.
    async fn delete_history_row_by_name(&self, name: &str) -> DbResult<()>;

    /// Create the history table if it does not exist.
    ///
    /// Idempotent. Returns whether the table was created by this call so
    /// the caller can report the bootstrap.
    async fn ensure_history_table(&self) -> DbResult<bool>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
