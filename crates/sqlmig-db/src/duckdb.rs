//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use duckdb::{params, Connection};
use sqlmig_core::HistoryRecord;
use std::path::Path;
use std::sync::Mutex;

/// DuckDB database backend
///
/// Holds the history table name alongside the connection; all history
/// statements are issued against that table.
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
    table: String,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory(table: &str) -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path, table: &str) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str, table: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory(table)
        } else {
            Self::from_path(Path::new(path), table)
        }
    }

    fn run_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        // execute_batch runs every statement in the script before
        // returning, so an error in a later statement is reported rather
        // than lost behind earlier successes.
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    fn query_history_sync(&self, limit: Option<usize>) -> DbResult<Vec<HistoryRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut sql = format!(
            "SELECT version, name, CAST(created_at AS VARCHAR) FROM {} ORDER BY created_at DESC, version DESC",
            self.table
        );
        if let Some(n) = limit {
            sql.push_str(&format!(" LIMIT {}", n));
        }

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(HistoryRecord {
                    version: row.get(0)?,
                    name: row.get(1)?,
                    applied_at: row.get(2)?,
                })
            })
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    fn insert_history_row_sync(&self, version: i64, name: &str, applied_at: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "INSERT INTO {} (version, name, created_at) VALUES (?, ?, ?)",
            self.table
        );
        conn.execute(&sql, params![version, name, applied_at])
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(())
    }

    fn delete_history_row_sync(&self, name: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("DELETE FROM {} WHERE name = ?", self.table);
        conn.execute(&sql, params![name])
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(())
    }

    fn ensure_history_table_sync(&self) -> DbResult<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'main' AND table_name = ?",
                params![self.table],
                |row| row.get(0),
            )
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;

        if count > 0 {
            return Ok(false);
        }

        let sql = format!(
            "CREATE TABLE {} (version BIGINT NOT NULL PRIMARY KEY, name VARCHAR(180) NOT NULL, created_at TIMESTAMP)",
            self.table
        );
        conn.execute_batch(&sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(true)
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn run_batch(&self, sql: &str) -> DbResult<()> {
        self.run_batch_sync(sql)
    }

    async fn query_history(&self, limit: Option<usize>) -> DbResult<Vec<HistoryRecord>> {
        self.query_history_sync(limit)
    }

    async fn insert_history_row(
        &self,
        version: i64,
        name: &str,
        applied_at: &str,
    ) -> DbResult<()> {
        self.insert_history_row_sync(version, name, applied_at)
    }

    async fn delete_history_row_by_name(&self, name: &str) -> DbResult<()> {
        self.delete_history_row_sync(name)
    }

    async fn ensure_history_table(&self) -> DbResult<bool> {
        self.ensure_history_table_sync()
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(db: &DuckDbBackend, sql: &str) -> i64 {
        let conn = db.conn.lock().unwrap();
        conn.query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory() {
        let db = DuckDbBackend::in_memory("migration").unwrap();
        assert_eq!(db.db_type(), "duckdb");
    }

    #[tokio::test]
    async fn test_ensure_history_table_idempotent() {
        let db = DuckDbBackend::in_memory("migration").unwrap();

        assert!(db.ensure_history_table().await.unwrap());
        assert!(!db.ensure_history_table().await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_query_delete_roundtrip() {
        let db = DuckDbBackend::in_memory("migration").unwrap();
        db.ensure_history_table().await.unwrap();

        db.insert_history_row(1, "01_a.up.sql", "2026-01-01 10:00:00")
            .await
            .unwrap();
        db.insert_history_row(2, "02_b.up.sql", "2026-01-01 11:00:00")
            .await
            .unwrap();

        let rows = db.query_history(None).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "02_b.up.sql");
        assert_eq!(rows[1].name, "01_a.up.sql");

        db.delete_history_row_by_name("02_b.up.sql").await.unwrap();
        let rows = db.query_history(None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].version, 1);
    }

    #[tokio::test]
    async fn test_query_history_orders_by_version_within_timestamp() {
        let db = DuckDbBackend::in_memory("migration").unwrap();
        db.ensure_history_table().await.unwrap();

        let same_time = "2026-01-01 10:00:00";
        db.insert_history_row(3, "03_c.up.sql", same_time).await.unwrap();
        db.insert_history_row(5, "05_e.up.sql", same_time).await.unwrap();
        db.insert_history_row(4, "04_d.up.sql", same_time).await.unwrap();

        let versions: Vec<i64> = db
            .query_history(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.version)
            .collect();
        assert_eq!(versions, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn test_query_history_limit() {
        let db = DuckDbBackend::in_memory("migration").unwrap();
        db.ensure_history_table().await.unwrap();

        db.insert_history_row(1, "01_a.up.sql", "2026-01-01 10:00:00")
            .await
            .unwrap();
        db.insert_history_row(2, "02_b.up.sql", "2026-01-01 11:00:00")
            .await
            .unwrap();

        let rows = db.query_history(Some(1)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].version, 2);
    }

    #[tokio::test]
    async fn test_run_batch_multiple_statements() {
        let db = DuckDbBackend::in_memory("migration").unwrap();
        db.run_batch("CREATE TABLE t1 (id INT); CREATE TABLE t2 (id INT); INSERT INTO t1 VALUES (1);")
            .await
            .unwrap();

        assert_eq!(count(&db, "SELECT COUNT(*) FROM t1"), 1);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM t2"), 0);
    }

    #[tokio::test]
    async fn test_run_batch_surfaces_late_statement_failure() {
        let db = DuckDbBackend::in_memory("migration").unwrap();

        let result = db
            .run_batch(
                "CREATE TABLE t1 (id INT); INSERT INTO t1 VALUES (1); INSERT INTO missing VALUES (1);",
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_custom_table_name() {
        let db = DuckDbBackend::in_memory("schema_history").unwrap();
        db.ensure_history_table().await.unwrap();

        db.insert_history_row(1, "01_a.up.sql", "2026-01-01 10:00:00")
            .await
            .unwrap();
        assert_eq!(count(&db, "SELECT COUNT(*) FROM schema_history"), 1);
    }
}
