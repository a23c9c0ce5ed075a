//! Shared command plumbing: config resolution and runner construction.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sqlmig_core::{Config, Confirm};
use sqlmig_db::{Database, DuckDbBackend};

use crate::cli::GlobalArgs;
use crate::console::{AutoConfirm, ConsoleReporter, StdinConfirm};
use crate::runner::MigrationRunner;
use crate::store::MigrationStore;

/// Resolve config plus flag overrides and build a runner over DuckDB.
pub(crate) fn build_runner(global: &GlobalArgs) -> Result<MigrationRunner> {
    let project_dir = Path::new(&global.project_dir);
    let mut config = Config::load(project_dir).context("Failed to load sqlmig.yml")?;

    if let Some(path) = &global.migration_path {
        config.migration_path = path.clone();
    }
    if let Some(table) = &global.table {
        config.migration_table = table.clone();
    }
    if let Some(db_path) = &global.database {
        config.database.path = db_path.clone();
    }

    let migration_dir = resolve(project_dir, &config.migration_path);
    let database_path = if config.database.path == ":memory:" {
        config.database.path.clone()
    } else {
        resolve(project_dir, &config.database.path)
            .display()
            .to_string()
    };

    log::debug!(
        "using database {} with history table {}",
        database_path,
        config.migration_table
    );

    let db: Arc<dyn Database> = Arc::new(
        DuckDbBackend::new(&database_path, &config.migration_table)
            .context("Failed to open database")?,
    );
    let store = MigrationStore::new(migration_dir, config.migration_table.clone(), db);

    let confirm: Arc<dyn Confirm> = if global.yes {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(StdinConfirm)
    };

    Ok(MigrationRunner::new(store, confirm, Arc::new(ConsoleReporter)))
}

fn resolve(project_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
