//! Configuration types and parsing for sqlmig.yml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Config file name looked up in the project directory
pub const CONFIG_FILE: &str = "sqlmig.yml";

/// Project configuration from sqlmig.yml
///
/// Every field has a default, and a missing config file is not an error;
/// CLI flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing the migration script files
    #[serde(default = "default_migration_path")]
    pub migration_path: String,

    /// Name of the table keeping applied-migration records
    #[serde(default = "default_migration_table")]
    pub migration_table: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database file path, or ":memory:" for an in-memory database
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migration_path: default_migration_path(),
            migration_table: default_migration_table(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Config {
    /// Load configuration from `<project_dir>/sqlmig.yml`, falling back
    /// to defaults when the file does not exist.
    pub fn load(project_dir: &Path) -> CoreResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn default_migration_path() -> String {
    "migrations".to_string()
}

fn default_migration_table() -> String {
    "migration".to_string()
}

fn default_database_path() -> String {
    "sqlmig.duckdb".to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
