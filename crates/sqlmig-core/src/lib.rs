//! sqlmig-core - sequencing and consistency engine for sqlmig
//!
//! This crate provides the pure parts of the migration runner: the
//! filename version codec, migration-directory discovery, the sequence
//! planner, configuration parsing, and the reporting/confirmation ports
//! used by the orchestrator.

pub mod config;
pub mod discover;
pub mod error;
pub mod migration;
pub mod plan;
pub mod report;
pub mod version;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use migration::{HistoryRecord, MigrationFile};
pub use plan::TargetPlan;
pub use report::{Confirm, Direction, PlanKind, ReportEvent, Reporter};
