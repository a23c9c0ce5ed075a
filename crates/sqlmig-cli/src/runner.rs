//! Migration runner: drives the up, down, redo, and to operations.
//!
//! Execution is strictly sequential and fail-fast: a step either
//! completes and is recorded, or the run stops at that step and reports
//! how far it got. Already-applied steps are never rolled back. The
//! history insert is not atomic with its script; a crash between the two
//! leaves the schema changed with no record, which is a documented gap
//! requiring manual reconciliation.

use std::time::{Duration, Instant};

use sqlmig_core::{
    plan, version, Confirm, CoreError, CoreResult, Direction, HistoryRecord, MigrationFile,
    PlanKind, ReportEvent, Reporter, TargetPlan,
};
use std::sync::Arc;

use crate::store::MigrationStore;

/// Terminal outcome of a runner operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every planned step was executed.
    Completed { count: usize },
    /// There was nothing to plan, or the target was already current.
    NothingToDo,
    /// The operator declined the confirmation prompt. No side effects.
    Declined,
}

pub struct MigrationRunner {
    store: MigrationStore,
    confirm: Arc<dyn Confirm>,
    reporter: Arc<dyn Reporter>,
}

impl MigrationRunner {
    pub fn new(store: MigrationStore, confirm: Arc<dyn Confirm>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            store,
            confirm,
            reporter,
        }
    }

    /// Lazily create the history table, reporting the bootstrap once.
    async fn bootstrap(&self) -> CoreResult<()> {
        if self.store.ensure_history().await? {
            self.reporter.emit(ReportEvent::HistoryTableCreated {
                table: self.store.table().to_string(),
            });
        }
        Ok(())
    }

    /// The full pending set: up-files whose version is not in history,
    /// sorted ascending by filename.
    async fn pending(&self) -> CoreResult<Vec<MigrationFile>> {
        let files = self.store.list_up_files()?;
        let applied = self.store.applied_versions().await?;
        Ok(plan::pending(files, &applied))
    }

    /// Apply pending migrations, at most `limit` of them.
    pub async fn up(&self, limit: Option<usize>) -> CoreResult<RunOutcome> {
        self.bootstrap().await?;
        let pending = self.pending().await?;

        // Conflicts are detected over the full pending set, before limit
        // truncation and before anything executes.
        let conflicts = plan::duplicate_versions(&pending);
        if !conflicts.is_empty() {
            self.reporter.emit(ReportEvent::DuplicateVersions {
                files: conflicts.clone(),
            });
            return Err(CoreError::DuplicateVersions { files: conflicts });
        }

        if pending.is_empty() {
            self.reporter.emit(ReportEvent::UpToDate);
            return Ok(RunOutcome::NothingToDo);
        }

        let total = pending.len();
        let planned: Vec<MigrationFile> = match limit {
            Some(n) => pending.into_iter().take(n).collect(),
            None => pending,
        };

        self.reporter.emit(ReportEvent::PlanSummary {
            kind: PlanKind::Up,
            files: planned.iter().map(|f| f.name.clone()).collect(),
            total,
        });

        let n = planned.len();
        let prompt = format!("Apply the above {} {}?", n, noun(n));
        if !self.confirm.confirm(&prompt) {
            return Ok(RunOutcome::Declined);
        }

        let mut applied = 0usize;
        for file in &planned {
            if let Err(e) = self.apply_step(&file.name, file.version).await {
                self.reporter.emit(ReportEvent::RunAborted { applied, total: n });
                return Err(e);
            }
            applied += 1;
        }

        self.reporter.emit(ReportEvent::RunCompleted {
            kind: PlanKind::Up,
            count: applied,
        });
        Ok(RunOutcome::Completed { count: applied })
    }

    /// Revert the most recent `limit` applied migrations (all when `None`).
    pub async fn down(&self, limit: Option<usize>) -> CoreResult<RunOutcome> {
        self.bootstrap().await?;
        let records = self.store.history(limit).await?;

        if records.is_empty() {
            self.reporter.emit(ReportEvent::NothingApplied);
            return Ok(RunOutcome::NothingToDo);
        }

        let n = records.len();
        self.reporter.emit(ReportEvent::PlanSummary {
            kind: PlanKind::Down,
            files: records.iter().map(|r| r.name.clone()).collect(),
            total: n,
        });

        let prompt = format!("Revert the above {} {}?", n, noun(n));
        if !self.confirm.confirm(&prompt) {
            return Ok(RunOutcome::Declined);
        }

        let mut reverted = 0usize;
        for record in &records {
            if let Err(e) = self.revert_step(record).await {
                self.reporter.emit(ReportEvent::RunAborted {
                    applied: reverted,
                    total: n,
                });
                return Err(e);
            }
            reverted += 1;
        }

        self.reporter.emit(ReportEvent::RunCompleted {
            kind: PlanKind::Down,
            count: reverted,
        });
        Ok(RunOutcome::Completed { count: reverted })
    }

    /// Revert the most recent `limit` migrations, then reapply them in
    /// the reverse order of the revert pass.
    pub async fn redo(&self, limit: Option<usize>) -> CoreResult<RunOutcome> {
        self.bootstrap().await?;
        let records = self.store.history(limit).await?;

        if records.is_empty() {
            self.reporter.emit(ReportEvent::NothingApplied);
            return Ok(RunOutcome::NothingToDo);
        }

        let n = records.len();
        self.reporter.emit(ReportEvent::PlanSummary {
            kind: PlanKind::Redo,
            files: records.iter().map(|r| r.name.clone()).collect(),
            total: n,
        });

        let prompt = format!("Redo the above {} {}?", n, noun(n));
        if !self.confirm.confirm(&prompt) {
            return Ok(RunOutcome::Declined);
        }

        // A failure in either phase aborts the whole redo, leaving
        // whatever partially-reverted or partially-reapplied state
        // resulted. There is no automatic compensation.
        let total = n * 2;
        let mut done = 0usize;
        for record in &records {
            if let Err(e) = self.revert_step(record).await {
                self.reporter.emit(ReportEvent::RunAborted { applied: done, total });
                return Err(e);
            }
            done += 1;
        }

        for record in records.iter().rev() {
            // Reapply uses the name recorded in history, not a fresh
            // directory scan; an up-file deleted between the phases fails
            // here with a missing-file error.
            if let Err(e) = self.apply_step(&record.name, record.version).await {
                self.reporter.emit(ReportEvent::RunAborted { applied: done, total });
                return Err(e);
            }
            done += 1;
        }

        self.reporter.emit(ReportEvent::RunCompleted {
            kind: PlanKind::Redo,
            count: n,
        });
        Ok(RunOutcome::Completed { count: n })
    }

    /// Migrate up or down until the schema is at exactly `target`.
    pub async fn to_version(&self, target: i64) -> CoreResult<RunOutcome> {
        self.bootstrap().await?;
        let history = self.store.history(None).await?;
        let latest = history.first().map(|r| r.version);

        let files = self.store.list_up_files()?;
        let applied = history.iter().map(|r| r.version).collect();
        let pending = plan::pending(files, &applied);

        match plan::plan_to_version(target, latest, &pending, &history) {
            TargetPlan::AlreadyAtVersion => {
                self.reporter
                    .emit(ReportEvent::AlreadyAtVersion { version: target });
                Ok(RunOutcome::NothingToDo)
            }
            TargetPlan::Up { steps } => self.up(Some(steps)).await,
            TargetPlan::Down { steps } => self.down(Some(steps)).await,
            TargetPlan::NotFound => Err(CoreError::NoSuchVersion { version: target }),
        }
    }

    /// Most recent `limit` applied migrations, for listing.
    pub async fn history(&self, limit: Option<usize>) -> CoreResult<Vec<HistoryRecord>> {
        self.bootstrap().await?;
        self.store.history(limit).await
    }

    /// The full pending set, for listing.
    pub async fn pending_files(&self) -> CoreResult<Vec<MigrationFile>> {
        self.bootstrap().await?;
        self.pending().await
    }

    /// Execute one up-file and record it in history.
    async fn apply_step(&self, name: &str, file_version: i64) -> CoreResult<()> {
        self.reporter.emit(ReportEvent::StepStarted {
            direction: Direction::Up,
            file: name.to_string(),
        });

        let sql = match self.store.read_script(name) {
            Ok(sql) => sql,
            Err(e) => {
                self.step_failed(Direction::Up, name, &e, Duration::ZERO);
                return Err(e);
            }
        };

        let start = Instant::now();
        if let Err(e) = self.store.run_script(&sql).await {
            let err = CoreError::ScriptFailed {
                file: name.to_string(),
                message: e.to_string(),
            };
            self.step_failed(Direction::Up, name, &err, start.elapsed());
            return Err(err);
        }

        if let Err(e) = self.store.record_applied(name, file_version).await {
            self.step_failed(Direction::Up, name, &e, start.elapsed());
            return Err(e);
        }

        self.reporter.emit(ReportEvent::StepSucceeded {
            direction: Direction::Up,
            file: name.to_string(),
            elapsed: start.elapsed(),
        });
        Ok(())
    }

    /// Execute the down-file paired with a history row, then delete the row.
    async fn revert_step(&self, record: &HistoryRecord) -> CoreResult<()> {
        let down = version::down_name(&record.name).ok_or_else(|| CoreError::InvalidHistoryName {
            name: record.name.clone(),
        })?;

        self.reporter.emit(ReportEvent::StepStarted {
            direction: Direction::Down,
            file: down.clone(),
        });

        let sql = match self.store.read_script(&down) {
            Ok(sql) => sql,
            Err(e) => {
                self.step_failed(Direction::Down, &down, &e, Duration::ZERO);
                return Err(e);
            }
        };

        let start = Instant::now();
        if let Err(e) = self.store.run_script(&sql).await {
            let err = CoreError::ScriptFailed {
                file: down.clone(),
                message: e.to_string(),
            };
            self.step_failed(Direction::Down, &down, &err, start.elapsed());
            return Err(err);
        }

        if let Err(e) = self.store.record_reverted(&record.name).await {
            self.step_failed(Direction::Down, &down, &e, start.elapsed());
            return Err(e);
        }

        self.reporter.emit(ReportEvent::StepSucceeded {
            direction: Direction::Down,
            file: down,
            elapsed: start.elapsed(),
        });
        Ok(())
    }

    fn step_failed(&self, direction: Direction, file: &str, error: &CoreError, elapsed: Duration) {
        self.reporter.emit(ReportEvent::StepFailed {
            direction,
            file: file.to_string(),
            message: error.to_string(),
            elapsed,
        });
    }
}

fn noun(n: usize) -> &'static str {
    if n == 1 {
        "migration"
    } else {
        "migrations"
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
