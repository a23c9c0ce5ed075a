//! Reporting and confirmation ports.
//!
//! The runner produces structured progress events and asks yes/no
//! questions through these traits; the CLI renders and prompts. Keeping
//! both out of the orchestrator makes every run path testable without a
//! terminal.

use std::time::Duration;

/// Which way a step moves the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The kind of run a plan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    Up,
    Down,
    Redo,
}

/// Structured progress events emitted by the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    /// The history table was created on first use.
    HistoryTableCreated { table: String },

    /// The ordered plan about to be presented for confirmation.
    ///
    /// `files` is the (possibly limit-truncated) plan; `total` is the
    /// size of the full candidate set before truncation.
    PlanSummary {
        kind: PlanKind,
        files: Vec<String>,
        total: usize,
    },

    /// Pending files sharing a version; nothing will be executed.
    DuplicateVersions { files: Vec<String> },

    /// A step began executing.
    StepStarted { direction: Direction, file: String },

    /// A step finished successfully.
    StepSucceeded {
        direction: Direction,
        file: String,
        elapsed: Duration,
    },

    /// A step failed; the run stops here.
    StepFailed {
        direction: Direction,
        file: String,
        message: String,
        elapsed: Duration,
    },

    /// Every planned step completed.
    RunCompleted { kind: PlanKind, count: usize },

    /// A step failed partway; `applied` of `total` steps completed first.
    RunAborted { applied: usize, total: usize },

    /// The target of a `to` request is already the current version.
    AlreadyAtVersion { version: i64 },

    /// No pending migrations; the schema is current.
    UpToDate,

    /// Down or redo requested with an empty history.
    NothingApplied,
}

/// Rendering port for runner progress.
pub trait Reporter {
    fn emit(&self, event: ReportEvent);
}

/// Synchronous yes/no confirmation port.
///
/// Declining leaves the runner with no side effects and no error.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}
