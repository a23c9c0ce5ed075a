//! Console rendering for runner progress and interactive confirmation.

use std::io::{self, BufRead, Write};

use sqlmig_core::{Confirm, Direction, PlanKind, ReportEvent, Reporter};

/// Renders runner events to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, event: ReportEvent) {
        match event {
            ReportEvent::HistoryTableCreated { table } => {
                println!("Creating migration history table \"{}\"... done.", table);
            }
            ReportEvent::PlanSummary { kind, files, total } => {
                let n = files.len();
                if n == total {
                    println!("Total {} {} to be {}:", n, noun(n), verb(kind));
                } else {
                    println!(
                        "Total {} out of {} {} to be {}:",
                        n,
                        total,
                        noun(total),
                        verb(kind)
                    );
                }
                for file in &files {
                    println!("\t{}", file);
                }
                println!();
            }
            ReportEvent::DuplicateVersions { files } => {
                println!("Duplicate versions among pending migration files:");
                for file in &files {
                    println!("\t{}\t(duplicate version in filename)", file);
                }
                println!();
                println!("Please correct the version numbers. Nothing was executed.");
            }
            ReportEvent::StepStarted { direction, file } => {
                let label = match direction {
                    Direction::Up => "UP",
                    Direction::Down => "DOWN",
                };
                println!("Migration {}: {}", label, file);
            }
            ReportEvent::StepSucceeded { file, elapsed, .. } => {
                println!("  \u{2713} {} [{}ms]", file, elapsed.as_millis());
            }
            ReportEvent::StepFailed {
                file,
                message,
                elapsed,
                ..
            } => {
                println!("  \u{2717} {} - {} [{}ms]", file, message, elapsed.as_millis());
            }
            ReportEvent::RunCompleted { kind, count } => {
                println!();
                println!("{} {} {} {}.", count, noun(count), was_were(count), verb(kind));
                match kind {
                    PlanKind::Up => println!("Migrated up successfully."),
                    PlanKind::Down => println!("Migrated down successfully."),
                    PlanKind::Redo => println!("Migration redone successfully."),
                }
            }
            ReportEvent::RunAborted { applied, total } => {
                println!();
                println!("{} of {} steps completed.", applied, total);
                println!("Migration failed. The rest of the migrations are canceled.");
            }
            ReportEvent::AlreadyAtVersion { version } => {
                println!("New version {} matches the current version.", version);
            }
            ReportEvent::UpToDate => {
                println!("No new migrations found. Your system is up-to-date.");
            }
            ReportEvent::NothingApplied => {
                println!("No migration has been applied before.");
            }
        }
    }
}

/// Interactive yes/no prompt on stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Non-interactive confirmation for --yes runs.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub(crate) fn noun(n: usize) -> &'static str {
    if n == 1 {
        "migration"
    } else {
        "migrations"
    }
}

fn was_were(n: usize) -> &'static str {
    if n == 1 {
        "was"
    } else {
        "were"
    }
}

fn verb(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Up => "applied",
        PlanKind::Down => "reverted",
        PlanKind::Redo => "redone",
    }
}
