//! Sequence planning: pending computation, duplicate-version detection,
//! and target-version resolution.

use std::collections::{BTreeMap, HashSet};

use crate::migration::{HistoryRecord, MigrationFile};

/// Outcome of resolving a `to <version>` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPlan {
    /// The target equals the latest applied version; nothing to do.
    AlreadyAtVersion,
    /// Apply the first `steps` pending migrations.
    Up { steps: usize },
    /// Revert the most recent `steps` history rows.
    Down { steps: usize },
    /// No migration file or history row lands exactly on the target.
    NotFound,
}

/// Compute the pending migrations: up-files whose version is absent from
/// the applied set, sorted ascending by filename.
///
/// Ordering is lexical. Operators are expected to zero-pad version
/// prefixes so lexical order matches numeric order; that discipline is a
/// documented constraint of the filename encoding.
pub fn pending(files: Vec<MigrationFile>, applied: &HashSet<i64>) -> Vec<MigrationFile> {
    let mut pending: Vec<MigrationFile> = files
        .into_iter()
        .filter(|f| !applied.contains(&f.version))
        .collect();
    pending.sort_by(|a, b| a.name.cmp(&b.name));
    pending
}

/// Find every pending filename that shares its version with another
/// pending file.
///
/// The whole conflict set is returned, not just the first collision, so
/// the operator can fix all offending names in one pass. Any non-empty
/// result must abort an up run before any script executes.
pub fn duplicate_versions(pending: &[MigrationFile]) -> Vec<String> {
    let mut by_version: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
    for file in pending {
        by_version
            .entry(file.version)
            .or_default()
            .push(file.name.as_str());
    }

    by_version
        .into_values()
        .filter(|names| names.len() > 1)
        .flatten()
        .map(String::from)
        .collect()
}

/// Resolve how many steps are needed to land exactly on `target`.
///
/// Upward (no history yet, or target above the latest applied version):
/// count pending files with version at or below the target; the plan
/// succeeds only if some pending file's version equals the target.
/// Downward: count history rows with version strictly above the target;
/// succeeds only if some row's version equals the target. A target equal
/// to the latest applied version is a no-op, not an up/down decision.
pub fn plan_to_version(
    target: i64,
    latest_applied: Option<i64>,
    pending: &[MigrationFile],
    history: &[HistoryRecord],
) -> TargetPlan {
    match latest_applied {
        Some(latest) if target == latest => TargetPlan::AlreadyAtVersion,
        Some(latest) if target < latest => {
            if history.iter().any(|r| r.version == target) {
                let steps = history.iter().filter(|r| r.version > target).count();
                TargetPlan::Down { steps }
            } else {
                TargetPlan::NotFound
            }
        }
        _ => {
            if pending.iter().any(|f| f.version == target) {
                let steps = pending.iter().filter(|f| f.version <= target).count();
                TargetPlan::Up { steps }
            } else {
                TargetPlan::NotFound
            }
        }
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;
