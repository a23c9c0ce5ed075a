use super::*;

fn files(names: &[&str]) -> Vec<MigrationFile> {
    names.iter().map(|name| MigrationFile::new(*name)).collect()
}

fn history(versions: &[(i64, &str)]) -> Vec<HistoryRecord> {
    versions
        .iter()
        .map(|(version, name)| HistoryRecord {
            version: *version,
            name: name.to_string(),
            applied_at: "2026-01-01 00:00:00".to_string(),
        })
        .collect()
}

#[test]
fn test_pending_excludes_applied_versions() {
    let all = files(&["01_a.up.sql", "02_b.up.sql", "03_c.up.sql"]);
    let applied: HashSet<i64> = [1, 3].into_iter().collect();

    let pending = pending(all, &applied);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "02_b.up.sql");
}

#[test]
fn test_pending_sorted_lexically() {
    let all = files(&["02_b.up.sql", "010_j.up.sql", "01_a.up.sql"]);
    let applied = HashSet::new();

    let names: Vec<String> = pending(all, &applied).into_iter().map(|f| f.name).collect();
    // Lexical order, not numeric: "010" sorts before "02".
    assert_eq!(names, vec!["010_j.up.sql", "01_a.up.sql", "02_b.up.sql"]);
}

#[test]
fn test_pending_empty_when_all_applied() {
    let all = files(&["01_a.up.sql", "02_b.up.sql"]);
    let applied: HashSet<i64> = [1, 2].into_iter().collect();

    assert!(pending(all, &applied).is_empty());
}

#[test]
fn test_duplicate_versions_none() {
    let pending = files(&["01_a.up.sql", "02_b.up.sql"]);
    assert!(duplicate_versions(&pending).is_empty());
}

#[test]
fn test_duplicate_versions_reports_whole_group() {
    let pending = files(&["01_a.up.sql", "001_b.up.sql", "02_c.up.sql"]);

    let conflicts = duplicate_versions(&pending);
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.contains(&"01_a.up.sql".to_string()));
    assert!(conflicts.contains(&"001_b.up.sql".to_string()));
}

#[test]
fn test_duplicate_versions_reports_all_groups() {
    let pending = files(&[
        "01_a.up.sql",
        "1_b.up.sql",
        "02_c.up.sql",
        "002_d.up.sql",
        "03_e.up.sql",
    ]);

    let conflicts = duplicate_versions(&pending);
    assert_eq!(conflicts.len(), 4);
    assert!(!conflicts.contains(&"03_e.up.sql".to_string()));
}

#[test]
fn test_duplicate_versions_unprefixed_names_collide_at_zero() {
    let pending = files(&["alpha.up.sql", "beta.up.sql"]);

    let conflicts = duplicate_versions(&pending);
    assert_eq!(conflicts.len(), 2);
}

#[test]
fn test_plan_to_version_no_op_at_current_version() {
    let hist = history(&[(2, "02_b.up.sql"), (1, "01_a.up.sql")]);

    let plan = plan_to_version(2, Some(2), &[], &hist);
    assert_eq!(plan, TargetPlan::AlreadyAtVersion);
}

#[test]
fn test_plan_to_version_upward_counts_files_at_or_below_target() {
    let pending = files(&["02_b.up.sql", "03_c.up.sql", "05_e.up.sql"]);
    let hist = history(&[(1, "01_a.up.sql")]);

    let plan = plan_to_version(3, Some(1), &pending, &hist);
    assert_eq!(plan, TargetPlan::Up { steps: 2 });
}

#[test]
fn test_plan_to_version_upward_with_empty_history() {
    let pending = files(&["01_a.up.sql", "02_b.up.sql"]);

    let plan = plan_to_version(2, None, &pending, &[]);
    assert_eq!(plan, TargetPlan::Up { steps: 2 });
}

#[test]
fn test_plan_to_version_upward_allows_gaps_below_target() {
    // Version 4 does not exist; reaching 5 still applies 2, 3, and 5.
    let pending = files(&["02_b.up.sql", "03_c.up.sql", "05_e.up.sql"]);
    let hist = history(&[(1, "01_a.up.sql")]);

    let plan = plan_to_version(5, Some(1), &pending, &hist);
    assert_eq!(plan, TargetPlan::Up { steps: 3 });
}

#[test]
fn test_plan_to_version_upward_not_found_without_exact_match() {
    let pending = files(&["02_b.up.sql", "05_e.up.sql"]);
    let hist = history(&[(1, "01_a.up.sql")]);

    let plan = plan_to_version(4, Some(1), &pending, &hist);
    assert_eq!(plan, TargetPlan::NotFound);
}

#[test]
fn test_plan_to_version_downward_counts_rows_above_target() {
    let hist = history(&[
        (3, "03_c.up.sql"),
        (2, "02_b.up.sql"),
        (1, "01_a.up.sql"),
    ]);

    let plan = plan_to_version(1, Some(3), &[], &hist);
    assert_eq!(plan, TargetPlan::Down { steps: 2 });
}

#[test]
fn test_plan_to_version_downward_not_found_without_exact_match() {
    let hist = history(&[(3, "03_c.up.sql"), (1, "01_a.up.sql")]);

    let plan = plan_to_version(2, Some(3), &[], &hist);
    assert_eq!(plan, TargetPlan::NotFound);
}
