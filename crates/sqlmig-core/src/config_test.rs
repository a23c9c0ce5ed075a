use super::*;

#[test]
fn test_defaults_when_config_missing() {
    let tmp = tempfile::tempdir().unwrap();

    let config = Config::load(tmp.path()).unwrap();
    assert_eq!(config.migration_path, "migrations");
    assert_eq!(config.migration_table, "migration");
    assert_eq!(config.database.path, "sqlmig.duckdb");
}

#[test]
fn test_load_full_config() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        "migration_path: db/migrations\nmigration_table: schema_history\ndatabase:\n  path: \":memory:\"\n",
    )
    .unwrap();

    let config = Config::load(tmp.path()).unwrap();
    assert_eq!(config.migration_path, "db/migrations");
    assert_eq!(config.migration_table, "schema_history");
    assert_eq!(config.database.path, ":memory:");
}

#[test]
fn test_partial_config_fills_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "migration_path: sql\n").unwrap();

    let config = Config::load(tmp.path()).unwrap();
    assert_eq!(config.migration_path, "sql");
    assert_eq!(config.migration_table, "migration");
}

#[test]
fn test_unknown_field_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "migrations_dir: sql\n").unwrap();

    let err = Config::load(tmp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParse { .. }));
}

#[test]
fn test_malformed_yaml_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), ": not yaml : [").unwrap();

    let err = Config::load(tmp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParse { .. }));
}
