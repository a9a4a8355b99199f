use folio_core::{init_from_config, AppConfig, ConfigError, DuplicateIdPolicy, ScrollBehavior};
use std::fs;

#[test]
fn load_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.json");
    fs::write(
        &path,
        r#"{ "scroll_behavior": "instant", "duplicate_ids": "reject" }"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.scroll_behavior, ScrollBehavior::Instant);
    assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);
    assert_eq!(config.log_dir, None);
}

#[test]
fn load_reports_missing_file_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn config_without_log_dir_skips_file_logging() {
    let config = AppConfig::default();
    assert_eq!(init_from_config(&config), Ok(false));
}
