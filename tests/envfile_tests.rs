//! Environment file integration tests
//!
//! Tests run in parallel threads of one process and the process
//! environment is shared, so every test uses variable names unique to it.

use std::fs;
use std::path::PathBuf;

use opskit::envfile::EnvFile;

fn env_fixture(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_applies_file_to_process_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "OPSKIT_T_LOAD_URL=postgres://localhost/app\n");

    let count = EnvFile::new(&path).load().unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        std::env::var("OPSKIT_T_LOAD_URL").unwrap(),
        "postgres://localhost/app"
    );
}

#[test]
fn test_load_does_not_override_existing_process_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "OPSKIT_T_LOAD_KEEP=from-file\n");

    std::env::set_var("OPSKIT_T_LOAD_KEEP", "from-process");
    EnvFile::new(&path).load().unwrap();
    assert_eq!(std::env::var("OPSKIT_T_LOAD_KEEP").unwrap(), "from-process");
}

#[test]
fn test_missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = EnvFile::new(dir.path().join("absent.env"));
    assert_eq!(file.load().unwrap(), 0);
}

#[test]
fn test_set_persists_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let file = EnvFile::new(&path);

    file.set("OPSKIT_T_SET_MODE", "staging").unwrap();

    assert_eq!(std::env::var("OPSKIT_T_SET_MODE").unwrap(), "staging");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("OPSKIT_T_SET_MODE=staging"));
}

#[test]
fn test_set_replaces_an_existing_line_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(
        &dir,
        "# database settings\nOPSKIT_T_REPLACE_A=old\nOPSKIT_T_REPLACE_B=other\n",
    );
    let file = EnvFile::new(&path);

    file.set("OPSKIT_T_REPLACE_A", "new").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# database settings",
            "OPSKIT_T_REPLACE_A=new",
            "OPSKIT_T_REPLACE_B=other",
        ]
    );
}

#[test]
fn test_set_quotes_values_with_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let file = EnvFile::new(&path);

    file.set("OPSKIT_T_QUOTE_MSG", "hello world").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("OPSKIT_T_QUOTE_MSG=\"hello world\""));
    // and it reads back intact through the dotenv parser
    let entries = file.entries().unwrap();
    assert!(entries.contains(&("OPSKIT_T_QUOTE_MSG".to_string(), "hello world".to_string())));
}

#[test]
fn test_get_prefers_process_env_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "OPSKIT_T_GET_PREC=from-file\n");
    let file = EnvFile::new(&path);

    std::env::set_var("OPSKIT_T_GET_PREC", "from-process");
    assert_eq!(
        file.get("OPSKIT_T_GET_PREC").as_deref(),
        Some("from-process")
    );
}

#[test]
fn test_get_falls_back_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "OPSKIT_T_GET_FILE=file-only\n");
    let file = EnvFile::new(&path);

    assert_eq!(file.get("OPSKIT_T_GET_FILE").as_deref(), Some("file-only"));
}

#[test]
fn test_get_absent_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "");
    let file = EnvFile::new(&path);

    assert_eq!(file.get("OPSKIT_T_GET_ABSENT"), None);
}

#[test]
fn test_unset_removes_line_and_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(
        &dir,
        "# keep this comment\nOPSKIT_T_UNSET_GONE=x\n\nOPSKIT_T_UNSET_STAYS=y\n",
    );
    let file = EnvFile::new(&path);

    std::env::set_var("OPSKIT_T_UNSET_GONE", "x");
    file.unset("OPSKIT_T_UNSET_GONE").unwrap();

    assert!(std::env::var("OPSKIT_T_UNSET_GONE").is_err());
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["# keep this comment", "", "OPSKIT_T_UNSET_STAYS=y"]
    );
}

#[test]
fn test_unset_handles_export_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "export OPSKIT_T_UNSET_EXPORT=x\n");
    let file = EnvFile::new(&path);

    file.unset("OPSKIT_T_UNSET_EXPORT").unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("OPSKIT_T_UNSET_EXPORT"));
}

#[test]
fn test_vars_merges_file_and_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = env_fixture(&dir, "OPSKIT_T_VARS_FILE=alpha\n");
    let file = EnvFile::new(&path);

    std::env::set_var("OPSKIT_T_VARS_PROC", "beta");
    let vars = file.vars().unwrap();

    assert!(vars.contains(&("OPSKIT_T_VARS_FILE".to_string(), "alpha".to_string())));
    assert!(vars.contains(&("OPSKIT_T_VARS_PROC".to_string(), "beta".to_string())));
}
