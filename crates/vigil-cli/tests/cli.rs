use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vigil"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_sync_help_shows_dry_run() {
    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("sync")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--min-stars"));
}

#[test]
fn test_completion_bash() {
    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("completion")
        .arg("generate")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("vigil"));
}

#[test]
fn test_sync_without_queries_fails_with_hint() {
    // No queries on the command line and none in the (absent) test config;
    // the run must fail before any document or network access.
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("README.md");
    std::fs::write(&doc, "no markers\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("sync")
        .arg("--dry-run")
        .arg("--doc")
        .arg(&doc)
        .env("VIGIL_SEARCH__MIN_STARS", "1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No search queries configured"));
}

#[test]
fn test_sync_missing_markers_fails_before_searching() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("README.md");
    std::fs::write(&doc, "# A document without markers\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("sync")
        .arg("--dry-run")
        .arg("--doc")
        .arg(&doc)
        .arg("--query")
        .arg("nano in:name topic:llm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("list markers not found"));
}

#[test]
fn test_sync_missing_document_fails() {
    let mut cmd = cargo_bin_cmd!("vigil");
    cmd.arg("sync")
        .arg("--dry-run")
        .arg("--doc")
        .arg("/nonexistent/path/README.md")
        .arg("--query")
        .arg("nano in:name topic:llm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
