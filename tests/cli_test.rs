use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_filepath_is_required() {
    Command::cargo_bin("brename")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--filepath"));
}

#[test]
fn test_missing_source_folder_exits_nonzero() {
    let dir = tempdir().unwrap();
    let log_file = dir.path().join("run.log");

    Command::cargo_bin("brename")
        .unwrap()
        .args([
            "--filepath",
            dir.path().join("nonexistent").to_str().unwrap(),
            "--log-file",
            log_file.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Invalid folder path"));
}

#[test]
fn test_end_to_end_copy_run() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source");
    let target = dir.path().join("target");
    let log_file = dir.path().join("run.log");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("scene.ma"), "maya scene").unwrap();
    fs::write(source.join("readme.txt"), "notes").unwrap();

    Command::cargo_bin("brename")
        .unwrap()
        .args([
            "--filepath",
            source.to_str().unwrap(),
            "--new-folder",
            target.to_str().unwrap(),
            "--copy",
            "--prefix",
            "FINAL_",
            "--log-file",
            log_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run summary:"))
        .stdout(predicate::str::contains("Files transferred: 2"));

    assert!(target.join("FINAL_scene.ma").exists());
    assert!(target.join("NOTE_readme_TEMP.txt").exists());
    assert!(source.join("scene.ma").exists(), "Copy mode keeps sources");
}

#[test]
fn test_dry_run_reports_plan_only() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source");
    let target = dir.path().join("target");
    let log_file = dir.path().join("run.log");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("icon.png"), "texture").unwrap();

    Command::cargo_bin("brename")
        .unwrap()
        .args([
            "--filepath",
            source.to_str().unwrap(),
            "--new-folder",
            target.to_str().unwrap(),
            "--dry",
            "--log-file",
            log_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned operations (dry run):"));

    assert!(source.join("icon.png").exists());
    assert!(!target.exists());
}

#[test]
fn test_verbose_mirrors_log_lines_to_console() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source");
    let log_file = dir.path().join("run.log");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("draft.dat"), "data").unwrap();

    Command::cargo_bin("brename")
        .unwrap()
        .args([
            "--filepath",
            source.to_str().unwrap(),
            "--find",
            "draft",
            "--replace",
            "final",
            "--verbose",
            "--log-file",
            log_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved"));

    assert!(source.join("final.dat").exists());
}
