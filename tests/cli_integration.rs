use assert_cmd::Command;
use predicates::prelude::*;

fn atelier(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("atelier").unwrap();
    cmd.arg("--dir").arg(dir.join(".atelier"));
    cmd
}

#[test]
fn test_create_then_list_shows_tree() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "src/App.tsx"])
        .assert()
        .success()
        .stdout(predicates::str::contains("File created: src/App.tsx"));

    atelier(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicates::str::contains("src/"))
        .stdout(predicates::str::contains("App.tsx"))
        .stdout(predicates::str::contains("typescript"));
}

#[test]
fn test_write_records_history_and_diff() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "notes.md"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["write", "notes.md", "a\nb"])
        .assert()
        .success()
        .stdout(predicates::str::contains("File updated"));

    atelier(temp_dir.path())
        .args(["write", "notes.md", "a\nc"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["history", "notes.md"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated notes.md").count(2));

    atelier(temp_dir.path())
        .args(["diff", "notes.md"])
        .assert()
        .success()
        .stdout(predicates::str::contains("- b"))
        .stdout(predicates::str::contains("+ c"));
}

#[test]
fn test_identical_write_is_a_noop() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "a.ts", "same"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["write", "a.ts", "same"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No changes"));

    atelier(temp_dir.path())
        .args(["history", "a.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No versions yet"));
}

#[test]
fn test_write_to_missing_file_does_not_fail() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["write", "ghost.ts", "boo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No file at ghost.ts"));
}

#[test]
fn test_write_reads_stdin_when_no_argument() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "a.ts"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["write", "a.ts"])
        .write_stdin("piped content")
        .assert()
        .success()
        .stdout(predicates::str::contains("File updated"));

    atelier(temp_dir.path())
        .args(["view", "a.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("piped content"));
}

#[test]
fn test_tabs_follow_close_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();

    for path in ["a.ts", "b.ts", "c.ts"] {
        atelier(temp_dir.path())
            .args(["create", path])
            .assert()
            .success();
    }

    atelier(temp_dir.path())
        .args(["open", "b.ts"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["close", "b.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Now editing c.ts"));

    atelier(temp_dir.path())
        .arg("tabs")
        .assert()
        .success()
        .stdout(predicates::str::contains("a.ts"))
        .stdout(predicates::str::contains("c.ts").and(predicates::str::contains("b.ts").not()));
}

#[test]
fn test_rename_starts_fresh_history() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "old.ts", "X"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["write", "old.ts", "Y"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["mv", "old.ts", "new.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Renamed old.ts to new.ts"));

    atelier(temp_dir.path())
        .args(["view", "new.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Y"));

    atelier(temp_dir.path())
        .args(["history", "new.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No versions yet"));

    atelier(temp_dir.path())
        .args(["view", "old.ts"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No file at path"));
}

#[test]
fn test_comment_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "a.ts", "one\ntwo"])
        .assert()
        .success();

    let output = atelier(temp_dir.path())
        .args(["comment", "add", "a.ts", "2", "why two?"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // The printed id is accepted back by resolve
    let stdout = String::from_utf8_lossy(&output.stdout);
    let id = stdout
        .split('(')
        .nth(1)
        .and_then(|s| s.split(')').next())
        .unwrap()
        .to_string();

    atelier(temp_dir.path())
        .args(["comment", "resolve", "a.ts", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("toggled"));

    atelier(temp_dir.path())
        .args(["comment", "list", "a.ts"])
        .assert()
        .success()
        .stdout(predicates::str::contains("why two?"))
        .stdout(predicates::str::contains("[resolved]"));
}

#[test]
fn test_export_writes_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("bundle.tar.gz");

    atelier(temp_dir.path())
        .args(["create", "src/main.rs", "fn main() {}"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["export", archive.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 1 files"));

    assert!(archive.exists());
}

#[test]
fn test_naked_invocation_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No files found"));
}

#[test]
fn test_duplicate_create_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    atelier(temp_dir.path())
        .args(["create", "a.ts"])
        .assert()
        .success();

    atelier(temp_dir.path())
        .args(["create", "a.ts"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}
