use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn tasklist_cmd(db: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tasklist");
    cmd.arg("--db").arg(db).env_remove("TASKLIST_LOG");
    cmd
}

fn db_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("tasklist.json")
}

// --- session ---

#[test]
fn add_then_end_persists_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);

    tasklist_cmd(&db)
        .write_stdin("add\nC\n2026-10-19\n14:30\nSimple task\n\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Tasklist exiting!\n"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&db).unwrap()).unwrap();
    assert_eq!(saved[0]["priority"], "C");
    assert_eq!(saved[0]["dateTimeString"], "2026-10-19T14:30");
    assert_eq!(saved[0]["subTasks"][0], "Simple task");
}

#[test]
fn tasks_survive_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);

    tasklist_cmd(&db)
        .write_stdin("add\nh\n2030-1-2\n9:05\nWrite report\n\nend\n")
        .assert()
        .success();

    tasklist_cmd(&db)
        .write_stdin("print\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1  | 2030-01-02 | 09:05 |"))
        .stdout(predicate::str::contains("|Write report"));
}

#[test]
fn delete_renumbers_remaining_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);

    tasklist_cmd(&db)
        .write_stdin(
            "add\nN\n2030-01-01\n10:00\nfirst\n\n\
             add\nN\n2030-01-02\n10:00\nsecond\n\n\
             add\nN\n2030-01-03\n10:00\nthird\n\n\
             delete\n2\nprint\nend\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("The task is deleted"))
        .stdout(predicate::str::contains("| 2  | 2030-01-03 | 10:00 |"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&db).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 2);
    assert_eq!(saved[1]["subTasks"][0], "third");
}

#[test]
fn end_of_input_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);

    tasklist_cmd(&db)
        .write_stdin("add\nL\n2030-01-01\n10:00\nunfinished session\n\n")
        .assert()
        .success();

    assert!(fs::read_to_string(&db).unwrap().contains("unfinished session"));
}

// --- print ---

#[test]
fn print_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    tasklist_cmd(&db_in(&dir))
        .arg("print")
        .assert()
        .success()
        .stdout("No tasks have been input\n");
}

#[test]
fn print_wraps_long_lines() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);
    let long = "x".repeat(45);
    fs::write(
        &db,
        format!(r#"[{{"priority":"N","dateTimeString":"2030-01-01T08:00","subTasks":["{long}"]}}]"#),
    )
    .unwrap();

    tasklist_cmd(&db)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("|{}|", "x".repeat(44))))
        .stdout(predicate::str::contains(format!(
            "|    |            |       |   |   |x{}|",
            " ".repeat(43)
        )));
}

#[test]
fn corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = db_in(&dir);
    fs::write(&db, r#"[{"priority":"Q","dateTimeString":"2030-01-01T08:00","subTasks":["x"]}]"#).unwrap();

    tasklist_cmd(&db)
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

// --- help ---

#[test]
fn help_flag_works() {
    let dir = tempfile::tempdir().unwrap();
    tasklist_cmd(&db_in(&dir))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("to-do list"));
}
