//! Integration tests for recording, listing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::mama_cmd;

fn exec(temp: &TempDir, words: &[&str]) -> assert_cmd::assert::Assert {
    mama_cmd()
        .arg("--home")
        .arg(temp.path())
        .arg("exec")
        .args(words)
        .assert()
}

#[test]
fn test_exec_milk_persists_entry() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "150"])
        .success()
        .stdout(predicate::str::contains("Breast Milk Pumped: [MILK] 150ml"))
        .stdout(predicate::str::contains("Total breast milk pumped: 150ml"));

    let content = fs::read_to_string(temp.path().join("mama.txt")).unwrap();
    assert!(content.starts_with("MILK|150ml|"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_total_accumulates_across_runs() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "150"]).success();
    exec(&temp, &["milk", "120ml"])
        .success()
        .stdout(predicate::str::contains("Total breast milk pumped: 270ml"));
}

#[test]
fn test_delete_removes_entry_from_file() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "150"]).success();
    exec(&temp, &["weight", "65.5"]).success();

    exec(&temp, &["delete", "1"])
        .success()
        .stdout(predicate::str::contains("Deleted: [MILK] 150ml"))
        .stdout(predicate::str::contains("Total breast milk pumped: 0ml"));

    let content = fs::read_to_string(temp.path().join("mama.txt")).unwrap();
    assert_eq!(content.trim(), "WEIGHT|65.5");
}

#[test]
fn test_delete_on_empty_list_fails() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["delete", "1"])
        .failure()
        .stderr(predicate::str::contains("no items to delete"));
}

#[test]
fn test_delete_out_of_bounds_shows_valid_range() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "100"]).success();
    exec(&temp, &["milk", "200"]).success();

    exec(&temp, &["delete", "5"])
        .failure()
        .stderr(predicate::str::contains("Valid range: 1..2."));
}

#[test]
fn test_pipe_is_rejected_and_nothing_saved() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["meal", "rice|cake", "/cal", "300"])
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No | allowed!"));

    assert!(!temp.path().join("mama.txt").exists());
}

#[test]
fn test_invalid_milk_volume_fails() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "abc"])
        .failure()
        .code(2)
        .stderr(predicate::str::contains("actual number"));
    exec(&temp, &["milk", "0"])
        .failure()
        .code(3)
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_list_filter_by_kind() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["milk", "150"]).success();
    exec(&temp, &["workout", "Yoga", "/dur", "30", "/feel", "4"]).success();
    exec(&temp, &["meal", "Chicken", "Rice", "/cal", "550"]).success();

    exec(&temp, &["list", "workout"])
        .success()
        .stdout(predicate::str::contains("1. [WORKOUT] Yoga (30 mins, feel 4/5)"))
        .stdout(predicate::str::contains("[MILK]").not());

    exec(&temp, &["list"])
        .success()
        .stdout(predicate::str::contains("3. [MEAL] Chicken Rice (550kcal)"));
}

#[test]
fn test_non_numeric_arguments_are_usage_errors() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["workout", "Yoga", "/dur", "long", "/feel", "4"]).code(2);
    exec(&temp, &["meal", "Soup", "/cal", "lots"]).code(2);
    exec(&temp, &["measure", "waist/seventy", "hips/95"]).code(2);
    exec(&temp, &["meal", "Soup", "/cal", "20000"]).code(3);

    assert!(!temp.path().join("mama.txt").exists());
}

#[test]
fn test_unknown_list_type_fails() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["list", "sleep"]).failure();
}

#[test]
fn test_malformed_lines_are_skipped_on_load() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("mama.txt"),
        "MILK|150ml|28/10/25 01:14\ngarbage line\nMEAL|Toast (200kcal)|28/10/25 08:00\n",
    )
    .unwrap();

    exec(&temp, &["list"])
        .success()
        .stdout(predicate::str::contains("1. [MILK] 150ml (28/10/25 01:14)"))
        .stdout(predicate::str::contains("2. [MEAL] Toast (200kcal) (28/10/25 08:00)"));
}

#[test]
fn test_repl_session() {
    let temp = TempDir::new().unwrap();

    mama_cmd()
        .arg("--home")
        .arg(temp.path())
        .write_stdin("milk 150\nlist\nbye\nmilk 999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello from mama!"))
        .stdout(predicate::str::contains("1. [MILK] 150ml"))
        .stdout(predicate::str::contains("Bye. Hope to see you again soon!"))
        .stdout(predicate::str::contains("999ml").not());

    let content = fs::read_to_string(temp.path().join("mama.txt")).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_repl_reports_errors_and_continues() {
    let temp = TempDir::new().unwrap();

    mama_cmd()
        .arg("--home")
        .arg(temp.path())
        .write_stdin("dance\nweight 60\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command."))
        .stdout(predicate::str::contains("Added new weight entry: [WEIGHT] 60.00kg"));
}

#[test]
fn test_home_from_env() {
    let temp = TempDir::new().unwrap();

    mama_cmd()
        .env("MAMA_HOME", temp.path())
        .args(["exec", "milk", "80"])
        .assert()
        .success();

    assert!(temp.path().join("mama.txt").exists());
}

#[test]
fn test_goals_persist_between_runs() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["workout", "goal"])
        .success()
        .stdout(predicate::str::contains("You have not set a weekly workout goal yet."));

    exec(&temp, &["workout", "goal", "150"])
        .success()
        .stdout(predicate::str::contains("Your weekly workout goal is now 150 minutes."));
    exec(&temp, &["calorie", "goal", "2000"]).success();

    let content = fs::read_to_string(temp.path().join("mama.txt")).unwrap();
    assert_eq!(content, "GOAL_WORKOUT|150\nGOAL_CALORIES|2000\n");

    exec(&temp, &["workout", "Run", "/dur", "30", "/feel", "4"]).success();
    exec(&temp, &["workout", "goal"])
        .success()
        .stdout(predicate::str::contains("Your weekly workout goal is 150 minutes."))
        .stdout(predicate::str::contains("Workouts this week: 30 / 150 minutes (120 to go)"));
}

#[test]
fn test_invalid_goal_is_rejected() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["calorie", "goal", "0"])
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Daily calorie goal must be between 1 and 10000 kcal!"));
    exec(&temp, &["calorie", "goal", "plenty"]).failure().code(2);

    assert!(!temp.path().join("mama.txt").exists());
}

#[test]
fn test_dashboard_summarises_goals() {
    let temp = TempDir::new().unwrap();

    exec(&temp, &["calorie", "goal", "2000"]).success();
    exec(&temp, &["meal", "Chicken", "Rice", "/cal", "550"]).success();
    exec(&temp, &["milk", "150"]).success();
    exec(&temp, &["weight", "65.5"]).success();

    exec(&temp, &["dashboard"])
        .success()
        .stdout(predicate::str::contains("Workouts this week: 0 minutes (no goal set)"))
        .stdout(predicate::str::contains("Calories today: 550 / 2000 kcal (1450 kcal left)"))
        .stdout(predicate::str::contains("Milk pumped today: 150ml (total 150ml)"))
        .stdout(predicate::str::contains("Latest weight: 65.50kg"))
        .stdout(predicate::str::contains("Entries recorded: 3"));
}
