use assert_cmd::Command;
use predicates::prelude::*;

fn peoplepick() -> Command {
    Command::cargo_bin("peoplepick").unwrap()
}

#[test]
fn test_filter_prints_matching_names() {
    peoplepick()
        .args(["--filter", "van brussel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan van Brussel\n"))
        .stdout(predicate::str::contains("Maria van Brussel\n"))
        .stdout(predicate::str::contains("Haverbeke").not());
}

#[test]
fn test_filter_is_case_insensitive() {
    peoplepick()
        .args(["--filter", "EMMA"])
        .assert()
        .success()
        .stdout("Emma de Milliano\n");
}

#[test]
fn test_filter_empty_query_prints_everyone() {
    let output = peoplepick().args(["--filter", ""]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), peoplepick::PEOPLE.len());
}

#[test]
fn test_filter_without_matches_fails() {
    peoplepick()
        .args(["--filter", "nobody-here"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No matching suggestions"));
}

#[test]
fn test_help_lists_options() {
    peoplepick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--debounce-ms"))
        .stdout(predicate::str::contains("--filter"));
}
