use assert_cmd::Command;
use predicates::prelude::predicate;

fn check_cmd() -> Command {
    let mut cmd = Command::cargo_bin("asptab").unwrap();
    cmd.arg("check");
    cmd
}

#[test]
fn test_check_ok() {
    check_cmd()
        .write_stdin("Answer: 1\nin(a) in(b)\nAnswer: 2\nin(c) supported_with_weight(action(x), 1)\nSATISFIABLE\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "2 answer set(s), 3 distinct atom(s) and 1 distinct action(s)",
        ));
}

#[test]
fn test_check_malformed() {
    check_cmd()
        .write_stdin("Answer: 1\nin(a))\n")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_check_malformed_skipped() {
    check_cmd()
        .arg("--skip-malformed")
        .write_stdin("Answer: 1\nin(a))\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("no data"));
}

#[test]
fn test_check_no_answer_block() {
    check_cmd()
        .write_stdin("in(a)\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data"));
}

#[test]
fn test_check_lowest_cost() {
    check_cmd()
        .write_stdin("Answer: 1\nin(a) extension_cost(7)\nAnswer: 2\nin(b) extension_cost(4)\nAnswer: 3\nextension_cost(high)\nSATISFIABLE\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("the lowest integer cost is 4"));
}
