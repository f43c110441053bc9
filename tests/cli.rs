//! End-to-end CLI tests
//!
//! Each test runs the real binary against its own temporary data directory
//! via the `NESTEGG_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nestegg(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nestegg").unwrap();
    cmd.env("NESTEGG_DATA_DIR", dir.path());
    cmd
}

#[test]
fn income_add_and_list_round_trip() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["income", "add", "2000", "--month", "2024-01", "--description", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("January 2024"));

    nestegg(&dir)
        .args(["income", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("£2000.00"));
}

#[test]
fn invalid_month_key_is_rejected() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["income", "add", "2000", "--month", "January"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month key"));
}

#[test]
fn zero_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["expense", "add", "0", "--month", "2024-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn recurring_expense_shows_up_across_outlook() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args([
            "expense", "add", "1200", "--month", "2024-01", "--description", "Mortgage",
            "--category", "house-recurring", "--recurring",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("recurs monthly"));

    // CSV output is stable regardless of the current date: the recurring
    // expense fills every projected month at or after its start month.
    let output = nestegg(&dir)
        .args(["outlook", "--months", "3", "--csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv = String::from_utf8(output.stdout).unwrap();
    assert!(csv.starts_with("Month,Income,Expenses,Net"));
    assert_eq!(csv.lines().count(), 4); // header + 3 months
    for line in csv.lines().skip(1) {
        assert!(
            line.ends_with(",1200.00,-1200.00"),
            "unexpected outlook row: {}",
            line
        );
    }
}

#[test]
fn wedding_plan_flow() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["wedding", "set", "--date", "2099-05-01", "--target", "20000", "--savings", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2099-05-01"));

    nestegg(&dir)
        .args(["wedding", "contribute", "1200", "--date", "2024-02-14", "--note", "Bonus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£1200.00"));

    nestegg(&dir)
        .args(["wedding", "item", "add", "Venue", "--quoted", "12000", "--paid", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Venue"));

    nestegg(&dir)
        .args(["wedding", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Venue"))
        // savings: 5000 + 1200 contribution
        .stdout(predicate::str::contains("£6200.00"))
        // outstanding: 12000 quoted - 5000 paid
        .stdout(predicate::str::contains("£7000.00"));
}

#[test]
fn budget_item_partial_update_and_removal() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["wedding", "item", "add", "Catering", "--quoted", "8000"])
        .assert()
        .success();

    // Grab the item id from the show output.
    let output = nestegg(&dir).args(["wedding", "show"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.split_whitespace().find(|w| w.starts_with("itm-")))
        .expect("item id in show output")
        .to_string();

    nestegg(&dir)
        .args(["wedding", "item", "update", &id, "--paid", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outstanding £5000.00"));

    nestegg(&dir)
        .args(["wedding", "item", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed budget item Catering"));
}

#[test]
fn removing_unknown_entry_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["income", "remove", "inc-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn data_persists_between_invocations() {
    let dir = TempDir::new().unwrap();

    nestegg(&dir)
        .args(["income", "add", "1500", "--month", "2024-03", "--kind", "bonus"])
        .assert()
        .success();

    // A fresh process sees the same data.
    nestegg(&dir)
        .args(["income", "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("One-off Bonus"))
        .stdout(predicate::str::contains("£1500.00"));
}
