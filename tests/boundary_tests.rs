use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn run(principal: &str, term: &str, rate: &str, start: &str) -> assert_cmd::assert::Assert {
    Command::new(cargo_bin!("amortize"))
        .args(["--principal", principal, "--term", term, "--rate", rate, "--start", start])
        .assert()
}

#[test]
fn test_minimum_accepted_values() {
    // A single payment of principal plus one month at 1%/12.
    run("1", "1", "1", "2024-02-29")
        .success()
        .stdout(predicate::str::contains("1,2024-02-29,1,"))
        .stdout(predicate::str::contains("\n2,").not());
}

#[test]
fn test_values_below_one_are_rejected() {
    run("0", "12", "6", "2024-01-15")
        .failure()
        .stderr(predicate::str::contains("principal"))
        .stdout(predicate::str::is_empty());

    run("1000", "0", "6", "2024-01-15")
        .failure()
        .stderr(predicate::str::contains("term_months"));

    run("1000", "12", "0.5", "2024-01-15")
        .failure()
        .stderr(predicate::str::contains("annual_rate"));

    run("1000", "-12", "6", "2024-01-15")
        .failure()
        .stderr(predicate::str::contains("term_months"));
}

#[test]
fn test_unparseable_start_date_is_rejected() {
    run("1000", "12", "6", "2024-13-01")
        .failure()
        .stderr(predicate::str::contains("Invalid date"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_month_end_start_date() {
    run("3000", "3", "6", "2024-01-31")
        .success()
        .stdout(predicate::str::contains("1,2024-01-31,"))
        .stdout(predicate::str::contains("2,2024-02-29,"))
        .stdout(predicate::str::contains("3,2024-03-29,"));
}

#[test]
fn test_oversized_principal_reports_overflow() {
    run("79228162514264337593543950335", "1", "12", "2024-01-01")
        .failure()
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn test_term_past_calendar_range_is_rejected() {
    run("1000", "4000000000", "6", "2024-01-01")
        .failure()
        .stderr(predicate::str::contains("term_months"));
}
