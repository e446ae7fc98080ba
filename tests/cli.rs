//! End-to-end tests for the `savr` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn savr(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("savr").unwrap();
    cmd.env("SAVR_DEMO_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn walkthrough(dir: &TempDir) -> Command {
    let mut cmd = savr(dir);
    cmd.args([
        "walkthrough",
        "--name",
        "Alex",
        "--age",
        "24",
        "--goal",
        "retirement",
        "--risk",
        "moderate",
        "--emergency-fund",
        "10000",
        "--monthly-savings",
        "500",
        "--delay-ms",
        "0",
    ]);
    cmd
}

#[test]
fn respond_connection_prints_accounts() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args(["respond", "connection", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chase Checking"))
        .stdout(predicate::str::contains("Chase Savings"))
        .stdout(predicate::str::contains("\"kind\": \"connection\""))
        .stdout(predicate::str::contains("\"balance\": 2500"))
        .stdout(predicate::str::contains("\"totalBalance\": 10500"))
        .stdout(predicate::str::contains("\"success\": true"));
}

#[test]
fn respond_goal_reports_progress_in_dollars() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args(["respond", "goal-setting", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": 10000"))
        .stdout(predicate::str::contains("\"progress\": 80"))
        .stdout(predicate::str::contains("\"monthlyContribution\": 500"));
}

#[test]
fn walkthrough_rejects_garbled_amounts() {
    let dir = TempDir::new().unwrap();
    for amount in ["1.xé", "92233720368547759"] {
        savr(&dir)
            .args([
                "walkthrough",
                "--name",
                "Alex",
                "--emergency-fund",
                amount,
                "--delay-ms",
                "0",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid emergency fund amount"));
    }
}

#[test]
fn respond_unknown_endpoint_echoes_input() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args([
            "respond",
            "newsletter",
            "--input",
            r#"{"email":"alex@example.com"}"#,
            "--delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("alex@example.com"));
}

#[test]
fn respond_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args(["respond", "profile", "--input", "{not json", "--delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn walkthrough_runs_every_step() {
    let dir = TempDir::new().unwrap();
    walkthrough(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding Complete!"))
        .stdout(predicate::str::contains("$10,500"))
        .stdout(predicate::str::contains("8.5% expected return"))
        .stdout(predicate::str::contains("Emergency Fund"))
        .stdout(predicate::str::contains("+12.5%"))
        .stdout(predicate::str::contains("Demo reset: back to step 1"));
}

#[test]
fn walkthrough_retries_a_failed_step() {
    let dir = TempDir::new().unwrap();
    walkthrough(&dir)
        .args(["--fail", "connection", "--finish", "close"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Something went wrong: simulated service outage"))
        .stdout(predicate::str::contains("Retrying..."))
        .stdout(predicate::str::contains("$10,500"))
        .stdout(predicate::str::contains("Demo closed."));
}

#[test]
fn walkthrough_requires_a_name() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args([
            "walkthrough",
            "--goal",
            "retirement",
            "--risk",
            "moderate",
            "--delay-ms",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required"));
}

#[test]
fn walkthrough_rejects_unknown_goal() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .args(["walkthrough", "--name", "Alex", "--goal", "yacht"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid goal"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    savr(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"response_delay_ms\": 1500"));
}

#[test]
fn config_reads_settings_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"response_delay_ms": 20, "mock": {"fail_endpoints": ["goal"]}}"#,
    )
    .unwrap();

    savr(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Response delay:  20 ms"))
        .stdout(predicate::str::contains("Failing endpoints: goal"));
}
