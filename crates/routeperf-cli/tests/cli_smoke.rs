//! CLI binary smoke tests using assert_cmd.
//!
//! Every run passes `--no-show` so no browser is launched.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("routeperf").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-show"))
        .stdout(predicate::str::contains("--observations"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("routeperf"));
}

// ---------------------------------------------------------------------------
// Report runs
// ---------------------------------------------------------------------------

#[test]
fn first_run_bootstraps_and_reports_eigrp() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file not found. Creating a new one with default data..."))
        .stdout(predicate::str::contains("Routing Protocol Performance Data:"))
        .stdout(predicate::str::contains("RIP"))
        .stdout(predicate::str::contains("Highest Throughput : EIGRP"))
        .stdout(predicate::str::contains("Lowest Delay : EIGRP"))
        .stdout(predicate::str::contains("Minimum Packet Loss: EIGRP"))
        .stdout(predicate::str::contains(
            "Conclusion: EIGRP provides the best overall performance among the three.",
        ));

    let table = fs::read_to_string(dir.path().join("routing_performance.csv")).unwrap();
    assert_eq!(
        table,
        "Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)\nRIP,20,180,2.0\nOSPF,12,250,1.0\nEIGRP,10,300,0.5\n"
    );
}

#[test]
fn output_sections_are_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd()
        .current_dir(dir.path())
        .arg("--no-show")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let table = stdout.find("Routing Protocol Performance Data:").unwrap();
    let summary = stdout.find("Highest Throughput :").unwrap();
    let observations = stdout.find("Performance Observation Summary").unwrap();
    assert!(table < summary && summary < observations);
}

#[test]
fn second_run_keeps_existing_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routing_performance.csv");
    fs::write(
        &path,
        "Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)\nRIP,5,400,0.1\nOSPF,12,250,1.0\n",
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("--no-show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file not found").not())
        .stdout(predicate::str::contains("Highest Throughput : RIP"))
        .stdout(predicate::str::contains("Lowest Delay : RIP"));

    assert!(fs::read_to_string(&path).unwrap().contains("RIP,5,400,0.1"));
}

#[test]
fn derived_observations_follow_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perf.csv");
    fs::write(
        &path,
        "Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)\nRIP,5,400,0.1\nEIGRP,10,300,0.5\n",
    )
    .unwrap();

    cmd()
        .args(["--no-show", "--observations", "derived", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conclusion: RIP provides the best overall performance"));
}

#[test]
fn report_flag_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("perf.csv");
    let report = dir.path().join("report.html");

    cmd()
        .arg("--no-show")
        .arg("--data")
        .arg(&data)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains("Routing Protocol Performance Comparison"));
    assert!(html.contains("Performance Observation Summary"));
}

#[test]
fn no_report_file_by_default() {
    let dir = tempfile::tempdir().unwrap();
    cmd().current_dir(dir.path()).arg("--no-show").assert().success();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn malformed_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Protocol,Delay(ms)\nRIP,20\n").unwrap();

    cmd()
        .args(["--no-show", "--data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Throughput(kbps)"));
}

#[test]
fn empty_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Protocol,Delay(ms),Throughput(kbps),PacketLoss(%)\n").unwrap();

    cmd()
        .args(["--no-show", "--data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty performance table"));
}

#[test]
fn unknown_observation_mode_fails() {
    cmd()
        .args(["--no-show", "--observations", "verbose"])
        .assert()
        .failure();
}

#[test]
fn wrong_data_extension_fails() {
    cmd()
        .args(["--no-show", "--data", "/tmp/perf.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".csv"));
}

#[test]
fn nonexistent_config_fails() {
    cmd()
        .args(["--no-show", "/nonexistent/routeperf.json"])
        .assert()
        .failure();
}
