//! Integration tests for the `rumaps` binary.
//!
//! These tests use `assert_cmd` against the fixture maps in `docs/fixtures`
//! with a constant traffic factor so totals are deterministic.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

fn cli(map: &str) -> Command {
    let mut cmd = Command::cargo_bin("rumaps").expect("binary exists");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("RUMAPS_MAP")
        .arg("--map")
        .arg(fixture_path(map))
        .arg("--constant-traffic")
        .arg("1.0");
    cmd
}

#[test]
fn summary_reports_counts() {
    cli("campus.txt")
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("intersections: 12"))
        .stdout(predicate::str::contains("streets: 7"))
        .stdout(predicate::str::contains("directed edges: 28"));
}

#[test]
fn route_fewest_intersections_takes_diagonal() {
    cli("square.txt")
        .args([
            "route",
            "--from",
            "0,0",
            "--to",
            "10,10",
            "--algorithm",
            "fewest-intersections",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(1 hops; algorithm: fewest-intersections)",
        ))
        .stdout(predicate::str::contains("via Diagonal Ave #1"));
}

#[test]
fn route_json_output_is_structured() {
    let output = cli("square.txt")
        .args(["--format", "json", "route", "--from", "0,0", "--to", "10,0"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["algorithm"], "least_traffic");
    assert_eq!(value["hops"], 1);
    assert_eq!(value["total_length"], 10.0);
    assert_eq!(value["steps"][1]["via"], "North St");
}

#[test]
fn route_between_components_fails() {
    cli("campus.txt")
        .args(["route", "--from", "0,0", "--to", "1100,1100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn unknown_coordinate_fails() {
    cli("campus.txt")
        .args(["reachable", "--at", "55,55"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no intersection at (55, 55)"));
}

#[test]
fn reachable_lists_component() {
    cli("campus.txt")
        .args(["reachable", "--at", "1000,1000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "3 intersections reachable from (1000, 1000):",
        ))
        .stdout(predicate::str::contains(" - (1100, 1100)"));
}

#[test]
fn stats_totals_explicit_path() {
    cli("square.txt")
        .args(["stats", "--path", "0,0", "10,0", "10,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total length: 20.00"))
        .stdout(predicate::str::contains("Total traffic: 20.00"))
        .stdout(predicate::str::contains("Average traffic factor: 1.000"));
}

#[test]
fn map_path_can_come_from_environment() {
    let mut cmd = Command::cargo_bin("rumaps").expect("binary exists");
    cmd.env("RUMAPS_MAP", fixture_path("square.txt"))
        .env("RUST_LOG", "error")
        .args(["--seed", "11", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intersections: 4"));
}

#[test]
fn malformed_map_reports_line() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("broken.txt");
    fs::write(&path, "2 1\nMain St\n1\n1 2 wide\n0 0\n1 0\n").expect("write map");

    let mut cmd = Command::cargo_bin("rumaps").expect("binary exists");
    cmd.env("RUST_LOG", "error")
        .env_remove("RUMAPS_MAP")
        .arg("--map")
        .arg(&path)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load map"))
        .stderr(predicate::str::contains("line 4"));
}

#[test]
fn seed_and_constant_traffic_conflict() {
    cli("square.txt")
        .args(["--seed", "3", "summary"])
        .assert()
        .failure();
}
