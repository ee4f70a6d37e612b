//! Integration tests for `mallnav route` and `mallnav exit`.

mod common;

use common::{TestEnv, json_lines};
use predicates::prelude::*;

// === Route ===

#[test]
fn test_route_same_floor() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["route", "1E01", "1I01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\":true"))
        .stdout(predicate::str::contains("\"total_distance\":\"10m\""))
        .stdout(predicate::str::contains("\"estimated_time\":\"1 minutes\""))
        .stdout(predicate::str::contains("\"direction\":\"forward\""))
        .stdout(predicate::str::contains("\"checkpoint_qr\":\"1I01\""));
}

#[test]
fn test_route_cross_floor_steps() {
    let env = TestEnv::new();

    let output = env
        .mallnav()
        .args(["route", "1E01", "2S01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    let route = &lines[0]["route"];
    assert!(route["session_id"].as_str().unwrap().starts_with("nav_"));
    assert_eq!(route["current_step"], 1);

    let steps = route["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1]["instruction"], "Take escalator to Floor 2");
    assert_eq!(steps[1]["direction"], "up");
    assert_eq!(steps[1]["distance"], 30);
    assert_eq!(steps[1]["estimated_time"], 25);
}

#[test]
fn test_route_graph_strategy() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["route", "1E01", "1I02", "--strategy", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_distance\":\"45m\""))
        .stdout(predicate::str::contains("Walk straight toward Central Plaza"));
}

#[test]
fn test_route_unknown_destination() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["route", "1E01", "9Z99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\":false"))
        .stdout(predicate::str::contains(
            "\"error\":\"Destination location not found\"",
        ));
}

#[test]
fn test_route_rejects_unknown_strategy() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["route", "1E01", "1I01", "--strategy", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown route strategy"));
}

#[test]
fn test_route_accessible_flag_accepted() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["route", "1S01", "1S03", "--accessible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direction\":\"left\""));
}

// === Exit ===

#[test]
fn test_exit_nearest_entrance() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["exit", "1S01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"emergency_exit\""))
        .stdout(predicate::str::contains("\"qr_id\":\"1E03\""))
        .stdout(predicate::str::contains("\"type\":\"entrance\""));
}

#[test]
fn test_exit_unknown_location() {
    let env = TestEnv::new();

    env.mallnav()
        .args(["exit", "NOPE"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No exit found"));
}
