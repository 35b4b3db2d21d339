use assert_cmd::Command;

use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use serial_test::serial;
use std::time::Duration;

/// Helper to create a Command for the `radiance` binary with the
/// simulated delivery delay zeroed out.
fn radiance_cmd() -> Command {
  let mut cmd = Command::cargo_bin("radiance").expect("binary exists");
  cmd.env("RADIANCE_SUBMIT_DELAY_MS", "0");
  cmd
}

#[test]
#[serial]
fn test_help_lists_subcommands() {
  radiance_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(contains("radar").and(contains("chain")).and(contains("stats")).and(contains("submit")));
}

#[test]
#[serial]
fn test_radar_text_view_lists_sectors() {
  radiance_cmd()
    .arg("radar")
    .assert()
    .success()
    .stdout(
      contains("AI Energy Radar")
        .and(contains("Renewable Energy"))
        .and(contains("Energy Analytics & IoT"))
        .and(contains("(no applications)")),
    );
}

#[test]
#[serial]
fn test_radar_json_emits_placeable_markers_only() {
  let output = radiance_cmd().args(["radar", "--json"]).output().unwrap();
  assert!(output.status.success());

  let markers: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(markers.len(), 21);
  for marker in &markers {
    assert!(marker["x"].is_number());
    assert!(marker["y"].is_number());
    assert!(marker["sector"].as_u64().unwrap() < 8);
    assert!(marker["band"].as_u64().unwrap() < 5);
  }
  assert!(markers.iter().all(|marker| marker["id"].as_i64().unwrap() <= 21));
}

#[test]
#[serial]
fn test_radar_category_filter_narrows_markers() {
  let output = radiance_cmd()
    .args(["radar", "-c", "Renewable Energy", "--json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let markers: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(markers.len(), 3);
  assert!(markers.iter().all(|marker| marker["sector"].as_u64().unwrap() == 1));
}

#[test]
#[serial]
fn test_radar_svg_export_writes_document() {
  let temp = assert_fs::TempDir::new().unwrap();
  let svg_file = temp.child("radar.svg");

  radiance_cmd()
    .args(["radar", "--svg"])
    .arg(svg_file.path())
    .assert()
    .success()
    .stderr(contains("radar written to"));

  svg_file.assert(predicate::path::exists());
  let document = std::fs::read_to_string(svg_file.path()).unwrap();
  assert!(document.starts_with("<svg"));
  assert_eq!(document.matches("<circle").count(), 21);
  assert!(document.contains("Renewable Energy"));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_chain_text_view_groups_categories() {
  radiance_cmd()
    .arg("chain")
    .assert()
    .success()
    .stdout(
      contains("Energy Value Chain")
        .and(contains("Carbon Capture & Storage"))
        .and(contains("3 applications"))
        .and(contains("M: 90%")),
    );
}

#[test]
#[serial]
fn test_chain_json_groups_every_category() {
  let output = radiance_cmd().args(["chain", "--json"]).output().unwrap();
  assert!(output.status.success());

  let groups: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(groups.len(), 8);
  assert_eq!(groups[0]["category"], "Grid Management & Smart Grid");
  assert_eq!(groups[0]["records"].as_array().unwrap().len(), 3);
}

#[test]
#[serial]
fn test_chain_technology_filter() {
  let output = radiance_cmd()
    .args(["chain", "-t", "Expert Systems", "--json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let groups: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(groups.len(), 2);
  for group in &groups {
    assert_eq!(group["records"].as_array().unwrap().len(), 1);
  }
}

#[test]
#[serial]
fn test_stats_text_output() {
  radiance_cmd()
    .arg("stats")
    .assert()
    .success()
    .stdout(contains("Total Applications").and(contains("24")));
}

#[test]
#[serial]
fn test_stats_json_output() {
  let output = radiance_cmd().args(["stats", "--json"]).output().unwrap();
  assert!(output.status.success());

  let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(stats["totalApplications"], 24);
  assert_eq!(stats["sectors"], 8);
  assert_eq!(stats["technologies"], 3);
}

#[test]
#[serial]
fn test_submit_records_a_use_case() {
  let output = radiance_cmd()
    .args([
      "submit",
      "--name",
      "Alex Chen",
      "--email",
      "alex@example.com",
      "--title",
      "Turbine Wake Steering",
      "--description",
      "Closed-loop wake steering control for offshore wind farms",
      "--category",
      "Renewable Energy",
      "--technology",
      "Machine Learning",
      "--maturity",
      "75",
      "--tags",
      "wind, control",
      "--company",
      "Acme Energy",
      "--json",
    ])
    .output()
    .unwrap();
  assert!(output.status.success());

  let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(record["name"], "Turbine Wake Steering");
  assert_eq!(record["category"], "Renewable Energy");
  assert_eq!(record["maturity"], 0.75);
  assert_eq!(record["adoption"], 0.5);
  assert_eq!(record["tags"], serde_json::json!(["wind", "control"]));
  assert_eq!(record["company"], "Acme Energy");
  assert!(record["id"].as_i64().unwrap() > 0);
  assert!(record["submittedAt"].is_string());

  // Submitter details never land on the record.
  assert!(record.get("email").is_none());
  assert!(record.get("website").is_none());
}

#[test]
#[serial]
fn test_submit_success_message_without_json() {
  radiance_cmd()
    .args([
      "submit",
      "--name",
      "Alex Chen",
      "--email",
      "alex@example.com",
      "--title",
      "Feeder Outage Prediction",
      "--description",
      "Outage prediction for distribution feeders using weather data",
      "--category",
      "Grid Management & Smart Grid",
      "--technology",
      "Predictive Analytics",
    ])
    .assert()
    .success()
    .stdout(contains("Feeder Outage Prediction"))
    .stderr(contains("Use Case Submitted Successfully!"));
}

#[test]
#[serial]
fn test_submit_rejects_invalid_email() {
  radiance_cmd()
    .args([
      "submit",
      "--name",
      "Alex Chen",
      "--email",
      "not-an-email",
      "--title",
      "Turbine Wake Steering",
      "--description",
      "Closed-loop wake steering control for offshore wind farms",
      "--category",
      "Renewable Energy",
      "--technology",
      "Machine Learning",
    ])
    .assert()
    .failure()
    .code(2)
    .stderr(contains("Please enter a valid email address"));
}

#[test]
#[serial]
fn test_submit_rejects_short_description() {
  radiance_cmd()
    .args([
      "submit",
      "--name",
      "Alex Chen",
      "--email",
      "alex@example.com",
      "--title",
      "Turbine Wake Steering",
      "--description",
      "too short",
      "--category",
      "Renewable Energy",
      "--technology",
      "Machine Learning",
    ])
    .assert()
    .failure()
    .code(2)
    .stderr(contains("Description must be at least 20 characters"));
}

#[test]
#[serial]
fn test_submit_rejects_unparseable_maturity() {
  radiance_cmd()
    .args([
      "submit",
      "--name",
      "Alex Chen",
      "--email",
      "alex@example.com",
      "--title",
      "Turbine Wake Steering",
      "--description",
      "Closed-loop wake steering control for offshore wind farms",
      "--category",
      "Renewable Energy",
      "--technology",
      "Machine Learning",
      "--maturity",
      "very high",
    ])
    .assert()
    .failure()
    .code(2)
    .stderr(contains("Maturity must be between 0 and 100"));
}

#[test]
#[serial]
fn test_interactive_mode_shows_entry_screen() {
  // Without a terminal the prompt cannot run, but the entry screen
  // should have been printed before the failure.
  let output = radiance_cmd().timeout(Duration::from_secs(3)).output().unwrap();

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(
    stdout.contains("Do you have a use case you'd like to submit?") || !output.status.success(),
    "expected the entry screen or a prompt failure, got: {stdout}"
  );
}
