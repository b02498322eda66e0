use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("capacity-dashboard").unwrap();
    cmd.env_remove("CHART_TITLE").env_remove("CHART_THEME");
    cmd
}

#[test]
fn test_sample_json() {
    cmd()
        .args(["sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"indexFGCompletion\": 1982.0"))
        .stdout(predicate::str::contains("\"name\": \"9-Sep\""));
}

#[test]
fn test_sample_yaml() {
    cmd()
        .args(["sample", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1-Sep"));
}

#[test]
fn test_render_combo_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let output = dir.path().join("chart.html");

    let sample = cmd().arg("sample").output().unwrap();
    fs::write(&input, &sample.stdout).unwrap();

    cmd()
        .args(["render", "--type", "combo", "--title", "Index_FG Capacity"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Index_FG Capacity</title>"));
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("\"85%\""));
    assert!(html.contains("\"ticksuffix\":\"%\""));
}

#[test]
fn test_render_bar_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.yaml");
    fs::write(
        &input,
        "- name: Mon\n  indexCompletion: 10\n  indexedCapacity: 12\n  actualCapacity: 11\n",
    )
    .unwrap();

    cmd()
        .args(["render", "--no-legend", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"showlegend\":false"))
        .stdout(predicate::str::contains("\"Mon\""));
}

#[test]
fn test_render_missing_input_fails() {
    cmd()
        .args(["render", "--input", "/nonexistent/data.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
