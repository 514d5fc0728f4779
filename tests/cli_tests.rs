use regex::Regex;
use std::process::{Command, Output};

fn collatz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collatz"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn summary_value(stdout: &str, label: &str) -> Option<u64> {
    let re = Regex::new(&format!(r"\|\s*{}\s*\|\s*([\d,]+)\s*\|", label)).unwrap();
    re.captures(stdout)
        .and_then(|c| c[1].replace(',', "").parse().ok())
}

#[test]
fn test_cli_run_summary_table() {
    let output = collatz(&["run", "27"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(summary_value(&stdout, "Starting"), Some(27));
    assert_eq!(summary_value(&stdout, "Max"), Some(9232));
    assert_eq!(summary_value(&stdout, "Difference"), Some(9205));
}

#[test]
fn test_cli_run_steps_table() {
    let output = collatz(&["run", "6", "--steps"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Next Value = 3(5) + 1 = 16"));
    assert!(stdout.contains("N/A"));
}

#[test]
fn test_cli_run_json() {
    let output = collatz(&["run", "6", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], 6);
    assert_eq!(json["max"], 16);
    assert_eq!(json["spread"], 10);
    assert_eq!(json["steps"].as_array().unwrap().len(), 9);
    assert_eq!(json["steps"][1]["previousValue"], 6);
}

#[test]
fn test_cli_chart_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("chart.json");

    let output = collatz(&[
        "run",
        "6",
        "--format",
        "chart",
        "--line-break",
        "html",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["y"][4], 16);
    assert_eq!(json["x"].as_array().unwrap().len(), 9);
    assert!(json["text"][0].as_str().unwrap().contains("<br>"));
}

#[test]
fn test_cli_rejects_zero_and_negative() {
    for bad in ["0", "-5", "abc"] {
        let output = collatz(&["run", bad]);
        assert!(!output.status.success(), "accepted '{}'", bad);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid Input"), "stderr: {}", stderr);
    }
}

#[test]
fn test_cli_step_limit_exit_code() {
    let output = collatz(&["run", "27", "--max-steps", "10"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Step Limit"));
}

#[test]
fn test_cli_verify() {
    let ok = collatz(&["verify", "--up-to", "1000"]);
    assert!(ok.status.success());
    let stdout = String::from_utf8_lossy(&ok.stdout);
    assert_eq!(summary_value(&stdout, "Reached 1"), Some(1000));

    let failing = collatz(&["verify", "--up-to", "30", "--max-steps", "20"]);
    assert_eq!(failing.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&failing.stdout);
    assert!(stdout.contains("27"));
}
