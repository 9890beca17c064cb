use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jsonfold() -> Command {
    Command::cargo_bin("jsonfold").expect("binary builds")
}

#[test]
fn renders_a_json_file_next_to_the_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, r#"{"name": "ada", "tags": [1, 2, 3]}"#).unwrap();

    jsonfold()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("render time:"));

    let html = fs::read_to_string(dir.path().join("data.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("data-role=\"root\""));
    assert!(html.contains("data-role=\"block\""));
    assert!(html.contains("<th>name</th>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
}

#[test]
fn output_flag_overrides_the_destination() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.json");
    let output = dir.path().join("out/report.html");
    fs::write(&input, r#"[1, 2, 3]"#).unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    jsonfold()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("data.html").exists());
}

#[test]
fn missing_input_fails_with_an_error() {
    let dir = TempDir::new().unwrap();

    jsonfold()
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn invalid_json_fails_with_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "{not json").unwrap();

    jsonfold()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn open_levels_flag_controls_initial_folding() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deep.json");
    fs::write(&input, r#"{"a": {"b": {"c": 1}}}"#).unwrap();

    jsonfold()
        .arg(&input)
        .arg("--open-levels")
        .arg("1")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("deep.html")).unwrap();
    // The root block stays open; the nested blocks start collapsed.
    assert!(html.contains("class=\"block\" data-role=\"block\" data-depth=\"0\""));
    assert!(html.contains("class=\"block collapsed\" data-role=\"block\" data-depth=\"1\""));
}

#[test]
fn open_levels_zero_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, "{}").unwrap();

    jsonfold()
        .arg(&input)
        .arg("--open-levels")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn config_file_sets_the_default_open_levels() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deep.json");
    let config = dir.path().join("jsonfold.toml");
    fs::write(&input, r#"{"a": {"b": {"c": 1}}}"#).unwrap();
    fs::write(&config, "default_open_levels = 1\n").unwrap();

    jsonfold()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("deep.html")).unwrap();
    assert!(html.contains("class=\"block collapsed\" data-role=\"block\" data-depth=\"1\""));
}

#[test]
fn flag_wins_over_config_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deep.json");
    let config = dir.path().join("jsonfold.toml");
    fs::write(&input, r#"{"a": {"b": 1}}"#).unwrap();
    fs::write(&config, "default_open_levels = 1\n").unwrap();

    jsonfold()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("--open-levels")
        .arg("5")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("deep.html")).unwrap();
    assert!(!html.contains("class=\"block collapsed\""));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, r#"{"a": 1}"#).unwrap();

    jsonfold()
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success();
}
