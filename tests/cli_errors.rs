#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_evaluates_inline_query_as_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    let query = serde_json::json!({
        "property": "specific_volume_anomaly",
        "salinity": 40.0,
        "temperature": 40.0,
        "pressure": 10000.0,
    })
    .to_string();

    cmd.arg("--json").arg("--query-json").arg(query);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sigma\""))
        .stdout(predicate::str::contains("981.30190"));
}

#[test]
fn cli_prints_human_summary_by_default() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    let query = serde_json::json!({
        "property": "depth",
        "pressure": 10000.0,
        "latitude": 30.0,
    })
    .to_string();

    cmd.arg("--query-json").arg(query);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("depth: 9712.653072 m"));
}

#[test]
fn cli_reads_query_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");

    let doc = serde_json::json!({
        "query": {
            "property": "conductivity",
            "salinity": 35.0,
            "temperature": 15.0
        }
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"iterations\": 1"));
}

#[test]
fn cli_reports_invalid_json_for_query_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--query-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --query-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("absent.json");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--input").arg(&file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn cli_rejects_non_finite_result() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--query-json")
        .arg(r#"{"property": "sound_speed", "salinity": 35, "temperature": 1e308, "pressure": 0}"#);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not finite"));
}
