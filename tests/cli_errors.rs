#![cfg(feature = "cli")]

use predicates::prelude::*;

fn observations() -> serde_json::Value {
    serde_json::json!({
        "voltage": [-0.941602, -0.945, -0.940, -0.942],
        "pressure": [0.0, 10.0, 50.0, 100.0],
        "temperature": [21.0, 20.0, 18.0, 15.0],
        "salinity": [30.0, 30.5, 31.0, 31.2],
    })
}

fn calibration() -> serde_json::Value {
    serde_json::json!({
        "k0": -1.4156395,
        "k2": -0.0010626,
        "pressure_coeffs": [0.0, 0.0],
    })
}

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_prints_table_for_inline_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.arg("--observations-json")
        .arg(observations().to_string())
        .arg("--calibration-json")
        .arg(calibration().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pH_total"))
        .stdout(predicate::str::contains("7.927"))
        .stdout(predicate::str::contains("7.838"));
}

#[test]
fn cli_requires_calibration_with_inline_observations() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.arg("--observations-json").arg(observations().to_string());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing calibration"));
}

#[test]
fn cli_reads_document_from_stdin_as_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    let doc = serde_json::json!({
        "observations": observations(),
        "calibration": calibration(),
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"ph_free\""))
        .stdout(predicate::str::contains("\"ph_total\""));
}

#[test]
fn cli_detailed_json_includes_intermediates() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.arg("--json")
        .arg("--detailed")
        .arg("--observations-json")
        .arg(observations().to_string())
        .arg("--calibration-json")
        .arg(calibration().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"khso4_tps\""))
        .stdout(predicate::str::contains("\"ionic_strength\""));
}

#[test]
fn cli_reports_shape_mismatch() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    let mut obs = observations();
    obs["salinity"] = serde_json::json!([30.0]);
    cmd.arg("--observations-json")
        .arg(obs.to_string())
        .arg("--calibration-json")
        .arg(calibration().to_string());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Input length mismatch"));
}

#[test]
fn cli_reports_invalid_json_for_observations_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.arg("--observations-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --observations-json"));
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

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isfet_ph_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}
