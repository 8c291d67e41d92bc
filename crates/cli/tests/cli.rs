//! End-to-end tests for the `atmospeed` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn atmospeed() -> Command {
    Command::cargo_bin("atmospeed").expect("binary should build")
}

#[test]
fn test_convert_cas_to_all_targets() {
    atmospeed()
        .args([
            "convert", "--hp", "26788", "--temp", "0", "--speed", "287.3", "--from", "cas",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"276\.[23] kts EAS").unwrap())
        .stdout(predicate::str::is_match(r"42(5\.9|6\.0) kts TAS").unwrap())
        .stdout(predicate::str::contains("0.7130 Mach"));
}

#[test]
fn test_convert_single_target_has_no_label() {
    atmospeed()
        .args([
            "convert", "--hp", "21755", "--temp", "0", "--speed", "0.74", "--from", "mach",
            "--to", "cas",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"331\.[56] kts").unwrap())
        .stdout(predicate::str::contains("CAS").not());
}

#[test]
fn test_convert_atmo_lookup() {
    atmospeed()
        .args(["convert", "--hp", "15000", "--temp", "0", "--atmo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delta  = 0.5643"))
        .stdout(predicate::str::contains("sigma  = 0.6292"))
        .stdout(predicate::str::contains("ISA"));
}

#[test]
fn test_convert_requires_speed_and_from() {
    atmospeed()
        .args(["convert", "--hp", "10000", "--temp", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--speed and --from are required"));
}

#[test]
fn test_convert_rejects_altitude_above_stratopause() {
    atmospeed()
        .args(["convert", "--hp", "70000", "--temp", "0", "--atmo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stratopause"));
}

#[test]
fn test_convert_rejects_unknown_unit() {
    atmospeed()
        .args([
            "convert", "--hp", "10000", "--temp", "0", "--alt-unit", "furlongs", "--atmo",
        ])
        .assert()
        .failure();
}

#[test]
fn test_pressure_alt() {
    atmospeed()
        .args([
            "pressure-alt", "--elevation", "1000", "--altimeter", "29.40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ft"))
        .stdout(predicate::str::is_match(r"^148[0-9]\.\d ft").unwrap());
}

#[test]
fn test_batch_appends_result_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "hp,temperature,speed_value,speed_type\n\
         26788,0,287.3,cas\n\
         21755,0,0.74,mach\n",
    )
    .expect("write input");

    atmospeed()
        .args(["batch", "--to", "tas"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 rows"));

    let out = fs::read_to_string(&output).expect("read output");
    let mut lines = out.lines();
    assert_eq!(
        lines.next().unwrap(),
        "hp,temperature,speed_value,speed_type,tas_result"
    );
    let first = lines.next().unwrap();
    assert!(
        first.starts_with("26788,0,287.3,cas,"),
        "unexpected row: {first}"
    );
    let tas: f64 = first.rsplit(',').next().unwrap().parse().expect("numeric result");
    assert!((tas - 426.0).abs() < 0.1, "unexpected TAS: {tas}");
}

#[test]
fn test_batch_honors_optional_unit_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    // Same point as 26788 ft std day, expressed in meters and Fahrenheit OAT
    fs::write(
        &input,
        "hp,temperature,speed_value,speed_type,alt_unit,temp_unit,speed_unit,temp_is_delta_isa\n\
         8165.0,0,287.3,cas,m,F,kts,true\n",
    )
    .expect("write input");

    atmospeed()
        .args(["batch", "--to", "mach"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let out = fs::read_to_string(&output).expect("read output");
    assert!(out.contains("0.713"), "unexpected output: {out}");
}

#[test]
fn test_batch_reports_bad_row_with_line_number() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "hp,temperature,speed_value,speed_type\n\
         10000,0,250,warp\n",
    )
    .expect("write input");

    atmospeed()
        .args(["batch", "--to", "tas"])
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_batch_missing_required_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "hp,temperature\n10000,0\n").expect("write input");

    atmospeed()
        .args(["batch", "--to", "tas"])
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("speed_value"));
}
