use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

// Drives the compiled binary. Every run points --config into a temp dir so
// the user's stored defaults never leak into assertions.

fn ticklabel(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ticklabel").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.json"));
    cmd
}

#[test]
fn range_prints_one_label_per_line() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["range", "0", "0.25"])
        .assert()
        .success()
        .stdout("0\n0.063\n0.13\n0.19\n0.25\n");
}

#[test]
fn range_log_scale() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["range", "0.001", "0.25", "-n", "5", "--log"])
        .assert()
        .success()
        .stdout("0.001\n0.004\n0.016\n0.063\n0.25\n");
}

#[test]
fn range_scientific() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["range", "0", "0.25", "--notation", "scientific"])
        .assert()
        .success()
        .stdout("0.00e+0\n6.25e-2\n1.25e-1\n1.88e-1\n2.50e-1\n");
}

#[test]
fn range_negative_bounds_aligned() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["range", "-10", "10", "-n", "3", "--align"])
        .assert()
        .success()
        .stdout("-10\n  0\n 10\n");
}

#[test]
fn log_range_through_zero_fails() {
    let dir = tempdir().unwrap();
    let output = ticklabel(&dir)
        .args(["range", "0", "2", "--log"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("positive lower bound"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn values_from_arguments() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["values", "-1", "0", "1"])
        .assert()
        .success()
        .stdout("-1\n0\n1\n");
}

#[test]
fn values_from_stdin_column() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["values", "--input", "-", "--column", "temp", "-e"])
        .write_stdin("time,temp\n0,123.456\n1,234.567\n")
        .assert()
        .success()
        .stdout("1.23e+2\n2.35e+2\n");
}

#[test]
fn values_as_csv() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["values", "0.01", "0.02", "--format", "csv"])
        .assert()
        .success()
        .stdout("value,label\n0.01,0.01\n0.02,0.02\n");
}

#[test]
fn values_as_json() {
    let dir = tempdir().unwrap();
    let output = ticklabel(&dir)
        .args(["values", "0.5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["text"], "0.5");
}

#[test]
fn saved_defaults_apply_to_later_runs() {
    let dir = tempdir().unwrap();
    ticklabel(&dir)
        .args(["range", "0", "1", "-n", "3", "--exp", "--save-defaults"])
        .assert()
        .success()
        .stdout("0.00e+0\n5.00e-1\n1.00e+0\n");

    ticklabel(&dir)
        .args(["range", "0", "100"])
        .assert()
        .success()
        .stdout("0.00e+0\n5.00e+1\n1.00e+2\n");

    let output = ticklabel(&dir).arg("config").output().unwrap();
    let cfg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["tick_count"], 3);
    assert_eq!(cfg["notation"], "scientific");
}
