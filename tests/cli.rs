use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn bigdet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bigdet"))
        .args(args)
        .env_remove("BIGDET_PRECISION")
        .env_remove("BIGDET_DIGITS")
        .env_remove("BIGDET_DELIMITER")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch bigdet")
}

fn matrix_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── det ──────────────────────────────────────────────────────────────

#[test]
fn det_prints_report() {
    let file = matrix_file("0,1\n1,0\n");
    let out = bigdet(&["det", file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.starts_with("Reading matrix from "), "{text}");
    assert!(text.contains("Matrix size: 2 x 2\n"));
    assert!(text.contains("Sign(det)   = -1\n"));
    assert!(text.contains("log|det|    = 0\n"), "{text}");
    assert!(text.contains("approx determinant = -1.000000000000000e+00\n"));
}

#[test]
fn singular_matrix_succeeds_with_zero() {
    let file = matrix_file("1,2\n2,4\n");
    let out = bigdet(&["det", file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Sign(det)   = 0\n"), "{text}");
    assert!(text.contains("approx determinant = 0.000000000000000e+00\n"));
    // Singularity is a normal result; nothing is logged at the default level.
    assert!(stderr(&out).is_empty(), "{}", stderr(&out));
}

#[test]
fn non_square_file_fails() {
    let file = matrix_file("1,2,3\n4,5,6\n");
    let out = bigdet(&["det", file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("error: "), "{err}");
    assert!(err.contains("matrix is not square: 2 x 3"), "{err}");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let out = bigdet(&["det", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("failed to read matrix from"));
}

#[test]
fn zero_precision_is_a_usage_error() {
    let file = matrix_file("1,0\n0,1\n");
    let out = bigdet(&["det", "-p", "0", file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(
        stderr(&out).contains("precision must be a positive number of digits"),
        "{}",
        stderr(&out)
    );
    assert!(stdout(&out).is_empty());
}

#[test]
fn digits_flag_controls_display() {
    let file = matrix_file("3,0\n0,4\n");
    let out = bigdet(&["det", "-d", "3", file.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert!(stdout(&out).contains("approx determinant = 1.200e+01\n"));
}

// ── random ───────────────────────────────────────────────────────────

#[test]
fn random_rejects_non_positive_n() {
    for n in ["0", "-4"] {
        let out = bigdet(&["random", n]);
        assert_eq!(out.status.code(), Some(1), "n = {n}");
        assert_eq!(
            stderr(&out).trim_end(),
            format!("error: N must be a positive integer, got {n}")
        );
        assert!(stdout(&out).is_empty());
    }
}

#[test]
fn random_output_feeds_det() {
    let out = bigdet(&["random", "5", "--seed", "17"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    let csv = stdout(&out);
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.lines().all(|l| l.split(',').count() == 5));

    // same seed, same matrix
    assert_eq!(stdout(&bigdet(&["random", "5", "--seed", "17"])), csv);

    let file = matrix_file(&csv);
    let det = bigdet(&["det", file.path().to_str().unwrap()]);
    assert_eq!(det.status.code(), Some(0), "{}", stderr(&det));
    assert!(stdout(&det).contains("Matrix size: 5 x 5\n"));
}
