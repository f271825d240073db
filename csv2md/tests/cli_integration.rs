//! Integration tests for csv2md CLI

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn run_csv2md(args: &[&str], stdin: &str) -> (String, String, Option<i32>) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_csv2md"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // the process may exit before reading stdin (--help, usage errors)
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait on csv2md");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

const SAMPLE: &str = "S2,P2,Val\n2,1,x\n1,3,y\n1,1,z\n";

#[test]
fn test_cli_help() {
    let (stdout, _, code) = run_csv2md(&["--help"], "");

    assert_eq!(code, Some(0));
    assert!(stdout.contains("--delimiter"));
    assert!(stdout.contains("--no-sort"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, code) = run_csv2md(&["--version"], "");

    assert_eq!(code, Some(0));
    assert!(stdout.contains("csv2md"));
}

#[test]
fn test_stdin_sorted() {
    let (stdout, stderr, code) = run_csv2md(&[], SAMPLE);

    assert_eq!(code, Some(0));
    assert_eq!(
        stdout,
        "| S2 | P2 | Val |\n\
         | -- | -- | --- |\n\
         | 1  | 1  | z   |\n\
         | 1  | 3  | y   |\n\
         | 2  | 1  | x   |\n"
    );
    assert!(stderr.is_empty());
}

#[test]
fn test_no_sort() {
    let (stdout, _, code) = run_csv2md(&["--no-sort"], SAMPLE);

    assert_eq!(code, Some(0));
    let vals: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(
        vals,
        vec!["| 2  | 1  | x   |", "| 1  | 3  | y   |", "| 1  | 1  | z   |"]
    );
}

#[test]
fn test_missing_sort_column_warns() {
    let (stdout, stderr, code) = run_csv2md(&[], "S2,Val\n2,b\n1,a\n");

    assert_eq!(code, Some(0));
    assert!(stderr.contains("Could not sort"));
    assert!(stderr.contains("P2"));
    let body: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(body, vec!["| 2  | b   |", "| 1  | a   |"]);
}

#[test]
fn test_non_integer_sort_column_warns() {
    let (stdout, stderr, code) = run_csv2md(&[], "S2,P2\n2,x\n1,y\n");

    assert_eq!(code, Some(0));
    assert!(stderr.contains("Could not sort"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_trailing_whitespace_line_ignored() {
    let (stdout, _, code) = run_csv2md(&[], "S2,P2\n2,1\n1,1\n   \n");

    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().count(), 4);
    assert_eq!(stdout.lines().nth(2), Some("| 1  | 1  |"));
}

#[test]
fn test_header_and_whitespace_line_is_empty() {
    let (stdout, stderr, code) = run_csv2md(&[], "S2,P2\n   \n");

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert_eq!(stderr.trim(), "No data found.");
}

#[test]
fn test_empty_input_fails() {
    let (stdout, stderr, code) = run_csv2md(&[], "S2,P2,Val\n");

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert_eq!(stderr.trim(), "No data found.");
}

#[test]
fn test_ragged_row_fails() {
    let (stdout, stderr, code) = run_csv2md(&[], "a,b\n1,2\n3\n");

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("line 3"));
}

#[test]
fn test_tab_delimiter() {
    let (stdout, _, code) = run_csv2md(&["-d", "\t"], "S2\tP2\n5\t1\n4\t1\n");

    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().nth(2), Some("| 4  | 1  |"));
}

#[test]
fn test_invalid_delimiter_is_usage_error() {
    let (stdout, _, code) = run_csv2md(&["-d", ";;"], SAMPLE);

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
}

#[test]
fn test_file_source_and_sink() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in.csv");
    let out = dir.path().join("out.md");
    std::fs::write(&source, "name,score\nann,1.23456\nbob,2\n").unwrap();

    let (stdout, _, code) = run_csv2md(
        &[source.to_str().unwrap(), out.to_str().unwrap(), "--no-sort"],
        "",
    );

    assert_eq!(code, Some(0));
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "| name | score |\n| ---- | ----- |\n| ann  | 1.235 |\n| bob  | 2.0   |\n"
    );
}

#[test]
fn test_empty_input_writes_no_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in.csv");
    let out = dir.path().join("out.md");
    std::fs::write(&source, "a,b\n").unwrap();

    let args = [source.to_str().unwrap(), out.to_str().unwrap()];
    let (_, _, code) = run_csv2md(&args, "");

    assert_eq!(code, Some(1));
    assert!(!out.exists());
}

#[test]
fn test_missing_source_file() {
    let (_, stderr, code) = run_csv2md(&["/nonexistent/path.csv"], "");

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_json_output() {
    let (stdout, _, code) = run_csv2md(&["--format", "json"], SAMPLE);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("\"headers\""));
    assert!(stdout.contains("\"rows\""));
}

#[test]
fn test_output_is_deterministic() {
    let (first, _, _) = run_csv2md(&[], SAMPLE);
    let (second, _, _) = run_csv2md(&[], SAMPLE);

    assert_eq!(first, second);
}
