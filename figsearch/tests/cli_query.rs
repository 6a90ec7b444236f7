//! CLI tests for the `figsearch` binary.
//!
//! Spawns the binary against temporary bitmap files and checks stdout,
//! stderr, and exit codes for each command.

use std::process::{Command, Output};

use figsearch::exit_codes;
use figsearch::format::OutputFormat;
use figsearch::io::config::{FigsearchConfig, write_config};
use figsearch::test_support::InputFile;

fn figsearch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figsearch"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run figsearch")
}

fn run_on(command: &str, contents: &str) -> Output {
    let input = InputFile::new(contents).expect("input");
    let path = input.path().to_str().expect("utf-8 path");
    figsearch(&[command, path])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn square_of_full_two_by_two() {
    let output = run_on("square", "2 2\n1 1\n1 1\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "0 0 1 1\n");
}

#[test]
fn hline_prefers_first_equal_run() {
    let output = run_on("hline", "1 3\n1 0 1\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "0 0 0 0\n");
}

#[test]
fn vline_reports_start_and_end() {
    let output = run_on("vline", "3 3\n0 1 0\n1 1 0\n0 1 1\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "0 1 2 1\n");
}

#[test]
fn frame_accepts_hollow_square() {
    let bitmap = "3 3\n1 1 1\n1 0 1\n1 1 1\n";
    assert_eq!(stdout(&run_on("frame", bitmap)), "0 0 2 2\n");
    assert_eq!(stdout(&run_on("square", bitmap)), "0 0 0 0\n");
}

#[test]
fn single_set_cell_for_every_search() {
    for command in ["hline", "vline", "square", "frame"] {
        let output = run_on(command, "1 1\n1\n");
        assert_eq!(output.status.code(), Some(exit_codes::OK), "{command}");
        assert_eq!(stdout(&output), "0 0 0 0\n", "{command}");
    }
}

#[test]
fn blank_bitmap_is_not_found_but_valid() {
    for contents in ["2 2\n0 0\n0 0\n", "1 1\n0\n"] {
        for command in ["hline", "vline", "square", "frame"] {
            let output = run_on(command, contents);
            assert_eq!(output.status.code(), Some(exit_codes::OK), "{command}");
            assert_eq!(stdout(&output), "Not found\n", "{command}");
        }
        let output = run_on("test", contents);
        assert_eq!(output.status.code(), Some(exit_codes::OK));
        assert_eq!(stdout(&output), "Valid\n");
    }
}

#[test]
fn test_rejects_zero_rows() {
    let output = run_on("test", "0 2\n");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "Invalid\n");
}

#[test]
fn invalid_cell_is_invalid_for_every_command() {
    for command in ["test", "hline", "vline", "square", "frame"] {
        let output = run_on(command, "2 2\n1 1\n1 2\n");
        assert_eq!(output.status.code(), Some(exit_codes::INVALID), "{command}");
        assert_eq!(stdout(&output), "", "{command}");
        assert_eq!(stderr(&output), "Invalid\n", "{command}");
    }
}

#[test]
fn trailing_and_missing_cells_are_invalid() {
    for contents in ["1 2\n1 1 1\n", "2 2\n1 1\n1\n", "1 1\n1\nx\n"] {
        let output = run_on("test", contents);
        assert_eq!(output.status.code(), Some(exit_codes::INVALID), "{contents:?}");
    }
}

#[test]
fn missing_file_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("missing.txt");
    let output = figsearch(&["square", missing.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(stderr(&output), "Invalid\n");
}

#[test]
fn help_exits_ok() {
    let cases: [&[&str]; 2] = [&["--help"], &["help"]];
    for args in cases {
        let output = figsearch(args);
        assert_eq!(output.status.code(), Some(exit_codes::OK));
        assert!(stdout(&output).contains("hline"));
    }
}

#[test]
fn bad_arguments_are_usage_errors() {
    let cases: [&[&str]; 4] = [&[], &["square"], &["circle", "bitmap.txt"], &["test", "a", "b"]];
    for args in cases {
        let output = figsearch(args);
        assert_eq!(output.status.code(), Some(exit_codes::USAGE), "{args:?}");
        assert!(!stderr(&output).is_empty(), "{args:?}");
    }
}

#[test]
fn json_output() {
    let input = InputFile::new("2 3\n0 1 1\n0 1 1\n").expect("input");
    let path = input.path().to_str().expect("utf-8 path");
    let output = figsearch(&["square", path, "--format", "json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "{\"mode\":\"square\",\"found\":true,\"start\":{\"row\":0,\"col\":1},\"end\":{\"row\":1,\"col\":2},\"size\":2}\n"
    );
}

#[test]
fn config_sets_format_and_cell_limit() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("figsearch.toml");
    write_config(
        &config_path,
        &FigsearchConfig {
            format: OutputFormat::Json,
            max_cells: 4,
        },
    )
    .expect("write config");
    let config = config_path.to_str().expect("utf-8 path");

    let small = InputFile::new("1 2\n0 0\n").expect("input");
    let output = figsearch(&[
        "--config",
        config,
        "hline",
        small.path().to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "{\"mode\":\"hline\",\"found\":false}\n");

    let output = figsearch(&[
        "--config",
        config,
        "--format",
        "text",
        "hline",
        small.path().to_str().expect("utf-8 path"),
    ]);
    assert_eq!(stdout(&output), "Not found\n");

    let large = InputFile::new("3 3\n111\n111\n111\n").expect("input");
    let output = figsearch(&[
        "--config",
        config,
        "test",
        large.path().to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(stderr(&output), "Invalid\n");
}

#[test]
fn unreadable_config_is_reported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("figsearch.toml");
    std::fs::write(&config_path, "max_cells = \"many\"\n").expect("write config");
    let input = InputFile::new("1 1\n1\n").expect("input");
    let output = figsearch(&[
        "--config",
        config_path.to_str().expect("utf-8 path"),
        "test",
        input.path().to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("parse"));
}

#[test]
fn missing_config_file_is_reported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("typo.toml");
    let input = InputFile::new("1 1\n1\n").expect("input");
    let output = figsearch(&[
        "--config",
        config_path.to_str().expect("utf-8 path"),
        "square",
        input.path().to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("typo.toml"));
}
