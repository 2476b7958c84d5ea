//! CLI integration tests
//!
//! Drive the built `pooldiff` binary against snapshot directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SNAPSHOT_ONE: &str = "\
ltm pool /Common/pool1 {
    status.availability-state available
}
ltm pool /Common/pool2 {
    status.availability-state offline
}
";

const SNAPSHOT_TWO: &str = "\
ltm pool /Common/pool1 {
    status.availability-state available
}
ltm pool /Common/pool2 {
    status.availability-state available
}
";

fn pooldiff(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pooldiff"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn setup_snapshots() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();
    fs::write(temp_dir.path().join("pool_snapshot_2.txt"), SNAPSHOT_TWO).unwrap();
    temp_dir
}

#[test]
fn test_cli_parse_single_file() {
    let temp_dir = setup_snapshots();

    let output = pooldiff(temp_dir.path(), &["parse", "pool_snapshot_1.txt"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found 2 pools in pool_snapshot_1.txt"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pool_snapshot_1_parsed.txt")).unwrap(),
        "/Common/pool1 available\n/Common/pool2 offline\n"
    );
}

#[test]
fn test_cli_parse_with_explicit_output() {
    let temp_dir = setup_snapshots();

    let output = pooldiff(
        temp_dir.path(),
        &["parse", "pool_snapshot_2.txt", "--output", "out/two.txt"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(temp_dir.path().join("out").join("two.txt").exists());
}

#[test]
fn test_cli_parse_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = pooldiff(temp_dir.path(), &["parse", "pool_snapshot_404.txt"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_MISSING_INPUT"));
}

#[test]
fn test_cli_parse_all_then_compare_latest() {
    let temp_dir = setup_snapshots();

    let parse = pooldiff(temp_dir.path(), &["parse-all", "--dir", "."]);
    assert!(parse.status.success(), "stderr: {}", stderr(&parse));
    assert!(stdout(&parse).contains("Parsed 2 snapshot(s), skipped 0"));

    let compare = pooldiff(temp_dir.path(), &["compare", "--dir", "."]);
    assert!(compare.status.success(), "stderr: {}", stderr(&compare));

    let text = stdout(&compare);
    assert!(text.contains(
        "Differences between pool_snapshot_1_parsed.txt and pool_snapshot_2_parsed.txt:"
    ));
    assert!(text.contains("- /Common/pool2 offline\n+ /Common/pool2 available\n"));
    assert!(!text.contains("/Common/pool1"));
}

#[test]
fn test_cli_compare_by_number_with_summary() {
    let temp_dir = setup_snapshots();
    pooldiff(temp_dir.path(), &["parse-all"]);

    let output = pooldiff(
        temp_dir.path(),
        &["compare", "--first", "2", "--second", "1", "--summary"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("- /Common/pool2 available\n+ /Common/pool2 offline\n"));
    assert!(text.contains("status.availability-state: available -> offline"));
}

#[test]
fn test_cli_compare_needs_two_snapshots() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();
    pooldiff(temp_dir.path(), &["parse-all"]);

    let output = pooldiff(temp_dir.path(), &["compare"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Need at least 2 parsed snapshots"));
}

#[test]
fn test_cli_diff_identical_files() {
    let temp_dir = setup_snapshots();
    pooldiff(temp_dir.path(), &["parse-all"]);
    fs::copy(
        temp_dir.path().join("pool_snapshot_1_parsed.txt"),
        temp_dir.path().join("copy.txt"),
    )
    .unwrap();

    let output = pooldiff(
        temp_dir.path(),
        &["diff", "pool_snapshot_1_parsed.txt", "copy.txt"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "No differences found between pool_snapshot_1_parsed.txt and copy.txt\n"
    );
}

#[test]
fn test_cli_diff_ignores_config_in_working_directory() {
    let snapshots = setup_snapshots();
    pooldiff(snapshots.path(), &["parse-all"]);

    let elsewhere = TempDir::new().unwrap();
    fs::write(elsewhere.path().join("pooldiff.toml"), "unrelated_key = 1\n").unwrap();

    let a = snapshots.path().join("pool_snapshot_1_parsed.txt");
    let b = snapshots.path().join("pool_snapshot_2_parsed.txt");
    let output = pooldiff(
        elsewhere.path(),
        &["diff", a.to_str().unwrap(), b.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("- /Common/pool2 offline\n+ /Common/pool2 available\n"));
}

#[test]
fn test_cli_diff_reads_explicit_config() {
    let temp_dir = setup_snapshots();
    pooldiff(temp_dir.path(), &["parse-all"]);
    fs::write(temp_dir.path().join("diff.toml"), "show_unchanged = true\n").unwrap();

    let output = pooldiff(
        temp_dir.path(),
        &[
            "diff",
            "pool_snapshot_1_parsed.txt",
            "pool_snapshot_2_parsed.txt",
            "--config",
            "diff.toml",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  /Common/pool1 available\n"));
}

#[test]
fn test_cli_list_numbers_parsed_snapshots() {
    let temp_dir = setup_snapshots();
    pooldiff(temp_dir.path(), &["parse-all"]);

    let output = pooldiff(temp_dir.path(), &["list", "--sort", "name"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("1. pool_snapshot_1_parsed.txt"));
    assert!(text.contains("2. pool_snapshot_2_parsed.txt"));
}

#[test]
fn test_cli_config_output_dir() {
    let temp_dir = setup_snapshots();
    fs::write(
        temp_dir.path().join("pooldiff.toml"),
        "output_dir = \"parsed\"\nshow_unchanged = true\n",
    )
    .unwrap();

    let parse = pooldiff(temp_dir.path(), &["parse-all"]);
    assert!(parse.status.success(), "stderr: {}", stderr(&parse));
    assert!(temp_dir
        .path()
        .join("parsed")
        .join("pool_snapshot_2_parsed.txt")
        .exists());

    let compare = pooldiff(temp_dir.path(), &["compare"]);
    assert!(compare.status.success(), "stderr: {}", stderr(&compare));
    assert!(stdout(&compare).contains("  /Common/pool1 available\n"));
}
