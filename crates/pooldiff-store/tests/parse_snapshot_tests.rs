// Integration tests for snapshot parsing against a real directory

use pooldiff_core::ExErrorKind;
use pooldiff_store::config::PoolDiffConfig;
use pooldiff_core::logging_facility::test_capture::init_test_capture;
use pooldiff_core_types::schema::{EVENT_END, FIELD_PATH, FIELD_RECORD_COUNT};
use pooldiff_store::parse::{parse_all, parse_snapshot_file, BatchProgress};
use std::fs;
use tempfile::TempDir;

const SNAPSHOT_ONE: &str = "\
ltm pool /Common/web_pool {
    active-member-cnt 2
    status.availability-state available
    status.enabled-state enabled
}
ltm pool /Common/api_pool {
    active-member-cnt 0
    status.availability-state offline
}
";

const SNAPSHOT_TWO: &str = "\
ltm pool /Common/web_pool {
    status.availability-state available
}
ltm pool /Common/api_pool {
    status.availability-state available
}
ltm pool /Common/new_pool {
    active-member-cnt 1
}
";

#[test]
fn test_parse_writes_one_line_per_pool() {
    // Given: a raw snapshot on disk
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pool_snapshot_1.txt");
    let output = dir.path().join("pool_snapshot_1_parsed.txt");
    fs::write(&input, SNAPSHOT_ONE).unwrap();

    // When: it is parsed
    let outcome = parse_snapshot_file(&input, &output).unwrap();

    // Then: the normalized body holds both pools in source order
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "/Common/web_pool available\n/Common/api_pool offline\n"
    );
    assert_eq!(outcome.record_count, 2);
    assert_eq!(outcome.missing_status_count, 0);
    assert_eq!(outcome.digest.len(), 64);
}

#[test]
fn test_reparse_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pool_snapshot_2.txt");
    let output = dir.path().join("out").join("normalized.txt");
    fs::write(&input, SNAPSHOT_TWO).unwrap();

    let first = parse_snapshot_file(&input, &output).unwrap();
    let first_bytes = fs::read(&output).unwrap();
    let second = parse_snapshot_file(&input, &output).unwrap();
    let second_bytes = fs::read(&output).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.digest, second.digest);
    assert_eq!(second.missing_status_count, 1);
}

#[test]
fn test_missing_input_is_surfaced() {
    let dir = TempDir::new().unwrap();
    let err = parse_snapshot_file(
        &dir.path().join("pool_snapshot_404.txt"),
        &dir.path().join("pool_snapshot_404_parsed.txt"),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::MissingInput);
    assert!(!dir.path().join("pool_snapshot_404_parsed.txt").exists());
}

#[test]
fn test_parse_all_skips_unreadable_and_continues() {
    // Given: two valid snapshots and one that is not valid UTF-8
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();
    fs::write(dir.path().join("pool_snapshot_2.txt"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("pool_snapshot_3.txt"), SNAPSHOT_TWO).unwrap();
    fs::write(dir.path().join("readme.md"), "not a snapshot").unwrap();

    // When: the directory is batch-parsed
    let config = PoolDiffConfig::for_dir(dir.path());
    let report = parse_all(&config, |_| {}).unwrap();

    // Then: the good files are parsed and the bad one is reported
    assert_eq!(report.parsed.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("pool_snapshot_2.txt"));
    assert_eq!(report.failures[0].1.kind(), ExErrorKind::MissingInput);
    assert!(dir.path().join("pool_snapshot_1_parsed.txt").exists());
    assert!(dir.path().join("pool_snapshot_3_parsed.txt").exists());
}

#[test]
fn test_parse_all_ignores_previous_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();

    let config = PoolDiffConfig::for_dir(dir.path());
    parse_all(&config, |_| {}).unwrap();
    let second = parse_all(&config, |_| {}).unwrap();

    assert_eq!(second.parsed.len(), 1);
    assert!(!dir.path().join("pool_snapshot_1_parsed_parsed.txt").exists());
}

#[test]
fn test_parse_all_honours_output_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();

    let config = PoolDiffConfig {
        output_dir: Some(dir.path().join("parsed")),
        ..PoolDiffConfig::for_dir(dir.path())
    };
    let report = parse_all(&config, |_| {}).unwrap();

    assert_eq!(
        report.parsed[0].output,
        dir.path().join("parsed").join("pool_snapshot_1_parsed.txt")
    );
}

#[test]
fn test_parse_all_missing_dir() {
    let dir = TempDir::new().unwrap();
    let config = PoolDiffConfig::for_dir(dir.path().join("absent"));
    let err = parse_all(&config, |_| {}).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MissingInput);
}

#[test]
fn test_parse_all_reports_progress_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pool_snapshot_1.txt"), SNAPSHOT_ONE).unwrap();
    fs::write(dir.path().join("pool_snapshot_2.txt"), [0xff, 0xfe, 0x00]).unwrap();

    let mut seen = Vec::new();
    let config = PoolDiffConfig::for_dir(dir.path());
    parse_all(&config, |progress| {
        seen.push(match progress {
            BatchProgress::Started(path) => format!("start {}", file_name(path)),
            BatchProgress::Parsed(outcome) => {
                format!("parsed {} {}", file_name(&outcome.input), outcome.record_count)
            }
            BatchProgress::Skipped(path, _) => format!("skipped {}", file_name(path)),
        })
    })
    .unwrap();

    assert_eq!(
        seen,
        vec![
            "start pool_snapshot_1.txt",
            "parsed pool_snapshot_1.txt 2",
            "start pool_snapshot_2.txt",
            "skipped pool_snapshot_2.txt",
        ]
    );
}

#[test]
fn test_parse_logs_path_and_record_count() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pool_snapshot_logged.txt");
    fs::write(&input, SNAPSHOT_ONE).unwrap();

    parse_snapshot_file(&input, &dir.path().join("out.txt")).unwrap();

    let logged_path = input.display().to_string();
    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("parse_snapshot_file")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_PATH) == Some(&logged_path)
            && e.fields.get(FIELD_RECORD_COUNT).map(String::as_str) == Some("2")
    });
    assert_eq!(found, 1);
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}
