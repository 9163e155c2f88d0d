//! Tests for reading batch and config files from disk.

use ntoe::{HaltPolicy, Scenario};
use ntoe_cli::{OutputFormat, RunConfig, read_batch, read_batch_from, run};
use std::io::Write;
use tempfile::NamedTempFile;

const REFERENCE_BATCH: &str = "\
5
3
18
3
1 1 0
2 3 3
3 1 3
1 0 2
2 0 0
3 2 2
1 4 1
2 4 2
3 3 1
1 1 2
2 4 3
3 2 1
1 4 4
2 1 1
3 0 4
1 0 1
2 2 3
3 4 0
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_reference_batch_matches_builtin_scenario() {
    let file = write_temp(REFERENCE_BATCH);
    let scenario = read_batch(file.path()).expect("valid batch");
    assert_eq!(scenario, Scenario::reference());
}

#[test]
fn test_reference_batch_report() {
    let file = write_temp(REFERENCE_BATCH);
    let scenario = read_batch(file.path()).expect("valid batch");
    let report = run(&scenario, HaltPolicy::AnyTerminal);

    let mut expected = "0\n".repeat(17);
    expected.push_str("3\n");
    expected.push_str("2 1 1 0 3\n1 2 1 3 0\n0 3 3 2 0\n0 3 0 2 0\n3 1 2 2 1\n");
    assert_eq!(report.render(OutputFormat::Text, true).unwrap(), expected);
}

#[test]
fn test_read_from_reader() {
    let scenario = read_batch_from(REFERENCE_BATCH.as_bytes()).expect("valid batch");
    assert_eq!(scenario.moves.len(), 18);
}

#[test]
fn test_missing_batch_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_batch(dir.path().join("absent.txt")).unwrap_err();
    assert!(err.message.starts_with("Failed to read batch file"));
}

#[test]
fn test_halt_policy_from_config_file() {
    let config_file = write_temp("halt_policy = \"win-or-draw\"\nformat = \"json\"\n");
    let config = RunConfig::from_file(config_file.path()).expect("valid config");
    assert_eq!(config.halt_policy(), &HaltPolicy::WinOrDraw);

    // Player 1 moves twice in a row; the rejected attempt hands the turn back to 1.
    let batch = write_temp("3\n2\n3\n3\n1 0 0\n1 1 1\n1 2 2\n");
    let scenario = read_batch(batch.path()).expect("valid batch");

    let lenient = run(&scenario, *config.halt_policy());
    assert_eq!(lenient.statuses, vec![0, -1, 0]);

    let strict = run(&scenario, HaltPolicy::AnyTerminal);
    assert_eq!(strict.statuses, vec![0, -1]);

    assert_eq!(
        lenient.render(*config.format(), false).unwrap(),
        "{\"statuses\":[0,-1,0]}\n"
    );
}

#[test]
fn test_malformed_config_file() {
    let config_file = write_temp("print_board = \"yes please\"\n");
    let err = RunConfig::from_file(config_file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
