//! Tests for loading match configuration from disk.

use std::io::Write;
use strictly_hanoi::{MatchConfig, PegId, PegLayout, Position, PuzzleController};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
disk_sizes = [4, 2, 3, 1]
peg_count = 4
source_peg = 1
winning_peg = 3
time_limit_secs = 45.5
"#
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).expect("config loads");
    assert_eq!(config.disk_sizes(), &vec![4, 2, 3, 1]);
    assert_eq!(*config.source_peg(), PegId(1));

    let controller = PuzzleController::new(config).expect("valid match");
    assert_eq!(controller.board().disk_count(PegId(1)), 4);
    assert_eq!(controller.clock().remaining().as_millis(), 45_500);
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
    assert!(err.file.ends_with(".rs"));
    assert!(err.line > 0);
}

#[test]
fn test_malformed_toml_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "disk_sizes = \"three\"").unwrap();
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"), "{}", err.message);
}

#[test]
fn test_duplicate_sizes_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "disk_sizes = [1, 2, 2]").unwrap();
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("appears more than once"), "{}", err.message);
}

#[test]
fn test_written_config_loads_back() {
    let config = MatchConfig::new(vec![1, 2], 3, PegId(2), PegId(0), 30.0).with_layout(
        PegLayout::new(
            vec![
                Position::new(-4.0, 0.0),
                Position::new(0.0, 0.0),
                Position::new(4.0, 0.0),
            ],
            1.0,
        ),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.toml");
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();

    let loaded = MatchConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    let controller = PuzzleController::new(loaded).unwrap();
    assert_eq!(
        controller.layout().anchor(PegId(0)),
        Some(Position::new(-4.0, 0.0))
    );
}
