//! End-to-end tests driving the CLI command layer against a temp snapshot.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use minitrack::cli::{self, CliError};
use minitrack::store;
use minitrack_core::{LedgerError, Stage};
use std::path::PathBuf;

fn temp_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("unit.json")
}

#[test]
fn init_move_complete_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    cli::cmd_init(&path, false, 5, Stage::Unbuilt, false).unwrap();
    cli::cmd_move(&path, false, Stage::Unbuilt, Stage::Assembled, 3).unwrap();
    cli::cmd_complete(&path, false).unwrap();

    let snapshot = store::load_snapshot(&path).unwrap();
    // complete drained the earliest non-empty stage (unbuilt: 2 -> 1)
    assert_eq!(snapshot.stage_counts.unbuilt, 1);
    assert_eq!(snapshot.stage_counts.assembled, 3);
    assert_eq!(snapshot.stage_counts.complete, 1);
    assert_eq!(snapshot.status, Stage::Unbuilt);
    assert_eq!(snapshot.models_completed, 1);
    assert_eq!(snapshot.stage_counts.total(), 5);
}

#[test]
fn uncomplete_returns_model_to_painted() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    cli::cmd_init(&path, false, 2, Stage::Painted, false).unwrap();
    cli::cmd_complete(&path, false).unwrap();
    cli::cmd_uncomplete(&path, false).unwrap();

    let snapshot = store::load_snapshot(&path).unwrap();
    assert_eq!(snapshot.stage_counts.painted, 2);
    assert_eq!(snapshot.models_completed, 0);
}

#[test]
fn overdrawing_move_fails_and_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    cli::cmd_init(&path, false, 2, Stage::Unbuilt, false).unwrap();
    let before = store::load_snapshot(&path).unwrap();

    let err = cli::cmd_move(&path, false, Stage::Unbuilt, Stage::Assembled, 5).unwrap_err();
    match err {
        CliError::Ledger(LedgerError::InsufficientStage {
            stage,
            available,
            requested,
        }) => {
            assert_eq!(stage, Stage::Unbuilt);
            assert_eq!(available, 2);
            assert_eq!(requested, 5);
        }
        other => panic!("expected InsufficientStage, got {other:?}"),
    }

    assert_eq!(store::load_snapshot(&path).unwrap(), before);
}

#[test]
fn complete_on_fully_complete_unit_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    cli::cmd_init(&path, false, 1, Stage::Complete, false).unwrap();
    cli::cmd_complete(&path, false).unwrap();

    let snapshot = store::load_snapshot(&path).unwrap();
    assert_eq!(snapshot.stage_counts.complete, 1);
    assert_eq!(snapshot.models_completed, 1);
}

#[test]
fn render_failures_map_into_cli_error() {
    let json_err = serde_json::from_str::<store::Snapshot>("{").unwrap_err();
    let err = CliError::from(json_err);
    assert!(matches!(err, CliError::Render(_)));
    assert!(err.to_string().starts_with("failed to render snapshot"));
}

#[test]
fn status_reads_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    cli::cmd_init(&path, false, 3, Stage::Wip, false).unwrap();
    let written = std::fs::read(&path).unwrap();

    cli::cmd_status(&path, true).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), written);
}
