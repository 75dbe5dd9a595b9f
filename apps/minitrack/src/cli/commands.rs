//! # CLI Command Implementations
//!
//! Each command follows the same shape: load the snapshot, run one ledger
//! operation, persist the whole update, print the result. The ledger
//! itself never sees the file.

use super::CliError;
use crate::store::{self, Snapshot};
use minitrack_core::{LedgerUpdate, Stage, StageLedger};
use std::path::Path;

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Create a snapshot for a new miniature.
pub fn cmd_init(
    path: &Path,
    json_mode: bool,
    model_count: u32,
    stage: Stage,
    force: bool,
) -> Result<(), CliError> {
    tracing::info!(
        "Initializing {:?}: {} models at '{}'",
        path,
        model_count,
        stage
    );

    let counts = StageLedger::initialize(model_count, stage);
    let snapshot = Snapshot::from_update(model_count, LedgerUpdate::from_counts(counts));
    store::create_snapshot(path, &snapshot, force)?;

    print_snapshot(path, &snapshot, json_mode)
}

// =============================================================================
// MOVE COMMAND
// =============================================================================

/// Move models from one stage to another.
pub fn cmd_move(
    path: &Path,
    json_mode: bool,
    from: Stage,
    to: Stage,
    count: u32,
) -> Result<(), CliError> {
    let snapshot = store::load_snapshot(path)?;

    let update = StageLedger::move_models(&snapshot.stage_counts, from, to, count)?;
    let next = Snapshot::from_update(snapshot.model_count, update);
    store::save_snapshot(path, &next)?;

    tracing::info!("Moved {} models: '{}' -> '{}'", count, from, to);
    print_snapshot(path, &next, json_mode)
}

// =============================================================================
// COMPLETE / UNCOMPLETE COMMANDS
// =============================================================================

/// Mark one more model complete.
pub fn cmd_complete(path: &Path, json_mode: bool) -> Result<(), CliError> {
    let snapshot = store::load_snapshot(path)?;

    let update = StageLedger::increment_completed(&snapshot.stage_counts);
    if update.models_completed == snapshot.models_completed {
        tracing::info!("All {} models already complete", snapshot.model_count);
    }
    let next = Snapshot::from_update(snapshot.model_count, update);
    store::save_snapshot(path, &next)?;

    print_snapshot(path, &next, json_mode)
}

/// Reverse one completion.
pub fn cmd_uncomplete(path: &Path, json_mode: bool) -> Result<(), CliError> {
    let snapshot = store::load_snapshot(path)?;

    let update = StageLedger::decrement_completed(&snapshot.stage_counts);
    if update.models_completed == snapshot.models_completed {
        tracing::info!("No completed models to reverse");
    }
    let next = Snapshot::from_update(snapshot.model_count, update);
    store::save_snapshot(path, &next)?;

    print_snapshot(path, &next, json_mode)
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show the stage distribution and overall status.
pub fn cmd_status(path: &Path, json_mode: bool) -> Result<(), CliError> {
    let snapshot = store::load_snapshot(path)?;
    print_snapshot(path, &snapshot, json_mode)
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_snapshot(path: &Path, snapshot: &Snapshot, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("Minitrack Status");
    println!("================");
    println!("Snapshot: {:?}", path);
    println!();
    for (stage, count) in snapshot.stage_counts.iter() {
        println!("  {:<10} {}", stage, count);
    }
    println!();
    println!("Models:    {}", snapshot.model_count);
    println!("Status:    {}", snapshot.status);
    println!(
        "Completed: {} / {}",
        snapshot.models_completed, snapshot.model_count
    );
    Ok(())
}
