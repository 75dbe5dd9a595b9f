//! # Snapshot Store
//!
//! Load/save glue between the pure ledger and one miniature's snapshot
//! file on disk. This is the only place in the workspace that does I/O.
//!
//! The file is the trust boundary: anything read from it is re-validated
//! (size cap, conservation check, derived-field recomputation) before the
//! ledger ever sees it.

use minitrack_core::{LedgerUpdate, Stage, StageCounts};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum snapshot file size (64 KiB).
///
/// A well-formed snapshot is a few hundred bytes; anything near this limit
/// is not one of ours.
const MAX_SNAPSHOT_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors from loading or saving a snapshot file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written.
    #[error("snapshot I/O error at '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// The snapshot file is not valid JSON for a snapshot.
    #[error("snapshot file '{path}' is malformed: {message}")]
    Malformed { path: PathBuf, message: String },

    /// The stored counts do not sum to the stored model count; the file
    /// was edited or written by something that broke conservation.
    #[error(
        "snapshot file '{path}' violates conservation: counts sum to {actual}, model_count is {expected}"
    )]
    Unbalanced {
        path: PathBuf,
        actual: u64,
        expected: u32,
    },

    /// Refusing to clobber an existing snapshot without `--force`.
    #[error("snapshot file '{path}' already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

// =============================================================================
// SNAPSHOT RECORD
// =============================================================================

/// One miniature's persisted record: the model count plus the ledger
/// output triple, stored together and rewritten together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of physical models this miniature owns.
    pub model_count: u32,
    /// Distribution of those models across the six stages.
    pub stage_counts: StageCounts,
    /// Derived: earliest non-empty stage.
    pub status: Stage,
    /// Derived: mirror of `stage_counts.complete`.
    pub models_completed: u32,
}

impl Snapshot {
    /// Build a snapshot from a ledger update, carrying the model count
    /// through unchanged (the ledger conserves it).
    #[must_use]
    pub fn from_update(model_count: u32, update: LedgerUpdate) -> Self {
        Self {
            model_count,
            stage_counts: update.stage_counts,
            status: update.status,
            models_completed: update.models_completed,
        }
    }
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

/// Load a snapshot from disk.
///
/// The stored derived fields are discarded and recomputed from the counts,
/// so a hand-edited `status` can never drift into the ledger. A counts sum
/// that disagrees with `model_count` is rejected outright.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, StoreError> {
    let metadata = std::fs::metadata(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if metadata.len() > MAX_SNAPSHOT_FILE_SIZE {
        return Err(StoreError::Malformed {
            path: path.to_path_buf(),
            message: format!(
                "file size {} exceeds maximum {} bytes",
                metadata.len(),
                MAX_SNAPSHOT_FILE_SIZE
            ),
        });
    }

    let contents = std::fs::read(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let stored: Snapshot =
        serde_json::from_slice(&contents).map_err(|e| StoreError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let actual = stored.stage_counts.total();
    if actual != u64::from(stored.model_count) {
        return Err(StoreError::Unbalanced {
            path: path.to_path_buf(),
            actual,
            expected: stored.model_count,
        });
    }

    // Compute-on-read: stored derived fields are untrusted
    Ok(Snapshot::from_update(
        stored.model_count,
        LedgerUpdate::from_counts(stored.stage_counts),
    ))
}

/// Save a snapshot to disk as pretty-printed JSON.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(snapshot).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save a fresh snapshot, refusing to overwrite unless `force` is set.
pub fn create_snapshot(path: &Path, snapshot: &Snapshot, force: bool) -> Result<(), StoreError> {
    if path.exists() && !force {
        return Err(StoreError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    save_snapshot(path, snapshot)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use minitrack_core::StageLedger;

    #[test]
    fn snapshot_from_update_carries_model_count() {
        let counts = StageLedger::initialize(5, Stage::Unbuilt);
        let snapshot = Snapshot::from_update(5, LedgerUpdate::from_counts(counts));
        assert_eq!(snapshot.model_count, 5);
        assert_eq!(snapshot.status, Stage::Unbuilt);
        assert_eq!(snapshot.models_completed, 0);
    }

    #[test]
    fn snapshot_serializes_with_stage_names() {
        let counts = StageLedger::initialize(3, Stage::Primed);
        let snapshot = Snapshot::from_update(3, LedgerUpdate::from_counts(counts));
        let json = serde_json::to_string(&snapshot).expect("serialize");
        assert!(json.contains("\"primed\":3"));
        assert!(json.contains("\"status\":\"primed\""));
    }
}
