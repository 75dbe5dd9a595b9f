//! # Stage Counts
//!
//! The per-miniature distribution of physical models across the six
//! painting stages, plus the two projections derived from it.
//!
//! ## Determinism Guarantees
//!
//! - Counts are unsigned integers; negativity is unrepresentable
//! - Arithmetic is saturating; counters cannot overflow into a panic
//! - Projections scan [`PIPELINE`] order, never serialization key order

use crate::stage::{PIPELINE, Stage};
use serde::{Deserialize, Serialize};

// =============================================================================
// STAGE COUNTS
// =============================================================================

/// How many of a miniature's models currently sit in each stage.
///
/// Serializes as a six-key map (`{"unbuilt": 5, "assembled": 0, ...}`).
/// Missing keys deserialize as 0, and on-disk key order is irrelevant:
/// everything order-sensitive goes through [`PIPELINE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageCounts {
    pub unbuilt: u32,
    pub assembled: u32,
    pub primed: u32,
    pub wip: u32,
    pub painted: u32,
    pub complete: u32,
}

impl StageCounts {
    /// Create an all-zero distribution (a miniature with no models).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the count for one stage.
    #[must_use]
    pub fn get(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Unbuilt => self.unbuilt,
            Stage::Assembled => self.assembled,
            Stage::Primed => self.primed,
            Stage::Wip => self.wip,
            Stage::Painted => self.painted,
            Stage::Complete => self.complete,
        }
    }

    /// Set the count for one stage.
    pub fn set(&mut self, stage: Stage, count: u32) {
        match stage {
            Stage::Unbuilt => self.unbuilt = count,
            Stage::Assembled => self.assembled = count,
            Stage::Primed => self.primed = count,
            Stage::Wip => self.wip = count,
            Stage::Painted => self.painted = count,
            Stage::Complete => self.complete = count,
        }
    }

    /// Total number of models across all stages.
    ///
    /// Summed in `u64` so the total cannot wrap even with every stage at
    /// `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        PIPELINE
            .into_iter()
            .map(|stage| u64::from(self.get(stage)))
            .sum()
    }

    /// Iterate `(stage, count)` pairs in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, u32)> + '_ {
        PIPELINE.into_iter().map(|stage| (stage, self.get(stage)))
    }

    /// Derive the overall status: the earliest stage (pipeline order) with
    /// at least one model. An empty distribution reads as `Unbuilt`.
    #[must_use]
    pub fn overall_status(&self) -> Stage {
        PIPELINE
            .into_iter()
            .find(|&stage| self.get(stage) > 0)
            .unwrap_or(Stage::Unbuilt)
    }

    /// Derive the completed-model count (`counts[Complete]`).
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.complete
    }
}

// =============================================================================
// TESTS
// =============================================================================
