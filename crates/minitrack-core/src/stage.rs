//! # Painting Stages
//!
//! The six sequential stages a physical model occupies on its way through
//! the hobby pipeline.
//!
//! ## Pipeline Order
//!
//! | Stage | Meaning |
//! |-----------|---------------------------------------|
//! | Unbuilt | Still on the sprue or in the box |
//! | Assembled | Built, not yet primed |
//! | Primed | Undercoated, ready for paint |
//! | Wip | Paint in progress |
//! | Painted | Painting finished, not yet based/sealed |
//! | Complete | Done |
//!
//! The order is load-bearing: it drives both the direction models advance
//! and the tie-break rule that derives a miniature's overall status (the
//! earliest non-empty stage wins). The derived `Ord` on the enum matches
//! pipeline order, and [`PIPELINE`] exposes the scan order explicitly so
//! callers never rely on implicit discriminant knowledge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// STAGE ENUM
// =============================================================================

/// One of the six painting-pipeline stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Still on the sprue.
    Unbuilt,
    /// Built, unprimed.
    Assembled,
    /// Undercoated.
    Primed,
    /// Paint in progress.
    Wip,
    /// Painting finished.
    Painted,
    /// Done.
    Complete,
}

/// All stages in pipeline order. Status derivation and the
/// advance-the-least-advanced-model rule both scan this, front to back.
pub const PIPELINE: [Stage; 6] = [
    Stage::Unbuilt,
    Stage::Assembled,
    Stage::Primed,
    Stage::Wip,
    Stage::Painted,
    Stage::Complete,
];

impl Stage {
    /// Get the stage name as it appears in snapshots and CLI arguments.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Unbuilt => "unbuilt",
            Stage::Assembled => "assembled",
            Stage::Primed => "primed",
            Stage::Wip => "wip",
            Stage::Painted => "painted",
            Stage::Complete => "complete",
        }
    }

    /// Get the next stage in the pipeline, if any.
    #[must_use]
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Unbuilt => Some(Stage::Assembled),
            Stage::Assembled => Some(Stage::Primed),
            Stage::Primed => Some(Stage::Wip),
            Stage::Wip => Some(Stage::Painted),
            Stage::Painted => Some(Stage::Complete),
            Stage::Complete => None,
        }
    }

    /// Get the previous stage in the pipeline, if any.
    #[must_use]
    pub fn previous(&self) -> Option<Stage> {
        match self {
            Stage::Unbuilt => None,
            Stage::Assembled => Some(Stage::Unbuilt),
            Stage::Primed => Some(Stage::Assembled),
            Stage::Wip => Some(Stage::Primed),
            Stage::Painted => Some(Stage::Wip),
            Stage::Complete => Some(Stage::Painted),
        }
    }

    /// Check if this stage is terminal (`Complete`).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Complete)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() rather than write_str() so width specifiers apply
        f.pad(self.name())
    }
}

/// Error returned when parsing a stage name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage '{0}', expected one of: unbuilt, assembled, primed, wip, painted, complete")]
pub struct ParseStageError(String);

impl std::str::FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unbuilt" => Ok(Stage::Unbuilt),
            "assembled" => Ok(Stage::Assembled),
            "primed" => Ok(Stage::Primed),
            "wip" => Ok(Stage::Wip),
            "painted" => Ok(Stage::Painted),
            "complete" => Ok(Stage::Complete),
            // Echo the input as typed, not the lowercased copy
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
