//! # Stage Ledger
//!
//! The accounting engine for one miniature's stage distribution.
//!
//! All mutations are:
//! - Deterministic
//! - Conserving: one subtraction and one addition of equal magnitude
//! - All-or-nothing: a rejected move leaves the input untouched
//!
//! Every successful mutation returns a [`LedgerUpdate`]: the new counts
//! plus both derived fields, recomputed. Callers persist the whole triple
//! atomically; the derived fields are never edited independently, which
//! removes the class of bugs where a cached status drifts from the counts
//! it was derived from.

use crate::counts::StageCounts;
use crate::error::LedgerError;
use crate::stage::{PIPELINE, Stage};
use serde::{Deserialize, Serialize};

// =============================================================================
// LEDGER UPDATE
// =============================================================================

/// The result of a ledger operation: new counts plus both derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerUpdate {
    /// The new distribution.
    pub stage_counts: StageCounts,
    /// Earliest non-empty stage in pipeline order (`Unbuilt` if empty).
    pub status: Stage,
    /// Mirror of `stage_counts.complete`.
    pub models_completed: u32,
}

impl LedgerUpdate {
    /// Project the derived fields for a distribution.
    ///
    /// This is the only way a `LedgerUpdate` is built, so `status` and
    /// `models_completed` cannot disagree with `stage_counts`.
    #[must_use]
    pub fn from_counts(stage_counts: StageCounts) -> Self {
        Self {
            stage_counts,
            status: stage_counts.overall_status(),
            models_completed: stage_counts.completed(),
        }
    }
}

// =============================================================================
// STAGE LEDGER
// =============================================================================

/// The StageLedger consolidates all stage-distribution mutations.
///
/// It is stateless: every operation is a pure function from a snapshot to a
/// new snapshot (or an error), safe to call from any thread.
pub struct StageLedger;

impl StageLedger {
    /// Seed a fresh distribution with `model_count` models at
    /// `initial_stage` and zero everywhere else.
    ///
    /// Conservation and non-negativity hold by construction.
    #[must_use]
    pub fn initialize(model_count: u32, initial_stage: Stage) -> StageCounts {
        let mut counts = StageCounts::empty();
        counts.set(initial_stage, model_count);
        counts
    }

    /// Move `count` models from `from` to `to`.
    ///
    /// `from == to` is a legal no-op move; it still requires the source
    /// stage to hold at least `count` models, matching the semantics of
    /// "move N models within a stage has no net effect".
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidArgument`] if `count` is 0, or if the
    ///   destination count would overflow `u32` (only reachable from a
    ///   snapshot that already broke conservation).
    /// - [`LedgerError::InsufficientStage`] if `counts[from] < count`. The
    ///   input is untouched; nothing partial is ever applied.
    pub fn move_models(
        counts: &StageCounts,
        from: Stage,
        to: Stage,
        count: u32,
    ) -> Result<LedgerUpdate, LedgerError> {
        if count == 0 {
            return Err(LedgerError::InvalidArgument(
                "count must be at least 1".to_string(),
            ));
        }

        let available = counts.get(from);
        if available < count {
            return Err(LedgerError::InsufficientStage {
                stage: from,
                available,
                requested: count,
            });
        }

        let mut next = *counts;
        next.set(from, next.get(from) - count);
        // Saturating here would silently break conservation, so overflow
        // is rejected instead; `next` is a local copy, nothing partial
        // escapes.
        let dest = next.get(to).checked_add(count).ok_or_else(|| {
            LedgerError::InvalidArgument(format!("stage '{}' count would overflow", to))
        })?;
        next.set(to, dest);
        Ok(LedgerUpdate::from_counts(next))
    }

    /// Advance the least-advanced model: move one model from the earliest
    /// non-empty stage before `Complete` into `Complete`.
    ///
    /// Always draining the front of the pipeline keeps the distribution as
    /// front-loaded as the pipeline order allows, instead of letting the
    /// caller pick an arbitrary source stage. When every model is already
    /// complete (or there are no models) this is a no-op.
    #[must_use]
    pub fn increment_completed(counts: &StageCounts) -> LedgerUpdate {
        let source = PIPELINE
            .into_iter()
            .filter(|stage| !stage.is_terminal())
            .find(|&stage| counts.get(stage) > 0);

        match source {
            // One model available at `source`, so the move cannot fail.
            Some(stage) => Self::move_models(counts, stage, Stage::Complete, 1)
                .unwrap_or_else(|_| LedgerUpdate::from_counts(*counts)),
            None => LedgerUpdate::from_counts(*counts),
        }
    }

    /// Reverse one completion: move one model from `Complete` back to
    /// `Painted`. No-op when nothing is complete.
    ///
    /// The return stage is always `Painted` regardless of where the model
    /// was before completing; the distribution keeps no per-model history
    /// to do better with.
    #[must_use]
    pub fn decrement_completed(counts: &StageCounts) -> LedgerUpdate {
        if counts.get(Stage::Complete) == 0 {
            return LedgerUpdate::from_counts(*counts);
        }

        // One model verified present at Complete, so the move cannot fail.
        Self::move_models(counts, Stage::Complete, Stage::Painted, 1)
            .unwrap_or_else(|_| LedgerUpdate::from_counts(*counts))
    }
}

// =============================================================================
// TESTS
// =============================================================================
