//! # minitrack-core
//!
//! The deterministic stage-distribution ledger for Minitrack - THE LEDGER.
//!
//! A miniature in the hobby pipeline owns N physical models, each of which
//! sits in exactly one of six sequential painting stages
//! (unbuilt → assembled → primed → wip → painted → complete). This crate
//! tracks that distribution for one miniature at a time and keeps its two
//! derived fields — the overall status and the completed-model count — in
//! lockstep with the distribution on every mutation.
//!
//! ## Invariants
//!
//! - **Conservation**: the six counts always sum to the miniature's model
//!   count. Moves are one subtraction and one addition of equal magnitude,
//!   so no operation can lose or duplicate a model.
//! - **Non-negativity**: counts are unsigned; a move that would overdraw its
//!   source stage is rejected whole, with no partial mutation.
//! - **Derived-on-write**: [`LedgerUpdate::status`] and
//!   [`LedgerUpdate::models_completed`] are recomputed projections of the
//!   counts, never independently stored or edited.
//!
//! ## Architectural Constraints
//!
//! The ledger:
//! - Is a leaf: it depends on nothing else in the system
//! - Is pure: every operation is a function from snapshot to snapshot
//! - Has NO async, NO I/O, NO floats, and never panics
//! - May be called from any thread; each call owns its snapshot

// =============================================================================
// MODULES
// =============================================================================

pub mod counts;
pub mod error;
pub mod ledger;
pub mod stage;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use counts::StageCounts;
pub use error::LedgerError;
pub use ledger::{LedgerUpdate, StageLedger};
pub use stage::{PIPELINE, Stage};
