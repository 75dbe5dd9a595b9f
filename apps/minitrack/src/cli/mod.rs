//! # Minitrack CLI Module
//!
//! This module implements the CLI interface for minitrack.
//!
//! ## Available Commands
//!
//! - `init` - Create a snapshot for a new miniature
//! - `move` - Move models between painting stages
//! - `complete` - Mark one more model complete
//! - `uncomplete` - Reverse one completion
//! - `status` - Show the stage distribution and overall status

mod commands;

use crate::store::StoreError;
use clap::{Parser, Subcommand};
use minitrack_core::{LedgerError, Stage};
use std::path::PathBuf;
use thiserror::Error;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Minitrack - miniature painting-progress tracker
///
/// Tracks how many of a miniature's models sit in each painting stage
/// (unbuilt → assembled → primed → wip → painted → complete) and never
/// loses or duplicates a model while moving them around.
#[derive(Parser, Debug)]
#[command(name = "minitrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the snapshot file
    #[arg(short = 'f', long, global = true, default_value = "minitrack.json")]
    pub file: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a snapshot for a new miniature
    Init {
        /// Number of physical models in the unit
        model_count: u32,

        /// Stage all models start in
        #[arg(short, long, default_value = "unbuilt")]
        stage: Stage,

        /// Overwrite an existing snapshot file
        #[arg(long)]
        force: bool,
    },

    /// Move models from one stage to another
    Move {
        /// Source stage
        from: Stage,

        /// Destination stage
        to: Stage,

        /// Number of models to move
        #[arg(default_value = "1")]
        count: u32,
    },

    /// Mark one more model complete (advances the least-advanced model)
    Complete,

    /// Reverse one completion (the model returns to painted)
    Uncomplete,

    /// Show the stage distribution and overall status
    Status,
}

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Anything a CLI command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("failed to render snapshot: {0}")]
    Render(#[from] serde_json::Error),
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Init {
            model_count,
            stage,
            force,
        }) => cmd_init(&cli.file, json_mode, model_count, stage, force),
        Some(Commands::Move { from, to, count }) => {
            cmd_move(&cli.file, json_mode, from, to, count)
        }
        Some(Commands::Complete) => cmd_complete(&cli.file, json_mode),
        Some(Commands::Uncomplete) => cmd_uncomplete(&cli.file, json_mode),
        // No subcommand - show status by default
        Some(Commands::Status) | None => cmd_status(&cli.file, json_mode),
    }
}
