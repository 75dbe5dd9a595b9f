//! # Minitrack - painting-progress tracker
//!
//! The command-line driver for the minitrack stage-distribution ledger.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/minitrack (THE BINARY)        │
//! │                                               │
//! │   ┌─────────────┐       ┌─────────────────┐   │
//! │   │    CLI      │       │ Snapshot store  │   │
//! │   │   (clap)    │──────▶│  (JSON file)    │   │
//! │   └──────┬──────┘       └─────────────────┘   │
//! │          │                                    │
//! │          ▼                                    │
//! │   ┌────────────────┐                          │
//! │   │ minitrack-core │                          │
//! │   │  (THE LEDGER)  │                          │
//! │   └────────────────┘                          │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start tracking a 5-model unit
//! minitrack init 5
//!
//! # Assemble three of them
//! minitrack move unbuilt assembled 3
//!
//! # Finish one model, check progress
//! minitrack complete
//! minitrack status
//! ```

use clap::Parser;
use minitrack::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — MINITRACK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MINITRACK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minitrack=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the minitrack startup banner.
fn print_banner() {
    println!(
        r#"
  minitrack v{} — one model at a time
"#,
        env!("CARGO_PKG_VERSION")
    );
}
