//! # Minitrack - painting-progress tracker
//!
//! Library surface of the minitrack binary, exposed so integration tests
//! can exercise the CLI plumbing and the snapshot store directly.

pub mod cli;
pub mod store;
