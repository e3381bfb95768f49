//! Input/output operations: CLI orchestration, export, progress, and errors

/// Command-line interface and batch orchestration
pub mod cli;
/// Canvas and output constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Stimulus export to disk
pub mod export;
/// Progress bar management for family runs
pub mod progress;
