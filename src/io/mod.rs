/// Command-line interface and run orchestration
pub mod cli;
/// Search constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Progress display for long-running searches
pub mod progress;
/// Human-readable rendering of colorings and puzzles
pub mod report;
