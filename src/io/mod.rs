//! Input/output: configuration, errors, progress and solution reporting

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of solutions
pub mod image;
/// Text and HTML solution files
pub mod output;
/// Live progress reporting
pub mod progress;
