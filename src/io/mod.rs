//! Input/output operations and error handling

/// Command-line interface and render pipeline orchestration
pub mod cli;
/// Default parameters and palette constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export
pub mod image;
/// Progress reporting
pub mod progress;
