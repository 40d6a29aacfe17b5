/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Initial grid seeding
pub mod prefill;
/// Generation progress display
pub mod progress;
/// JSON rule files
pub mod rulefile;
/// GIF capture of runs
pub mod visualization;
