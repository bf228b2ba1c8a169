/// Command-line interface and run orchestration
pub mod cli;
/// Limits, defaults and rendering constants
pub mod configuration;
/// Error types shared by the crate
pub mod error;
/// PNG sheet of discovered solutions
pub mod image;
/// Logger initialization for the binary
pub mod logging;
/// Progress display for long renders
pub mod progress;
/// JSON export of the step trace
pub mod trace;
/// Animated GIF export of the step trace
pub mod visualization;
