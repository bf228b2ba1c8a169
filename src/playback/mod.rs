//! Forward-only replay of a recorded trace
//!
//! This module contains presentation state that consumes a finished trace:
//! - Playback cursor with play/pause, speed and solution viewing
//! - Solution extraction from solution steps
//! - Relabeling of raw square labels into board notation

/// Message relabeling from raw rows to board ranks
pub mod labels;
/// Playback state machine over an immutable trace
pub mod player;
/// Solutions derived from a trace
pub mod solutions;

pub use player::{Playback, Progress};
pub use solutions::{Solution, collect_solutions};
