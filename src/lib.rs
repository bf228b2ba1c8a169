//! Backtracking search for the N-Queens problem, recorded as a replayable trace
//!
//! The solver enumerates every placement column by column and records each
//! attempt, placement, conflict, backtrack and solution as an immutable step.
//! Playback and export work purely from that finished trace.

#![forbid(unsafe_code)]

/// Search engine: safety check, step records and the recursive solver
pub mod algorithm;
/// Occupancy grid and square addressing
pub mod board;
/// Input/output operations and error handling
pub mod io;
/// Forward-only replay of a recorded trace
pub mod playback;

pub use algorithm::{Step, StepKind, solve};
pub use board::{Board, BoardSize, Position};
pub use io::error::{QueensError, Result};
