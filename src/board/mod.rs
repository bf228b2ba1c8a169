//! Board occupancy and square addressing
//!
//! This module contains the leaf data structures the solver works on:
//! - Fixed-size occupancy grid with deep-copy snapshots
//! - Positions with raw and board-notation labels

/// Occupancy grid and validated board size
pub mod grid;
/// Zero-indexed squares and their textual labels
pub mod position;

pub use grid::{Board, BoardSize, Cell};
pub use position::Position;
