//! Per-square conflict detection
//!
//! Columns are filled left to right, so every queen placed by the search sits
//! left of the candidate column. The one exception is a pinned initial queen,
//! which may sit anywhere; the right-hand scans exist only to find it. Without a
//! pinned queen they never report anything and the result is exactly the
//! classic left-only check.

use crate::board::{Board, Position};

/// Outcome of checking one candidate square
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafetyReport {
    conflicts: Vec<Position>,
}

impl SafetyReport {
    /// True iff no queen attacks the candidate square
    pub const fn is_safe(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Attacking queens in scan order
    pub fn conflicts(&self) -> &[Position] {
        &self.conflicts
    }

    /// Take ownership of the conflict list
    pub fn into_conflicts(self) -> Vec<Position> {
        self.conflicts
    }
}

/// Find every queen attacking `(row, col)`
///
/// Scan order, all hits accumulated:
/// 1. same row, columns `0..col`
/// 2. up-left diagonal, nearest first
/// 3. down-left diagonal, nearest first
/// 4. same row, columns `col+1..n`
/// 5. up-right diagonal, nearest first
/// 6. down-right diagonal, nearest first
///
/// The board is not modified.
pub fn check_safety(board: &Board, row: usize, col: usize) -> SafetyReport {
    let n = board.size();

    let row_left = (0..col).map(|c| Position::new(row, c));
    let up_left = (1..=row.min(col)).map(|k| Position::new(row - k, col - k));
    let down_left = (1..=col)
        .take_while(|k| row + k < n)
        .map(|k| Position::new(row + k, col - k));

    let row_right = (col + 1..n).map(|c| Position::new(row, c));
    let up_right = (1..=row)
        .take_while(|k| col + k < n)
        .map(|k| Position::new(row - k, col + k));
    let down_right = (1..n)
        .take_while(|k| row + k < n && col + k < n)
        .map(|k| Position::new(row + k, col + k));

    let conflicts = row_left
        .chain(up_left)
        .chain(down_left)
        .chain(row_right)
        .chain(up_right)
        .chain(down_right)
        .filter(|&position| board.is_queen(position))
        .collect();

    SafetyReport { conflicts }
}
