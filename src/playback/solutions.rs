//! Solutions derived from solution steps of a trace

use crate::algorithm::{Step, StepKind};
use crate::board::Board;

/// A complete placement found by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution<'a> {
    /// One-based discovery ordinal
    pub number: usize,
    /// Board snapshot recorded with the solution step
    pub board: &'a Board,
}

impl Solution<'_> {
    /// Queen row for each column, left to right
    pub fn rows_by_column(&self) -> Vec<usize> {
        let mut rows = vec![0; self.board.size()];
        for queen in self.board.queens() {
            if let Some(slot) = rows.get_mut(queen.col) {
                *slot = queen.row;
            }
        }
        rows
    }
}

/// Collect every solution in a trace, ordered by ordinal
pub fn collect_solutions(steps: &[Step]) -> Vec<Solution<'_>> {
    let mut solutions: Vec<Solution<'_>> = steps
        .iter()
        .filter(|step| step.kind() == StepKind::SolutionFound)
        .filter_map(|step| {
            step.solution().map(|number| Solution {
                number,
                board: step.board(),
            })
        })
        .collect();

    solutions.sort_by_key(|solution| solution.number);
    solutions.dedup_by_key(|solution| solution.number);
    solutions
}
