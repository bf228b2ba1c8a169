//! Backtracking N-Queens search that records every decision as a step
//!
//! The search walks columns left to right and rows top to bottom, so the trace
//! is the exact depth-first order of the recursion. Enumeration never stops at
//! the first solution: every placed queen is lifted again after its subtree,
//! which is what makes the search visit all solutions.

use log::debug;

use crate::algorithm::safety::check_safety;
use crate::algorithm::step::{Step, StepKind};
use crate::board::{Board, BoardSize, Position};

/// Run the search and return the complete ordered trace
///
/// An initial queen inside the board is pinned for the whole run: it is never
/// attempted, checked, or removed, and its column is skipped by the search. An
/// initial queen outside the board is dropped and the run proceeds as if none
/// had been given; the first step says so.
///
/// The trace always starts with [`StepKind::InitialPlace`] and ends with exactly
/// one of [`StepKind::NoSolutionPossible`] or [`StepKind::FinishedAllSolutions`].
pub fn solve(size: BoardSize, initial_queen: Option<Position>) -> Vec<Step> {
    let mut search = Search::new(size, initial_queen);
    search.solve_column(0);
    search.finish()
}

struct Search {
    n: usize,
    board: Board,
    pinned: Option<Position>,
    steps: Vec<Step>,
    solutions: usize,
}

impl Search {
    fn new(size: BoardSize, initial_queen: Option<Position>) -> Self {
        let n = size.get();
        let mut board = Board::empty(size);

        let pinned = initial_queen.filter(|&position| size.contains(position));
        let first = match (initial_queen, pinned) {
            (_, Some(position)) => {
                board.place(position);
                Step::new(
                    StepKind::InitialPlace,
                    board.clone(),
                    format!(
                        "Initial queen placed at ({}). Starting search for {n}-Queens.",
                        position.label()
                    ),
                )
                .with_active(position)
            }
            (Some(_), None) => Step::new(
                StepKind::InitialPlace,
                board.clone(),
                format!(
                    "Starting search for {n}-Queens with no initial queen (previous position out of bounds)."
                ),
            ),
            (None, None) => Step::new(
                StepKind::InitialPlace,
                board.clone(),
                format!("Starting search for {n}-Queens with no initial queen."),
            ),
        };

        Self {
            n,
            board,
            pinned,
            steps: vec![first],
            solutions: 0,
        }
    }

    fn solve_column(&mut self, col: usize) {
        if col == self.n {
            self.solutions += 1;
            let n = self.n;
            let number = self.solutions;
            self.push(
                Step::new(
                    StepKind::SolutionFound,
                    self.board.clone(),
                    format!("Solution #{number} found for {n}-Queens!"),
                )
                .with_solution(number),
            );
            return;
        }

        // The pinned queen already owns this column
        if self.pinned.is_some_and(|pinned| pinned.col == col) {
            self.solve_column(col + 1);
            return;
        }

        for row in 0..self.n {
            let candidate = Position::new(row, col);
            let label = candidate.label();

            self.push(
                Step::new(
                    StepKind::AttemptPlace,
                    self.board.clone(),
                    format!("Attempting to place queen at ({label})."),
                )
                .with_active(candidate),
            );

            let report = check_safety(&self.board, row, col);
            if report.is_safe() {
                self.board.place(candidate);
                self.push(
                    Step::new(
                        StepKind::PlaceQueen,
                        self.board.clone(),
                        format!("Queen placed at ({label}). Moving to next column."),
                    )
                    .with_active(candidate),
                );

                self.solve_column(col + 1);

                self.board.remove(candidate);
                self.push(
                    Step::new(
                        StepKind::Backtrack,
                        self.board.clone(),
                        format!("Backtracking from ({label})."),
                    )
                    .with_active(candidate),
                );
            } else {
                let conflicts = report.into_conflicts();
                let listed = conflicts
                    .iter()
                    .map(|position| format!("({})", position.label()))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.push(
                    Step::new(
                        StepKind::Conflict,
                        self.board.clone(),
                        format!(
                            "Conflict at ({label}). Cannot place queen. Conflicting with {listed}."
                        ),
                    )
                    .with_active(candidate)
                    .with_conflicts(conflicts),
                );
            }
        }
    }

    fn finish(mut self) -> Vec<Step> {
        let n = self.n;
        if self.solutions == 0 {
            self.push(Step::new(
                StepKind::NoSolutionPossible,
                self.board.clone(),
                format!("No solutions found for {n}-Queens with the given initial placement."),
            ));
        } else {
            let last_board = self
                .steps
                .last()
                .map_or_else(|| self.board.clone(), |step| step.board().clone());
            let count = self.solutions;
            self.push(Step::new(
                StepKind::FinishedAllSolutions,
                last_board,
                format!("Finished. Found {count} solution(s) for {n}-Queens."),
            ));
        }

        debug!(
            "Recorded {} steps and {} solution(s) for {n}-Queens",
            self.steps.len(),
            self.solutions
        );
        self.steps
    }

    fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}
