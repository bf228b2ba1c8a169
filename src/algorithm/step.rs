//! Recorded search events
//!
//! A trace is a flat, chronologically ordered `Vec<Step>`. Each step owns its own
//! board snapshot and is never modified after the solver pushes it.

use serde::Serialize;

use crate::board::{Board, Position};

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    /// Search set-up, with or without a pinned first queen
    InitialPlace,
    /// A square is about to be checked
    AttemptPlace,
    /// The checked square was safe and now holds a queen
    PlaceQueen,
    /// The checked square is attacked by at least one queen
    Conflict,
    /// A queen was lifted after its subtree was exhausted
    Backtrack,
    /// Every column holds a queen
    SolutionFound,
    /// The search ended without a single solution
    NoSolutionPossible,
    /// The search ended after at least one solution
    FinishedAllSolutions,
}

impl StepKind {
    /// Stable tag used in exported traces and replay output
    pub const fn tag(self) -> &'static str {
        match self {
            Self::InitialPlace => "INITIAL_PLACE",
            Self::AttemptPlace => "ATTEMPT_PLACE",
            Self::PlaceQueen => "PLACE_QUEEN",
            Self::Conflict => "CONFLICT",
            Self::Backtrack => "BACKTRACK",
            Self::SolutionFound => "SOLUTION_FOUND",
            Self::NoSolutionPossible => "NO_SOLUTION_POSSIBLE",
            Self::FinishedAllSolutions => "FINISHED_ALL_SOLUTIONS",
        }
    }

    /// Whether this kind closes a trace
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::NoSolutionPossible | Self::FinishedAllSolutions)
    }
}

/// One immutable event of the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    board: Board,
    message: String,
    kind: StepKind,
    active: Option<Position>,
    conflicts: Option<Vec<Position>>,
    solution: Option<usize>,
}

impl Step {
    pub(crate) const fn new(kind: StepKind, board: Board, message: String) -> Self {
        Self {
            board,
            message,
            kind,
            active: None,
            conflicts: None,
            solution: None,
        }
    }

    pub(crate) fn with_active(mut self, position: Position) -> Self {
        self.active = Some(position);
        self
    }

    pub(crate) fn with_conflicts(mut self, conflicts: Vec<Position>) -> Self {
        self.conflicts = Some(conflicts);
        self
    }

    pub(crate) fn with_solution(mut self, number: usize) -> Self {
        self.solution = Some(number);
        self
    }

    /// Snapshot of the board at this step
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Human-readable description using raw row numbering
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Kind of event
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Square being acted on, if any
    pub const fn active(&self) -> Option<Position> {
        self.active
    }

    /// Attacking queens, present only on conflict steps
    pub fn conflicts(&self) -> Option<&[Position]> {
        self.conflicts.as_deref()
    }

    /// One-based solution ordinal, present only on solution steps
    pub const fn solution(&self) -> Option<usize> {
        self.solution
    }
}
