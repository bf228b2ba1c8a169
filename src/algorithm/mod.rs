/// Conflict detection for a candidate square
pub mod safety;
/// Recursive backtracking search that records every decision
pub mod solver;
/// Immutable step records and their kinds
pub mod step;

pub use safety::{SafetyReport, check_safety};
pub use solver::solve;
pub use step::{Step, StepKind};
