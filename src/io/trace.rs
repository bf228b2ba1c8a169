//! JSON export of a recorded trace
//!
//! Each step becomes one object with `board` (rows of 0/1), `message`, `type`,
//! and, when present, `activeQueen`, `conflictingQueens` and `solutionNumber`.
//! Positions are raw zero-indexed `{ "row", "col" }` pairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::algorithm::{Step, StepKind};
use crate::board::Position;
use crate::io::error::{QueensError, Result};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepRecord<'a> {
    board: Vec<Vec<u8>>,
    message: &'a str,
    #[serde(rename = "type")]
    kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_queen: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_queens: Option<&'a [Position]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution_number: Option<usize>,
}

impl<'a> From<&'a Step> for StepRecord<'a> {
    fn from(step: &'a Step) -> Self {
        Self {
            board: step.board().to_rows(),
            message: step.message(),
            kind: step.kind(),
            active_queen: step.active(),
            conflicting_queens: step.conflicts(),
            solution_number: step.solution(),
        }
    }
}

fn records(steps: &[Step]) -> Vec<StepRecord<'_>> {
    steps.iter().map(StepRecord::from).collect()
}

/// Serialize a trace to a pretty-printed JSON string
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn trace_to_json(steps: &[Step]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(steps))?)
}

/// Write a trace as JSON, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory or file cannot be created
/// - Serialization or writing fails
pub fn export_trace_json(steps: &[Step], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| QueensError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| QueensError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records(steps)).map_err(|e| {
        QueensError::Serialization {
            path: output_path.to_path_buf(),
            source: e,
        }
    })?;

    writer.flush().map_err(|e| QueensError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write file",
        source: e,
    })?;

    Ok(())
}
