//! PNG export of every discovered solution on one sheet

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::algorithm::Step;
use crate::io::configuration::{SHEET_BACKGROUND, SHEET_COLUMNS, SHEET_GAP_PX};
use crate::io::error::{QueensError, Result};
use crate::io::visualization::{Highlights, render_board};
use crate::playback::{Solution, collect_solutions};

/// Tile solution boards into one image
///
/// Boards are laid out in the given order, `SHEET_COLUMNS` per row, separated
/// by `SHEET_GAP_PX` of background. Returns `None` when there is no solution.
pub fn render_solution_sheet(solutions: &[Solution<'_>], cell_size: u32) -> Option<RgbaImage> {
    let board_px = solutions.first()?.board.size() as u32 * cell_size;

    let columns = SHEET_COLUMNS.min(solutions.len()) as u32;
    let rows = solutions.len().div_ceil(SHEET_COLUMNS) as u32;
    let width = columns * board_px + (columns + 1) * SHEET_GAP_PX;
    let height = rows * board_px + (rows + 1) * SHEET_GAP_PX;

    let mut sheet = RgbaImage::from_pixel(width, height, Rgba(SHEET_BACKGROUND));
    for (index, solution) in solutions.iter().enumerate() {
        let slot_col = (index % SHEET_COLUMNS) as u32;
        let slot_row = (index / SHEET_COLUMNS) as u32;
        let x = SHEET_GAP_PX + slot_col * (board_px + SHEET_GAP_PX);
        let y = SHEET_GAP_PX + slot_row * (board_px + SHEET_GAP_PX);

        let tile = render_board(solution.board, cell_size, Highlights::default());
        imageops::overlay(&mut sheet, &tile, i64::from(x), i64::from(y));
    }

    Some(sheet)
}

/// Export the solution sheet as PNG, returning the number of solutions drawn
///
/// # Errors
///
/// Returns an error if:
/// - The trace contains no solution
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_sheet(steps: &[Step], output_path: &Path, cell_size: u32) -> Result<usize> {
    let solutions = collect_solutions(steps);
    let sheet = render_solution_sheet(&solutions, cell_size).ok_or(QueensError::EmptyTrace {
        artifact: "solution sheet",
    })?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| QueensError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    sheet
        .save(output_path)
        .map_err(|e| QueensError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(solutions.len())
}
