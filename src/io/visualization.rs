//! Board rendering and animated GIF export of a trace

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

use crate::algorithm::{Step, StepKind};
use crate::board::{Board, Position};
use crate::io::configuration::{
    ACTIVE_COLOR, CONFLICT_COLOR, DARK_SQUARE, FINAL_FRAME_HOLD, LIGHT_SQUARE, QUEEN_COLOR,
    SOLUTION_TINT, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{QueensError, Result};
use crate::io::progress::RenderProgress;

/// Highlights drawn on top of a board
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlights<'a> {
    /// Square outlined as the one being acted on
    pub active: Option<Position>,
    /// Queens drawn in the conflict colour
    pub conflicts: &'a [Position],
    /// Tint every square to mark a solution
    pub solution: bool,
}

impl<'a> Highlights<'a> {
    /// Highlights carried by a step
    pub fn for_step(step: &'a Step) -> Self {
        Self {
            active: step.active(),
            conflicts: step.conflicts().unwrap_or(&[]),
            solution: step.kind() == StepKind::SolutionFound,
        }
    }
}

/// Draw a board with queens as discs
pub fn render_board(board: &Board, cell_size: u32, highlights: Highlights<'_>) -> RgbaImage {
    let n = board.size() as u32;
    let mut img = RgbaImage::new(n * cell_size, n * cell_size);

    for row in 0..n {
        for col in 0..n {
            let position = Position::new(row as usize, col as usize);
            let base = if (row + col) % 2 == 0 {
                LIGHT_SQUARE
            } else {
                DARK_SQUARE
            };
            let square = if highlights.solution {
                blend(base, SOLUTION_TINT)
            } else {
                base
            };
            fill_square(&mut img, row, col, cell_size, square);

            if board.is_queen(position) {
                let color = if highlights.conflicts.contains(&position) {
                    CONFLICT_COLOR
                } else {
                    QUEEN_COLOR
                };
                draw_disc(&mut img, row, col, cell_size, color);
            }

            if highlights.active == Some(position) {
                draw_outline(&mut img, row, col, cell_size, ACTIVE_COLOR);
            }
        }
    }

    img
}

fn blend(a: [u8; 4], b: [u8; 4]) -> [u8; 4] {
    let mix = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), a[3].max(b[3])]
}

fn fill_square(img: &mut RgbaImage, row: u32, col: u32, cell_size: u32, color: [u8; 4]) {
    for y in row * cell_size..(row + 1) * cell_size {
        for x in col * cell_size..(col + 1) * cell_size {
            img.put_pixel(x, y, Rgba(color));
        }
    }
}

fn draw_disc(img: &mut RgbaImage, row: u32, col: u32, cell_size: u32, color: [u8; 4]) {
    let center = f64::from(cell_size) / 2.0;
    let radius = f64::from(cell_size) * 0.35;

    for dy in 0..cell_size {
        for dx in 0..cell_size {
            let fx = f64::from(dx) + 0.5 - center;
            let fy = f64::from(dy) + 0.5 - center;
            if fx.mul_add(fx, fy * fy) <= radius * radius {
                img.put_pixel(col * cell_size + dx, row * cell_size + dy, Rgba(color));
            }
        }
    }
}

fn draw_outline(img: &mut RgbaImage, row: u32, col: u32, cell_size: u32, color: [u8; 4]) {
    let thickness = (cell_size / 12).max(1);

    for dy in 0..cell_size {
        for dx in 0..cell_size {
            let on_edge = dx < thickness
                || dy < thickness
                || dx >= cell_size - thickness
                || dy >= cell_size - thickness;
            if on_edge {
                img.put_pixel(col * cell_size + dx, row * cell_size + dy, Rgba(color));
            }
        }
    }
}

/// Renders a trace into an animated GIF
#[derive(Debug, Clone, Copy)]
pub struct TraceAnimator {
    cell_size: u32,
    frame_delay_ms: u32,
    max_frames: usize,
}

impl TraceAnimator {
    /// Configure square size, per-frame delay and the frame budget
    pub const fn new(cell_size: u32, frame_delay_ms: u32, max_frames: usize) -> Self {
        Self {
            cell_size,
            frame_delay_ms,
            max_frames,
        }
    }

    /// Indices of the steps that get a frame
    ///
    /// All steps fit in the budget: every step. Otherwise every k-th step is kept
    /// together with every solution and the last step, so the animation still
    /// shows each solution and ends on the final state.
    pub fn select_frames(&self, steps: &[Step]) -> Vec<usize> {
        let budget = self.max_frames.max(1);
        if steps.len() <= budget {
            return (0..steps.len()).collect();
        }

        let skip_factor = steps.len().div_ceil(budget);
        let last = steps.len() - 1;
        steps
            .iter()
            .enumerate()
            .filter(|(index, step)| {
                index % skip_factor == 0
                    || *index == last
                    || step.kind() == StepKind::SolutionFound
                    || step.kind().is_terminal()
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Export the selected steps as a looping GIF, returning the frame count
    ///
    /// The final frame is repeated with a longer delay so the end state stays
    /// visible before the loop restarts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trace is empty
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        steps: &[Step],
        output_path: &Path,
        progress: &RenderProgress,
    ) -> Result<usize> {
        if steps.is_empty() {
            return Err(QueensError::EmptyTrace {
                artifact: "trace animation",
            });
        }

        let delay_ms = self.frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let selected = self.select_frames(steps);
        progress.start(selected.len());

        let mut frames = Vec::with_capacity(selected.len() + 1);
        for index in selected {
            if let Some(step) = steps.get(index) {
                let img = render_board(step.board(), self.cell_size, Highlights::for_step(step));
                frames.push(Frame::from_parts(
                    img,
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                ));
                progress.advance();
            }
        }

        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1),
            ));
        }
        let frame_count = frames.len();

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| QueensError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| QueensError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| QueensError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(frame_count)
    }
}
