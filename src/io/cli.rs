//! Command-line interface for recording, exporting and replaying a search

use crate::algorithm::{Step, solve};
use crate::board::{BoardSize, Position};
use crate::io::configuration::{
    CELL_SIZE_PX, DEFAULT_BOARD_SIZE, DEFAULT_MAX_FRAMES, DEFAULT_PLAYBACK_DELAY_MS, DEFAULT_SEED,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::io::error::{QueensError, Result};
use crate::io::image::export_solution_sheet;
use crate::io::progress::RenderProgress;
use crate::io::trace::export_trace_json;
use crate::io::visualization::TraceAnimator;
use crate::playback::{Playback, collect_solutions};
use clap::Parser;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "queens")]
#[command(
    author,
    version,
    about = "Record every step of a backtracking N-Queens search and export or replay it"
)]
/// Command-line arguments for the trace recorder
pub struct Cli {
    /// Board edge length
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Pinned first queen in board notation, e.g. B3 (rank counted from the bottom)
    #[arg(short, long, value_name = "SQUARE", conflicts_with = "random_queen")]
    pub queen: Option<String>,

    /// Pin the first queen on a random square
    #[arg(short, long)]
    pub random_queen: bool,

    /// Random seed for reproducible random queens
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the full step trace as JSON
    #[arg(short, long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Write the trace as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Write all solutions as a PNG sheet
    #[arg(short = 'S', long, value_name = "PATH")]
    pub solutions: Option<PathBuf>,

    /// Delay per step in milliseconds for animation and replay
    #[arg(short, long, default_value_t = DEFAULT_PLAYBACK_DELAY_MS)]
    pub delay: u64,

    /// Upper bound on animation frames
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    pub max_frames: usize,

    /// Replay the search step by step on stderr
    #[arg(long)]
    pub replay: bool,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

fn parse_board_size(value: &str) -> std::result::Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_parse_error| format!("'{value}' is not a whole number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated board size
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero
    pub fn board_size(&self) -> Result<BoardSize> {
        BoardSize::new(self.size)
    }

    /// Resolve the pinned first queen, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the given square cannot be parsed or lies off the board
    pub fn initial_queen(&self, size: BoardSize) -> Result<Option<Position>> {
        if let Some(square) = &self.queen {
            return Position::parse_board_label(square, size.get()).map(Some);
        }

        if self.random_queen {
            let mut rng = StdRng::seed_from_u64(self.seed);
            let n = size.get();
            return Ok(Some(Position::new(
                rng.random_range(0..n),
                rng.random_range(0..n),
            )));
        }

        Ok(None)
    }
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps recorded by the solver
    pub steps: usize,
    /// Solutions found
    pub solutions: usize,
    /// Frames written to the animation, if one was requested
    pub frames: Option<usize>,
}

/// Orchestrates one solve plus the requested exports
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve, export and optionally replay according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if input validation or any requested export fails
    pub fn run(&self) -> Result<RunSummary> {
        let size = self.cli.board_size()?;
        let initial_queen = self.cli.initial_queen(size)?;
        if let Some(position) = initial_queen {
            info!(
                "Pinning first queen at {} on a {size}x{size} board",
                position.board_label(size.get())
            );
        }

        let steps = solve(size, initial_queen);
        let solutions = collect_solutions(&steps).len();
        info!(
            "Recorded {} steps with {solutions} solution(s) for {size}-Queens",
            steps.len()
        );

        if let Some(path) = &self.cli.trace {
            export_trace_json(&steps, path)?;
            info!("Trace written to {}", path.display());
        }

        let frames = match &self.cli.visualize {
            Some(path) => Some(self.export_animation(&steps, path)?),
            None => None,
        };

        if let Some(path) = &self.cli.solutions {
            match export_solution_sheet(&steps, path, CELL_SIZE_PX) {
                Ok(count) => info!("{count} solution(s) drawn to {}", path.display()),
                Err(QueensError::EmptyTrace { artifact }) => {
                    warn!("Skipping {artifact}: no solution was found");
                }
                Err(error) => return Err(error),
            }
        }

        if self.cli.replay {
            self.replay(&steps);
        }

        Ok(RunSummary {
            steps: steps.len(),
            solutions,
            frames,
        })
    }

    fn export_animation(&self, steps: &[Step], path: &std::path::Path) -> Result<usize> {
        let delay_ms = u32::try_from(self.cli.delay).unwrap_or(u32::MAX);
        let animator = TraceAnimator::new(CELL_SIZE_PX, delay_ms, self.cli.max_frames);
        let progress = RenderProgress::for_frames("Rendering", self.cli.should_show_progress());

        let frames = animator.export_gif(steps, path, &progress)?;
        let rendered = progress.finish();
        debug!("Rendered {rendered} step frames");
        info!("Animation with {frames} frames written to {}", path.display());
        Ok(frames)
    }

    // Replay is the one interactive surface and writes straight to the terminal
    #[allow(clippy::print_stderr)]
    fn replay(&self, steps: &[Step]) {
        let mut playback = Playback::new(steps);
        playback.set_delay(Duration::from_millis(self.cli.delay));

        Self::show(&playback);
        playback.toggle_play();
        while playback.is_playing() {
            std::thread::sleep(playback.delay());
            if playback.tick(playback.delay()) > 0 {
                Self::show(&playback);
            }
        }
        eprintln!("{}", playback.status());
    }

    #[allow(clippy::print_stderr)]
    fn show(playback: &Playback<'_>) {
        let progress = playback.progress();
        let tag = playback.current().map_or("SOLUTION", |step| step.kind().tag());
        eprintln!(
            "Step {} of {} ({:.0}%) [{tag}]: {}",
            progress.current,
            progress.total,
            progress.percent(),
            playback.display_message()
        );
        if let Some(board) = playback.displayed_board() {
            eprintln!("{board}");
        }
    }
}
