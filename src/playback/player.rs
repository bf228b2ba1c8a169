//! Playback state machine over an immutable trace
//!
//! `Playback` is the whole of the presentation state: which step is shown,
//! whether it is advancing on its own, how fast, and whether a discovered
//! solution is being inspected instead. Time is fed in through [`Playback::tick`]
//! so any timer source can drive it.

use std::time::Duration;

use crate::algorithm::Step;
use crate::board::Board;
use crate::io::configuration::{
    DEFAULT_PLAYBACK_DELAY_MS, MAX_SPEED, MIN_SPEED, SPEED_INVERSION_MS, SPEED_STEP,
};
use crate::io::error::{Result, invalid_parameter};
use crate::playback::labels::relabel;
use crate::playback::solutions::{Solution, collect_solutions};

/// Position of the cursor relative to what is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// One-based number of the item shown
    pub current: usize,
    /// Number of items available
    pub total: usize,
}

impl Progress {
    /// Completion in percent, 0 when there is nothing to show
    pub const fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64 * 100.0
        }
    }
}

/// Forward-only cursor over a recorded trace
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    steps: &'a [Step],
    index: usize,
    playing: bool,
    finished: bool,
    delay: Duration,
    pending: Duration,
    viewing: Option<usize>,
}

impl<'a> Playback<'a> {
    /// Start paused on the first step
    pub fn new(steps: &'a [Step]) -> Self {
        let finished = steps.first().is_some_and(|step| step.kind().is_terminal());
        Self {
            steps,
            index: 0,
            playing: false,
            finished,
            delay: Duration::from_millis(DEFAULT_PLAYBACK_DELAY_MS),
            pending: Duration::ZERO,
            viewing: None,
        }
    }

    /// Step under the cursor, `None` while a solution is being viewed
    pub fn current(&self) -> Option<&'a Step> {
        if self.viewing.is_some() {
            return None;
        }
        self.steps.get(self.index)
    }

    /// Board to draw: the viewed solution or the current step's snapshot
    pub fn displayed_board(&self) -> Option<&'a Board> {
        match self.viewing {
            Some(number) => self
                .discovered_solutions()
                .into_iter()
                .find(|solution| solution.number == number)
                .map(|solution| solution.board),
            None => self.current().map(Step::board),
        }
    }

    /// Zero-based index of the current step
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether steps advance on [`Playback::tick`]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the terminal step has been reached
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Delay between automatic advances
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Solution currently being viewed
    pub const fn viewing(&self) -> Option<usize> {
        self.viewing
    }

    /// Advance one step
    ///
    /// Does nothing while a solution is viewed. Reaching the last or a terminal
    /// step pauses playback and marks the replay finished.
    pub fn next_step(&mut self) -> Option<&'a Step> {
        if self.viewing.is_some() {
            return None;
        }

        if self.index + 1 >= self.steps.len() {
            self.playing = false;
            self.finished = !self.steps.is_empty();
            return None;
        }

        self.index += 1;
        let step = self.steps.get(self.index)?;
        if step.kind().is_terminal() {
            self.finished = true;
            self.playing = false;
        }
        Some(step)
    }

    /// Switch between playing and paused, returning the new state
    ///
    /// Ignored while a solution is viewed, after the end, or on an empty trace.
    pub fn toggle_play(&mut self) -> bool {
        if self.viewing.is_some() || self.finished || self.steps.is_empty() {
            return self.playing;
        }
        self.playing = !self.playing;
        self.pending = Duration::ZERO;
        self.playing
    }

    /// Apply a speed slider value, returning the resulting per-step delay
    ///
    /// The slider is clamped to its range and snapped to its granularity;
    /// higher values mean shorter delays.
    pub fn set_speed(&mut self, slider: u64) -> Duration {
        let snapped = (slider.clamp(MIN_SPEED, MAX_SPEED) / SPEED_STEP) * SPEED_STEP;
        self.delay = Duration::from_millis(SPEED_INVERSION_MS - snapped);
        self.delay
    }

    /// Set the per-step delay directly, at least one millisecond
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.max(Duration::from_millis(1));
    }

    /// Feed elapsed time, returning how many steps were advanced
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if !self.playing || self.viewing.is_some() {
            return 0;
        }

        self.pending += elapsed;
        let mut advanced = 0;
        while self.playing && self.pending >= self.delay {
            self.pending -= self.delay;
            if self.next_step().is_some() {
                advanced += 1;
            }
        }

        if !self.playing {
            self.pending = Duration::ZERO;
        }
        advanced
    }

    /// Solutions revealed up to and including the current step
    pub fn discovered_solutions(&self) -> Vec<Solution<'a>> {
        let steps: &'a [Step] = self.steps;
        collect_solutions(steps.get(..=self.index).unwrap_or(&[]))
    }

    /// Pause and show a discovered solution
    ///
    /// # Errors
    ///
    /// Returns an error if no solution with this number has been reached yet
    pub fn view_solution(&mut self, number: usize) -> Result<&'a Board> {
        let board = self
            .discovered_solutions()
            .into_iter()
            .find(|solution| solution.number == number)
            .map(|solution| solution.board)
            .ok_or_else(|| {
                invalid_parameter("solution", &number, &"solution has not been discovered yet")
            })?;

        self.viewing = Some(number);
        self.playing = false;
        self.pending = Duration::ZERO;
        Ok(board)
    }

    /// Leave solution view and return to the trace, paused
    pub const fn resume(&mut self) {
        self.viewing = None;
        self.playing = false;
        self.pending = Duration::ZERO;
    }

    /// Cursor position within the trace, or within the solutions while viewing one
    pub fn progress(&self) -> Progress {
        match self.viewing {
            Some(number) => Progress {
                current: number,
                total: self.discovered_solutions().len(),
            },
            None if self.steps.is_empty() => Progress {
                current: 0,
                total: 0,
            },
            None => Progress {
                current: self.index + 1,
                total: self.steps.len(),
            },
        }
    }

    /// Short description of the playback state
    pub fn status(&self) -> String {
        if let Some(number) = self.viewing {
            format!("Viewing solution #{number}. Resume to return to the search.")
        } else if self.steps.is_empty() {
            "No steps to play.".to_string()
        } else if self.playing {
            "Playing...".to_string()
        } else if self.finished {
            "Visualization finished.".to_string()
        } else {
            "Paused. Use controls to navigate.".to_string()
        }
    }

    /// Message for the shown item, with squares in board notation
    pub fn display_message(&self) -> String {
        if let Some(number) = self.viewing {
            return format!("Displaying solution #{number}.");
        }
        self.current().map_or_else(String::new, |step| {
            relabel(step.message(), step.board().size())
        })
    }
}
