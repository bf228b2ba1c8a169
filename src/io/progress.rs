//! Progress display while rendering animation frames

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} frames"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar that can be silenced
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Visible bar, sized once the frame count is known
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(RENDER_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Bar that draws only when `visible`
    pub fn for_frames(label: &str, visible: bool) -> Self {
        if visible {
            Self::new(label)
        } else {
            Self::hidden()
        }
    }

    /// Restart the count for `total` frames
    pub fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    /// Count one rendered frame
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal, returning the frames counted
    pub fn finish(&self) -> u64 {
        let rendered = self.bar.position();
        self.bar.finish_and_clear();
        rendered
    }
}
