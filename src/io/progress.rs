//! Progress tracking for batch maze generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Mazes: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of consecutive seeds
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar drawn to the terminal
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that tracks counts without drawing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Show which seed is being processed
    pub fn start_maze(&self, seed: i64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Count one finished maze
    pub fn complete_maze(&self) {
        self.bar.inc(1);
    }

    /// Number of finished mazes
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of mazes in the batch
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Run `f` with the bar hidden so terminal output does not interleave
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Leave the bar in its completed state
    pub fn finish(&self) {
        self.bar.finish_with_message("All mazes generated");
    }
}
