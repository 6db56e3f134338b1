//! Progress display for the per-tiling coloring searches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tilings: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tilings have been searched and how many colorings were found
pub struct SearchProgress {
    bar: ProgressBar,
    colorings: usize,
}

impl SearchProgress {
    /// Create a progress bar over `tiling_count` coloring searches
    pub fn new(tiling_count: usize) -> Self {
        let bar = ProgressBar::new(tiling_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, colorings: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            colorings: 0,
        }
    }

    /// Record a finished coloring search
    pub fn tiling_done(&mut self, colorings: usize) {
        self.colorings += colorings;
        self.bar.set_message(format!("{} colorings", self.colorings));
        self.bar.inc(1);
    }

    /// Total colorings recorded so far
    pub const fn colorings(&self) -> usize {
        self.colorings
    }

    /// Run `f` with the bar hidden so printed output does not interleave with it
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.bar.suspend(f)
    }

    /// Remove the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
