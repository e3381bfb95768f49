//! Progress display for family generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FAMILY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>8} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks one progress bar per family run
///
/// Combination counts are known up front, so each family gets a bounded bar
/// that ticks once per exported stimulus.
#[derive(Default)]
pub struct ProgressManager {
    current: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a bar for a family with a known combination count
    pub fn start_family(&mut self, name: &'static str, combinations: usize) {
        let bar = ProgressBar::new(combinations as u64);
        bar.set_style(FAMILY_STYLE.clone());
        bar.set_message(name);
        self.current = Some(bar);
    }

    /// Record one exported stimulus
    pub fn tick(&self) {
        if let Some(bar) = &self.current {
            bar.inc(1);
        }
    }

    /// Finish and release the active bar
    pub fn finish_family(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish();
        }
    }
}
