//! Generation progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generations computed for one run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for `generations` steps labelled with `label`
    pub fn new(label: &str, generations: u64) -> Self {
        let bar = ProgressBar::new(generations);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Report the generation just computed and the live population
    pub fn update(&self, generation: u64, population: usize) {
        self.bar.set_position(generation);
        self.bar.set_message(format!("population {population}"));
    }

    /// Finish the bar, leaving the final line on screen
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
