//! Batch progress display
//!
//! One bar over all outputs of a run. Generation itself is near-instant,
//! so there is no per-artwork iteration display; the bar tracks files
//! written or skipped.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Artworks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the progress display for a batch run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the total number of outputs
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the output currently being generated
    pub fn start_output(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Mark one output as done
    pub fn complete_output(&self) {
        self.bar.inc(1);
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All artworks generated");
    }
}
