//! Batch progress display

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Kolams: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress across a batch of generated patterns
///
/// No bar is drawn for batches at or below the display threshold.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the display for `total` patterns
    pub fn initialize(&mut self, total: usize) {
        if total > PROGRESS_THRESHOLD {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is being drawn
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished pattern
    pub fn complete(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All kolams generated");
        }
    }
}
