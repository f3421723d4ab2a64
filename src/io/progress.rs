//! Render progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// A progress bar advancing once per rendered cell
pub fn cell_progress(total_cells: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_cells);
    bar.set_style(CELL_STYLE.clone());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
