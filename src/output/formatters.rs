//! Formatting utilities for terminal output

use crate::search::Path;

/// Format a path as `CAT → COT → COG`
#[must_use]
pub fn format_path(path: &Path) -> String {
    path.words()
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an edge weight relative to the heaviest edge shown
#[must_use]
pub fn weight_bar(weight: f64, max_weight: f64, width: usize) -> String {
    create_progress_bar(weight, max_weight, width)
}
