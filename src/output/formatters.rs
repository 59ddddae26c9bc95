//! Formatting utilities for terminal output

use crate::core::Letter;

/// Join letters with single spaces, e.g. `A B C`
#[must_use]
pub fn letters_line(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar, one cell per attempt
#[must_use]
pub fn attempts_bar(remaining: u8, max: u8) -> String {
    create_progress_bar(f64::from(remaining), f64::from(max), usize::from(max))
}
