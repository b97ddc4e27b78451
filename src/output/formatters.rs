//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Format feedback as colored letter tiles
#[must_use]
pub fn feedback_colored(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, mark)| {
            let cell = format!(" {} ", letter as char);
            match mark {
                Mark::Exact => cell.bold().white().on_green().to_string(),
                Mark::Misplaced => cell.bold().black().on_yellow().to_string(),
                Mark::Absent => cell.white().on_truecolor(120, 120, 120).to_string(),
            }
        })
        .collect()
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_emoji(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(_, mark)| match mark {
            Mark::Exact => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
