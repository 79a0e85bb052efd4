//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::{ColoredString, Colorize};

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(word: &str, pattern: Pattern) -> String {
    word.chars()
        .zip(pattern.marks())
        .map(|(c, mark)| tile(c, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Hit => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Miss => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a word length can carry
///
/// A guess can split candidates into at most 3^len patterns.
#[must_use]
pub fn entropy_bar(entropy: f64, word_len: usize, width: usize) -> String {
    let max_entropy = word_len as f64 * 3f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}
