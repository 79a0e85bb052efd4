//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Dictionary;
use crate::core::Word;
use crate::error::Result;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and blank lines skipped. Lines that are not valid words
/// are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise the errors of
/// [`Dictionary::new`].
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::new(parse_lines(&content))?;

    info!(
        "loaded {} words of length {} from {}",
        dictionary.len(),
        dictionary.word_len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse word-per-line text, skipping blanks and invalid entries
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping line {}: {trimmed:?}: {e}", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
/// use wordle_sieve::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
