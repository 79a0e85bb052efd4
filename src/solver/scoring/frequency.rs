//! Letter-frequency scoring
//!
//! A word is worth the sum of how often each of its distinct letters occurs
//! across the candidates. Repeated letters count once, so words that probe
//! more common letters rank higher.

use super::Scorer;
use crate::core::Word;
use crate::error::Result;

/// Ranks candidates by [`frequency_score`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl Scorer for FrequencyScorer {
    fn scores(&self, candidates: &[&Word]) -> Result<Vec<f64>> {
        let histogram = letter_histogram(candidates);
        Ok(candidates
            .iter()
            .map(|word| f64::from(frequency_score(word, &histogram)))
            .collect())
    }
}

/// Count every letter occurrence across the candidates
#[must_use]
pub fn letter_histogram(candidates: &[&Word]) -> [u32; 26] {
    let mut histogram = [0u32; 26];
    for word in candidates {
        for &ch in word.chars() {
            histogram[(ch - b'a') as usize] += 1;
        }
    }
    histogram
}

/// Sum of histogram counts over the word's distinct letters
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::solver::scoring::{frequency_score, letter_histogram};
///
/// let words = [Word::new("eerie").unwrap(), Word::new("other").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
/// let histogram = letter_histogram(&refs);
///
/// // e occurs 4 times, r twice, i once; eerie counts each letter once
/// assert_eq!(frequency_score(&words[0], &histogram), 4 + 2 + 1);
/// ```
#[must_use]
pub fn frequency_score(word: &Word, histogram: &[u32; 26]) -> u32 {
    word.distinct_letters()
        .map(|ch| histogram[(ch - b'a') as usize])
        .sum()
}
