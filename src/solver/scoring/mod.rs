//! Candidate ranking
//!
//! Two interchangeable scorers behind the [`Scorer`] trait. Both rank by
//! descending score and break ties by ascending word order, so rankings are
//! reproducible.

mod entropy;
mod frequency;

pub use entropy::{EntropyScorer, GuessMetrics, shannon_entropy};
pub use frequency::{FrequencyScorer, frequency_score, letter_histogram};

use crate::core::Word;
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// A candidate with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Ranks a candidate list without modifying it
pub trait Scorer: Sync {
    /// Score every candidate, in input order
    ///
    /// Called with a non-empty list only.
    ///
    /// # Errors
    /// Implementations fail if the candidates cannot be compared with each other.
    fn scores(&self, candidates: &[&Word]) -> Result<Vec<f64>>;

    /// Candidates ordered best first
    ///
    /// # Errors
    /// [`Error::EmptyCandidates`] on an empty list.
    fn rank<'a>(&self, candidates: &[&'a Word]) -> Result<Vec<ScoredWord<'a>>> {
        if candidates.is_empty() {
            return Err(Error::EmptyCandidates);
        }

        let mut ranked: Vec<ScoredWord<'a>> = candidates
            .iter()
            .zip(self.scores(candidates)?)
            .map(|(&word, score)| ScoredWord { word, score })
            .collect();
        ranked.sort_by(rank_order);
        Ok(ranked)
    }

    /// The top-ranked candidate
    ///
    /// # Errors
    /// [`Error::EmptyCandidates`] on an empty list.
    fn best<'a>(&self, candidates: &[&'a Word]) -> Result<&'a Word> {
        if candidates.is_empty() {
            return Err(Error::EmptyCandidates);
        }

        candidates
            .iter()
            .zip(self.scores(candidates)?)
            .map(|(&word, score)| ScoredWord { word, score })
            .min_by(rank_order)
            .map(|best| best.word)
            .ok_or(Error::EmptyCandidates)
    }
}

/// Higher score first, then alphabetical
fn rank_order(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.word.cmp(b.word))
}
