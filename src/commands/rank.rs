//! Candidate ranking command
//!
//! Replays an observation history and lists the best next guesses.

use crate::constraints::{ConstraintSet, filter};
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::solver::scoring::{EntropyScorer, GuessMetrics, Scorer};
use crate::wordlists::Dictionary;

/// One ranked candidate
#[derive(Debug, Clone)]
pub struct RankedGuess {
    pub word: String,
    pub score: f64,
    pub metrics: GuessMetrics,
}

/// Result of ranking the candidates left by a history
#[derive(Debug, Clone)]
pub struct RankResult {
    pub constraints: ConstraintSet,
    pub total_candidates: usize,
    /// Best first, at most the requested number
    pub ranked: Vec<RankedGuess>,
}

/// Rank the dictionary words consistent with `history`
///
/// An empty candidate list gives an empty ranking rather than an error.
///
/// # Errors
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) if a pattern's length differs from its guess
/// - [`Error::Contradiction`](crate::Error::Contradiction) if the history disagrees with itself
///
/// # Examples
/// ```
/// use wordle_sieve::commands::rank_candidates;
/// use wordle_sieve::core::{Pattern, Word};
/// use wordle_sieve::solver::scoring::FrequencyScorer;
/// use wordle_sieve::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think", "shard"]).unwrap();
/// let history = [(Word::new("think").unwrap(), Pattern::from_str("rgrrr").unwrap())];
///
/// let result = rank_candidates(&dictionary, &FrequencyScorer, &history, 5).unwrap();
/// assert_eq!(result.total_candidates, 2);
/// assert_eq!(result.ranked[0].word, "shard"); // ties with wharf, wins alphabetically
/// ```
pub fn rank_candidates(
    dictionary: &Dictionary,
    scorer: &dyn Scorer,
    history: &[(Word, Pattern)],
    top: usize,
) -> Result<RankResult> {
    let constraints = ConstraintSet::from_history(history)?;
    let candidates = filter(dictionary.words(), &constraints);

    if candidates.is_empty() {
        return Ok(RankResult {
            constraints,
            total_candidates: 0,
            ranked: Vec::new(),
        });
    }

    let measure = EntropyScorer::new();
    let ranked = scorer
        .rank(&candidates)?
        .into_iter()
        .take(top)
        .map(|scored| {
            Ok(RankedGuess {
                word: scored.word.text().to_string(),
                score: scored.score,
                metrics: measure.metrics(scored.word, &candidates)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RankResult {
        constraints,
        total_candidates: candidates.len(),
        ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare;
    use crate::error::Error;
    use crate::solver::scoring::FrequencyScorer;

    fn observation(secret: &str, guess: &str) -> (Word, Pattern) {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let pattern = compare(&secret, &guess).unwrap();
        (guess, pattern)
    }

    #[test]
    fn empty_history_ranks_whole_dictionary() {
        let dictionary = Dictionary::embedded().unwrap();
        let result = rank_candidates(&dictionary, &FrequencyScorer, &[], 10).unwrap();

        assert_eq!(result.total_candidates, dictionary.len());
        assert_eq!(result.ranked.len(), 10);
        assert!(result.constraints.is_empty());
        for pair in result.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn history_narrows_candidates() {
        let dictionary = Dictionary::embedded().unwrap();
        let history = [observation("solar", "arose"), observation("solar", "think")];

        let result = rank_candidates(&dictionary, &EntropyScorer::new(), &history, 3).unwrap();

        assert!(result.total_candidates < dictionary.len());
        assert!(result.ranked.len() <= 3);
        assert!(
            filter(dictionary.words(), &result.constraints)
                .iter()
                .any(|w| w.text() == "solar")
        );
    }

    #[test]
    fn impossible_history_gives_empty_ranking() {
        let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think"]).unwrap();
        let history = [(Word::new("zzzzz").unwrap(), Pattern::perfect(5))];

        let result = rank_candidates(&dictionary, &FrequencyScorer, &history, 5).unwrap();
        assert_eq!(result.total_candidates, 0);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn contradictory_history_is_an_error() {
        let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think"]).unwrap();
        let history = [
            (Word::new("hoard").unwrap(), Pattern::from_str("grrrr").unwrap()),
            (Word::new("think").unwrap(), Pattern::from_str("grrrr").unwrap()),
        ];

        assert!(matches!(
            rank_candidates(&dictionary, &FrequencyScorer, &history, 5),
            Err(Error::Contradiction { position: 0, .. })
        ));
    }
}
