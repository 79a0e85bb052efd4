//! Shannon entropy scoring
//!
//! Given a guess and set of candidates, computes the expected information gain.

use super::Scorer;
use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::solver::table::PairwisePatternTable;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Ranks candidates by the entropy of the patterns they would split the list into
///
/// Patterns come from the injected [`PairwisePatternTable`] when it knows both
/// words, and from a live comparison otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyScorer<'t> {
    table: Option<&'t PairwisePatternTable>,
}

impl<'t> EntropyScorer<'t> {
    /// Scorer that compares words on demand
    #[must_use]
    pub const fn new() -> Self {
        Self { table: None }
    }

    /// Scorer that reads patterns from a prebuilt table
    #[must_use]
    pub const fn with_table(table: &'t PairwisePatternTable) -> Self {
        Self { table: Some(table) }
    }

    fn pattern(&self, guess: &Word, secret: &Word) -> Result<Pattern> {
        match self.table.and_then(|t| t.lookup(guess, secret)) {
            Some(pattern) => Ok(pattern),
            None => Pattern::calculate(guess, secret),
        }
    }

    /// Group candidates by the pattern they produce with the guess
    ///
    /// # Errors
    /// Fails if a candidate's length differs from the guess.
    pub fn partition(&self, guess: &Word, candidates: &[&Word]) -> Result<FxHashMap<Pattern, usize>> {
        let mut counts = FxHashMap::default();

        for &candidate in candidates {
            let pattern = self.pattern(guess, candidate)?;
            *counts.entry(pattern).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Calculate Shannon entropy for a guess against candidates
    ///
    /// # Errors
    /// Fails if a candidate's length differs from the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::scoring::EntropyScorer;
    ///
    /// let guess = Word::new("other").unwrap();
    /// let candidates = vec![
    ///     Word::new("other").unwrap(),
    ///     Word::new("quick").unwrap(),
    /// ];
    /// let candidate_refs: Vec<&Word> = candidates.iter().collect();
    ///
    /// let entropy = EntropyScorer::new().entropy(&guess, &candidate_refs).unwrap();
    /// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely outcomes
    /// ```
    pub fn entropy(&self, guess: &Word, candidates: &[&Word]) -> Result<f64> {
        Ok(shannon_entropy(&self.partition(guess, candidates)?))
    }

    /// Calculate comprehensive metrics for a guess
    ///
    /// Returns entropy, expected remaining candidates, and max partition size.
    ///
    /// # Errors
    /// Fails if a candidate's length differs from the guess.
    pub fn metrics(&self, guess: &Word, candidates: &[&Word]) -> Result<GuessMetrics> {
        if candidates.is_empty() {
            return Ok(GuessMetrics {
                entropy: 0.0,
                expected_remaining: 0.0,
                max_partition: 0,
            });
        }

        let counts = self.partition(guess, candidates)?;
        let total = candidates.len() as f64;

        // Calculate expected remaining candidates
        let expected_remaining: f64 = counts
            .values()
            .map(|&size| {
                let p = size as f64 / total;
                p * size as f64
            })
            .sum();

        Ok(GuessMetrics {
            entropy: shannon_entropy(&counts),
            expected_remaining,
            max_partition: counts.values().copied().max().unwrap_or(0),
        })
    }
}

impl Scorer for EntropyScorer<'_> {
    fn scores(&self, candidates: &[&Word]) -> Result<Vec<f64>> {
        candidates
            .par_iter()
            .map(|&guess| self.entropy(guess, candidates))
            .collect()
    }
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_sieve::solver::scoring::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_sieve::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::from_raw(0, 5), 25);
/// uniform.insert(Pattern::from_raw(1, 5), 25);
/// uniform.insert(Pattern::from_raw(2, 5), 25);
/// uniform.insert(Pattern::from_raw(3, 5), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::wordlists::Dictionary;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn raw(code: u32) -> Pattern {
        Pattern::from_raw(code, 5)
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let counts: FxHashMap<Pattern, usize> = (0..4).map(|c| (raw(c), 1)).collect();
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(raw(0), 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let uniform: FxHashMap<Pattern, usize> = (0..4).map(|c| (raw(c), 25)).collect();
        let skewed: FxHashMap<Pattern, usize> =
            [(raw(0), 97), (raw(1), 1), (raw(2), 1), (raw(3), 1)].into_iter().collect();

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_all_same_pattern_is_zero() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["think", "wharf", "hoard"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = EntropyScorer::new().entropy(&guess, &refs).unwrap();
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn metrics_report_partition_shape() {
        let guess = Word::new("other").unwrap();
        let candidates = words(&["other", "ether", "quick", "dizzy"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = EntropyScorer::new().metrics(&guess, &refs).unwrap();
        // quick and dizzy both give rrrrr
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-9);
        assert!((metrics.entropy - 1.5).abs() < 1e-9);
    }

    #[test]
    fn ranks_most_informative_first() {
        let candidates = words(&["hoard", "wharf", "think", "arose", "other"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let ranked = EntropyScorer::new().rank(&refs).unwrap();
        assert_eq!(ranked.len(), refs.len());
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || ((pair[0].score - pair[1].score).abs() < f64::EPSILON
                        && pair[0].word < pair[1].word)
            );
        }
    }

    #[test]
    fn table_and_live_comparison_agree() {
        let dictionary = Dictionary::embedded().unwrap();
        let table = PairwisePatternTable::build(&dictionary);
        let refs: Vec<&Word> = dictionary.words().iter().take(60).collect();

        let live = EntropyScorer::new().rank(&refs).unwrap();
        let cached = EntropyScorer::with_table(&table).rank(&refs).unwrap();
        assert_eq!(live, cached);
    }

    #[test]
    fn mismatched_candidate_length_is_invalid_input() {
        let guess = Word::new("other").unwrap();
        let short = Word::new("cat").unwrap();
        let result = EntropyScorer::new().entropy(&guess, &[&short]);
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn empty_metrics_are_zero() {
        let guess = Word::new("other").unwrap();
        let metrics = EntropyScorer::new().metrics(&guess, &[]).unwrap();
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
