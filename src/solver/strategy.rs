//! Guess selection strategies
//!
//! One enum over the scorers plus the random pick used for exploration.

use super::config::StrategyKind;
use super::scoring::{EntropyScorer, FrequencyScorer, Scorer};
use super::table::PairwisePatternTable;
use crate::core::Word;
use crate::error::{Error, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'t> {
    /// Highest letter-frequency score
    Frequency(FrequencyScorer),
    /// Highest outcome entropy
    Entropy(EntropyScorer<'t>),
    /// Uniform random pick from the candidates
    Random,
}

impl<'t> Strategy<'t> {
    /// Build the strategy for a configured kind
    ///
    /// The table only matters to the entropy strategy.
    #[must_use]
    pub fn from_kind(kind: StrategyKind, table: Option<&'t PairwisePatternTable>) -> Self {
        match kind {
            StrategyKind::Frequency => Self::Frequency(FrequencyScorer),
            StrategyKind::Entropy => Self::Entropy(
                table.map_or_else(EntropyScorer::new, EntropyScorer::with_table),
            ),
            StrategyKind::Random => Self::Random,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::Random => StrategyKind::Random,
        }
    }

    /// The scorer behind this strategy; random picks have none
    #[must_use]
    pub fn scorer(&self) -> Option<&dyn Scorer> {
        match self {
            Self::Frequency(s) => Some(s),
            Self::Entropy(s) => Some(s),
            Self::Random => None,
        }
    }

    /// Pick the next guess from the candidates
    ///
    /// # Errors
    /// [`Error::EmptyCandidates`] on an empty list, or a scorer failure.
    pub fn select<'a, R: Rng + ?Sized>(&self, candidates: &[&'a Word], rng: &mut R) -> Result<&'a Word> {
        match self.scorer() {
            Some(scorer) => scorer.best(candidates),
            None => random_pick(candidates, rng),
        }
    }
}

/// Uniform random choice from the candidates
///
/// # Errors
/// [`Error::EmptyCandidates`] on an empty list.
pub fn random_pick<'a, R: Rng + ?Sized>(candidates: &[&'a Word], rng: &mut R) -> Result<&'a Word> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(Error::EmptyCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_test_data() -> Vec<Word> {
        ["hoard", "wharf", "think", "arose", "other"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn frequency_strategy_matches_scorer() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let strategy = Strategy::from_kind(StrategyKind::Frequency, None);
        assert_eq!(strategy.kind(), StrategyKind::Frequency);
        assert_eq!(
            strategy.select(&refs, &mut rng).unwrap(),
            FrequencyScorer.best(&refs).unwrap()
        );
    }

    #[test]
    fn entropy_strategy_selects_candidate() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let strategy = Strategy::from_kind(StrategyKind::Entropy, None);
        let guess = strategy.select(&refs, &mut rng).unwrap();
        assert!(refs.contains(&guess));
        assert_eq!(guess, EntropyScorer::new().best(&refs).unwrap());
    }

    #[test]
    fn random_strategy_is_seed_reproducible() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();
        let strategy = Strategy::from_kind(StrategyKind::Random, None);
        assert!(strategy.scorer().is_none());

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| strategy.select(&refs, &mut rng).unwrap().text())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
        assert!(picks(42).iter().all(|w| refs.iter().any(|r| r.text() == *w)));
    }

    #[test]
    fn random_pick_of_one_is_that_word() {
        let words = setup_test_data();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_pick(&[&words[2]], &mut rng).unwrap().text(), "think");
    }

    #[test]
    fn empty_candidates_fail_for_every_strategy() {
        let mut rng = StdRng::seed_from_u64(0);
        for kind in [StrategyKind::Frequency, StrategyKind::Entropy, StrategyKind::Random] {
            let strategy = Strategy::from_kind(kind, None);
            assert!(matches!(
                strategy.select(&[], &mut rng),
                Err(Error::EmptyCandidates)
            ));
        }
    }
}
