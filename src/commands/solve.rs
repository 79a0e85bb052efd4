//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word, compare};
use crate::error::{Error, Result};
use crate::solver::scoring::{EntropyScorer, GuessMetrics};
use crate::solver::{Outcome, Solver};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub explored: bool,
    /// Entropy metrics of the guess against the candidates it faced; absent
    /// when only one candidate was left
    pub metrics: Option<GuessMetrics>,
}

/// Solve a specific word, recording how each guess split the candidates
///
/// The target does not have to be in the dictionary; when it is not, the
/// game ends with [`Outcome::NoCandidates`].
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - The target's length differs from the dictionary's
/// - A scorer fails
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveResult> {
    let target_word = Word::new(target)?;
    // Reject a bad length before any game state exists
    if target_word.len() != solver.dictionary().word_len() {
        return Err(Error::InvalidInput {
            expected: solver.dictionary().word_len(),
            found: target_word.len(),
        });
    }

    let measure = EntropyScorer::new();
    let mut session = solver.session();
    let mut metrics = Vec::new();

    while let Some(guess) = session.next_guess()? {
        let candidates = session.candidates();
        metrics.push(if candidates.len() > 1 {
            Some(measure.metrics(guess, candidates)?)
        } else {
            None
        });
        session.record_feedback(compare(&target_word, guess)?)?;
    }

    let finished = session.finish(target_word);
    let guesses = finished
        .steps
        .into_iter()
        .zip(metrics)
        .map(|(step, metrics)| GuessStep {
            word: step.guess.text().to_string(),
            pattern: step.pattern,
            candidates_before: step.candidates_before,
            candidates_after: step.candidates_after,
            explored: step.explored,
            metrics,
        })
        .collect();

    Ok(SolveResult {
        target: finished.secret.text().to_string(),
        outcome: finished.outcome,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, StrategyKind};
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::embedded().unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::new(StrategyKind::Entropy)).unwrap();

        let result = solve_word(&solver, "wharf").unwrap();

        assert!(result.success() || result.guesses.len() == 6);
        assert!(!result.guesses.is_empty());
        assert_eq!(result.target, "wharf");
    }

    #[test]
    fn solve_records_history() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();

        let result = solve_word(&solver, "hoard").unwrap();

        assert_eq!(result.guesses[0].candidates_before, dictionary.len());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            if let Some(metrics) = step.metrics {
                assert!(metrics.entropy >= 0.0);
                assert!(metrics.max_partition <= step.candidates_before);
            }
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();

        assert!(matches!(
            solve_word(&solver, "zz1zz"),
            Err(Error::InvalidWord(_))
        ));
        assert!(matches!(
            solve_word(&solver, "cat"),
            Err(Error::InvalidInput { expected: 5, found: 3 })
        ));
    }

    #[test]
    fn solve_word_outside_dictionary_runs_out_of_candidates() {
        let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think"]).unwrap();
        let config = SolverConfig::default().with_max_steps(dictionary.len());
        let solver = Solver::new(&dictionary, config).unwrap();

        let result = solve_word(&solver, "quiet").unwrap();
        assert_eq!(result.outcome, Outcome::NoCandidates);
        assert!(!result.success());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let dictionary = dictionary();
        let config = SolverConfig::default().with_max_steps(2);
        let solver = Solver::new(&dictionary, config).unwrap();

        let result = solve_word(&solver, "eerie").unwrap();
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn solve_perfect_first_guess() {
        let dictionary = dictionary();
        let config = SolverConfig::default().with_opening(Word::new("arose").unwrap());
        let solver = Solver::new(&dictionary, config).unwrap();

        let result = solve_word(&solver, "arose").unwrap();
        assert!(result.success());
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].word, "arose");
        assert!(result.guesses[0].pattern.is_perfect());
    }
}
