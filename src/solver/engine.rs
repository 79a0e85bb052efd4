//! Main solver interface
//!
//! A [`Solver`] holds what every game shares (dictionary, strategy, config)
//! and hands out [`Session`]s, each one game driven through
//! `Start → AwaitingFeedback → Filtering → Start | Solved | Exhausted | NoCandidates`.

use super::config::SolverConfig;
use super::strategy::{Strategy, random_pick};
use super::table::PairwisePatternTable;
use crate::constraints::{ConstraintSet, filter};
use crate::core::{Pattern, Word, compare};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::OnceLock;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready to produce the next guess
    Start,
    /// A guess is out, waiting for its pattern
    AwaitingFeedback,
    /// Narrowing the candidates with fresh feedback
    Filtering,
    Solved { steps: usize },
    /// Step budget spent without solving
    Exhausted { steps: usize },
    /// No dictionary word fits the feedback
    NoCandidates { steps: usize },
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Solved { .. } | Self::Exhausted { .. } | Self::NoCandidates { .. }
        )
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Exhausted,
    NoCandidates,
}

/// One guess and what it did to the candidate list
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Picked at random rather than by the strategy
    pub explored: bool,
}

/// A finished game against a known secret
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub secret: Word,
    pub outcome: Outcome,
    pub steps: Vec<StepRecord>,
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Number of guesses played
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Main solver
///
/// Shared read-only between games; every game gets its own [`Session`].
/// The strategy's opening guess over the full dictionary is computed once
/// and reused.
#[derive(Debug)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    strategy: Strategy<'a>,
    config: SolverConfig,
    opening: OnceLock<&'a Word>,
}

impl<'a> Solver<'a> {
    /// Create a solver that compares words on demand
    ///
    /// # Errors
    /// [`Error::NotInDictionary`] if the configured opening is not a dictionary word.
    pub fn new(dictionary: &'a Dictionary, config: SolverConfig) -> Result<Self> {
        Self::build(dictionary, config, None)
    }

    /// Create a solver whose entropy scoring reads from a prebuilt table
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_table(
        dictionary: &'a Dictionary,
        config: SolverConfig,
        table: &'a PairwisePatternTable,
    ) -> Result<Self> {
        Self::build(dictionary, config, Some(table))
    }

    fn build(
        dictionary: &'a Dictionary,
        config: SolverConfig,
        table: Option<&'a PairwisePatternTable>,
    ) -> Result<Self> {
        if let Some(opening) = &config.opening {
            dictionary.require(opening.text())?;
        }

        Ok(Self {
            dictionary,
            strategy: Strategy::from_kind(config.strategy, table),
            config,
            opening: OnceLock::new(),
        })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy<'a> {
        &self.strategy
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// First guess of every game
    ///
    /// The configured opening when there is one, otherwise the strategy's
    /// pick over the whole dictionary. Random openings are drawn per call.
    ///
    /// # Errors
    /// Propagates scorer failures.
    pub fn opening_guess<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Word> {
        if let Some(opening) = &self.config.opening {
            return self.dictionary.require(opening.text());
        }

        if let Some(&cached) = self.opening.get() {
            return Ok(cached);
        }

        let all: Vec<&'a Word> = self.dictionary.words().iter().collect();
        let Some(scorer) = self.strategy.scorer() else {
            return random_pick(&all, rng);
        };

        let best = scorer.best(&all)?;
        debug!("opening guess for {} strategy: {best}", self.strategy.kind().name());
        Ok(*self.opening.get_or_init(|| best))
    }

    /// Start a new game
    #[must_use]
    pub fn session(&self) -> Session<'_, 'a> {
        let rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Session {
            solver: self,
            rng,
            constraints: ConstraintSet::new(),
            candidates: self.dictionary.words().iter().collect(),
            pending: None,
            phase: Phase::Start,
            steps: Vec::new(),
        }
    }

    /// Play a whole game against a known secret
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if the secret's length differs from the dictionary's
    /// - scorer failures
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::{Outcome, Solver, SolverConfig};
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think", "arose"]).unwrap();
    /// let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();
    ///
    /// let result = solver.solve(&Word::new("think").unwrap()).unwrap();
    /// assert_eq!(result.outcome, Outcome::Solved);
    /// assert_eq!(result.steps.last().unwrap().guess.text(), "think");
    /// ```
    pub fn solve(&self, secret: &Word) -> Result<SolveOutcome> {
        if secret.len() != self.dictionary.word_len() {
            return Err(Error::InvalidInput {
                expected: self.dictionary.word_len(),
                found: secret.len(),
            });
        }

        let mut session = self.session();
        while let Some(guess) = session.next_guess()? {
            session.record_feedback(compare(secret, guess)?)?;
        }

        Ok(session.finish(secret.clone()))
    }
}

/// One game in progress
pub struct Session<'s, 'a> {
    solver: &'s Solver<'a>,
    rng: StdRng,
    constraints: ConstraintSet,
    candidates: Vec<&'a Word>,
    pending: Option<(&'a Word, bool)>,
    phase: Phase,
    steps: Vec<StepRecord>,
}

impl<'a> Session<'_, 'a> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Words still consistent with the feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// The guess to play next, or `None` once the game is over
    ///
    /// Asking again before feedback arrives returns the same guess.
    ///
    /// # Errors
    /// Propagates scorer failures.
    pub fn next_guess(&mut self) -> Result<Option<&'a Word>> {
        match self.phase {
            Phase::AwaitingFeedback => return Ok(self.pending.map(|(guess, _)| guess)),
            Phase::Start => {}
            _ => return Ok(None),
        }

        let step = self.steps.len();
        let config = &self.solver.config;
        if step >= config.max_steps {
            self.phase = Phase::Exhausted { steps: step };
            debug!("step budget of {} spent", config.max_steps);
            return Ok(None);
        }

        let explored = step > 0 && step <= config.explore_steps;
        let guess = if step == 0 {
            self.solver.opening_guess(&mut self.rng)?
        } else if explored {
            random_pick(&self.candidates, &mut self.rng)?
        } else {
            self.solver.strategy.select(&self.candidates, &mut self.rng)?
        };

        debug!(
            "step {}: guessing {guess}{} with {} candidates",
            step + 1,
            if explored { " (explore)" } else { "" },
            self.candidates.len()
        );
        self.pending = Some((guess, explored));
        self.phase = Phase::AwaitingFeedback;
        Ok(Some(guess))
    }

    /// Apply the pattern for the outstanding guess
    ///
    /// On error the session is unchanged, so corrected feedback can be retried.
    ///
    /// # Errors
    /// - [`Error::UnexpectedFeedback`] if no guess is outstanding
    /// - [`Error::InvalidInput`] if the pattern length differs from the guess
    /// - [`Error::Contradiction`] if the pattern disagrees with earlier feedback
    pub fn record_feedback(&mut self, pattern: Pattern) -> Result<Phase> {
        let (guess, explored) = match (self.phase, self.pending) {
            (Phase::AwaitingFeedback, Some(pending)) => pending,
            _ => return Err(Error::UnexpectedFeedback),
        };

        self.constraints.observe(guess, pattern)?;
        self.phase = Phase::Filtering;

        let before = self.candidates.len();
        self.candidates = filter(self.candidates.iter().copied(), &self.constraints);
        self.pending = None;
        self.steps.push(StepRecord {
            guess: guess.clone(),
            pattern,
            candidates_before: before,
            candidates_after: self.candidates.len(),
            explored,
        });

        let steps = self.steps.len();
        self.phase = if pattern.is_perfect() {
            Phase::Solved { steps }
        } else if self.candidates.is_empty() {
            Phase::NoCandidates { steps }
        } else if steps >= self.solver.config.max_steps {
            Phase::Exhausted { steps }
        } else {
            Phase::Start
        };

        debug!(
            "{guess} -> {pattern}: {before} -> {} candidates, {:?}",
            self.candidates.len(),
            self.phase
        );
        Ok(self.phase)
    }

    /// Close the game and report it
    #[must_use]
    pub fn finish(self, secret: Word) -> SolveOutcome {
        let outcome = match self.phase {
            Phase::Solved { .. } => Outcome::Solved,
            Phase::NoCandidates { .. } => Outcome::NoCandidates,
            _ => Outcome::Exhausted,
        };

        SolveOutcome {
            secret,
            outcome,
            steps: self.steps,
        }
    }
}
