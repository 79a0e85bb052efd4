//! Solver configuration

use crate::core::Word;

/// Default step budget, the usual six rows of the board
pub const DEFAULT_MAX_STEPS: usize = 6;

/// Which policy picks guesses from the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Letter-frequency score over the candidates
    #[default]
    Frequency,
    /// Entropy of the outcome partition
    Entropy,
    /// Uniform random pick from the candidates
    Random,
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "freq", "entropy", "random", "explore".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy,
            "random" | "explore" => Self::Random,
            _ => Self::Frequency,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Entropy => "entropy",
            Self::Random => "random",
        }
    }
}

/// Configuration for one solver, shared by every solve it runs
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub strategy: StrategyKind,
    /// Guesses allowed before giving up
    pub max_steps: usize,
    /// Guesses after the opening that are random picks from the candidates
    pub explore_steps: usize,
    /// Fixed first guess; when absent the strategy picks over the whole dictionary
    pub opening: Option<Word>,
    /// Seed for the random picks; fresh entropy from the OS when absent
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_steps: DEFAULT_MAX_STEPS,
            explore_steps: 0,
            opening: None,
            seed: None,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub const fn with_explore_steps(mut self, explore_steps: usize) -> Self {
        self.explore_steps = explore_steps;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = Some(opening);
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
