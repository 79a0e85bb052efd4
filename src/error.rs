//! Error type shared by the library
//!
//! Filtering to an empty candidate list is not an error; callers see it as
//! an empty `Vec` or as [`Outcome::NoCandidates`](crate::solver::Outcome).

use crate::core::WordError;
use thiserror::Error;

/// Everything that can go wrong in the library
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// Two words (or a word and a pattern) of different lengths were combined
    #[error("length mismatch: expected {expected} letters, found {found}")]
    InvalidInput { expected: usize, found: usize },

    /// A scorer was asked to rank nothing
    #[error("cannot score an empty candidate list")]
    EmptyCandidates,

    /// Two observations confirm different letters at the same position
    #[error(
        "contradictory feedback at position {position}: '{existing}' already confirmed, got '{incoming}'"
    )]
    Contradiction {
        position: usize,
        existing: char,
        incoming: char,
    },

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("dictionary words must share one length: expected {expected}, '{word}' has {found}")]
    MixedLengths {
        expected: usize,
        found: usize,
        word: String,
    },

    #[error("dictionary is empty")]
    EmptyDictionary,

    /// Feedback arrived while no guess was outstanding
    #[error("feedback received but no guess is awaiting it")]
    UnexpectedFeedback,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt pattern table: {0}")]
    CorruptTable(String),
}

/// Library result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;
