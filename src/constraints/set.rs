//! Accumulated knowledge about the secret
//!
//! A [`ConstraintSet`] folds (guess, pattern) observations into three parts:
//! confirmed letters per position, letters known present but not at a given
//! position, and letters known absent.

use crate::core::{Mark, Pattern, Word};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Matches, misplaced letters and exclusions gathered from feedback
///
/// Misplaced letters are keyed by position because a repeated letter can be
/// confirmed at one position and rejected at another in the same guess.
///
/// Invariant: no letter confirmed in `matches` is ever in `excluded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    matches: BTreeMap<usize, u8>,
    misplaced: BTreeMap<usize, BTreeSet<u8>>,
    excluded: BTreeSet<u8>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole guess history into a fresh set
    ///
    /// # Errors
    /// Propagates the first error from [`observe`](Self::observe).
    pub fn from_history(history: &[(Word, Pattern)]) -> Result<Self> {
        let mut set = Self::new();
        for (guess, pattern) in history {
            set.observe(guess, *pattern)?;
        }
        Ok(set)
    }

    /// Positions confirmed exact
    #[must_use]
    pub const fn matches(&self) -> &BTreeMap<usize, u8> {
        &self.matches
    }

    /// Letters present in the secret but not at the keyed position
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeMap<usize, BTreeSet<u8>> {
        &self.misplaced
    }

    /// Letters absent from the secret
    #[must_use]
    pub const fn excluded(&self) -> &BTreeSet<u8> {
        &self.excluded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.misplaced.is_empty() && self.excluded.is_empty()
    }

    /// Whether the letter is known to occur in the secret
    #[must_use]
    pub fn confirms_present(&self, letter: u8) -> bool {
        self.matches.values().any(|&l| l == letter)
            || self.misplaced.values().any(|set| set.contains(&letter))
    }

    /// Fold one observation into the set
    ///
    /// - Hit: the letter is recorded as the match for its position
    /// - Present: the letter joins the misplaced set of its position
    /// - Miss: the letter is excluded, unless it is confirmed present by this
    ///   observation or an earlier one. A repeated letter can be a hit or
    ///   present at one occurrence and a miss at another; excluding it would
    ///   eliminate the secret. Such a miss is recorded as misplaced at its
    ///   position instead, since the letter is present but not there.
    ///
    /// The set is left untouched when an error is returned.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if the pattern length differs from the guess
    /// - [`Error::Contradiction`] if a hit disagrees with an earlier match
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::constraints::ConstraintSet;
    /// use wordle_sieve::core::{Pattern, Word};
    ///
    /// // "geese" against "other": one e is present, the others miss
    /// let guess = Word::new("geese").unwrap();
    /// let pattern = Pattern::from_str("ryrrr").unwrap();
    ///
    /// let mut set = ConstraintSet::new();
    /// set.observe(&guess, pattern).unwrap();
    /// assert!(!set.excluded().contains(&b'e'));
    /// assert!(set.excluded().contains(&b'g'));
    /// ```
    pub fn observe(&mut self, guess: &Word, pattern: Pattern) -> Result<()> {
        if guess.len() != pattern.len() {
            return Err(Error::InvalidInput {
                expected: guess.len(),
                found: pattern.len(),
            });
        }

        let mut present_here = [false; 26];
        for (i, mark) in pattern.marks().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Hit => {
                    self.check_match(i, letter)?;
                    present_here[letter_index(letter)] = true;
                }
                Mark::Present => present_here[letter_index(letter)] = true,
                Mark::Miss => {}
            }
        }

        for (i, mark) in pattern.marks().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Hit => {
                    self.matches.insert(i, letter);
                    self.excluded.remove(&letter);
                }
                Mark::Present => {
                    self.misplaced.entry(i).or_default().insert(letter);
                    self.excluded.remove(&letter);
                }
                Mark::Miss => {
                    if present_here[letter_index(letter)] || self.confirms_present(letter) {
                        self.misplaced.entry(i).or_default().insert(letter);
                    } else {
                        self.excluded.insert(letter);
                    }
                }
            }
        }

        Ok(())
    }

    /// Value form of [`observe`](Self::observe)
    ///
    /// # Errors
    /// Same as [`observe`](Self::observe).
    pub fn observed(&self, guess: &Word, pattern: Pattern) -> Result<Self> {
        let mut next = self.clone();
        next.observe(guess, pattern)?;
        Ok(next)
    }

    /// Union another set into this one
    ///
    /// Matches must agree position by position; misplaced sets and exclusions
    /// are unioned. Exclusions of letters the union confirms present are
    /// dropped. The set is left untouched when an error is returned.
    ///
    /// # Errors
    /// Returns [`Error::Contradiction`] if both sets confirm different letters
    /// at the same position.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        for (&position, &letter) in &other.matches {
            self.check_match(position, letter)?;
        }

        self.matches.extend(other.matches.iter().map(|(&i, &l)| (i, l)));
        for (&position, letters) in &other.misplaced {
            self.misplaced
                .entry(position)
                .or_default()
                .extend(letters.iter().copied());
        }
        self.excluded.extend(other.excluded.iter().copied());

        let confirmed: Vec<u8> = self
            .excluded
            .iter()
            .copied()
            .filter(|&letter| self.confirms_present(letter))
            .collect();
        for letter in confirmed {
            self.excluded.remove(&letter);
        }

        Ok(())
    }

    /// Value form of [`merge`](Self::merge)
    ///
    /// # Errors
    /// Same as [`merge`](Self::merge).
    pub fn merged(&self, other: &Self) -> Result<Self> {
        let mut next = self.clone();
        next.merge(other)?;
        Ok(next)
    }

    /// Whether a single word is consistent with every constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        super::filter::satisfies_matches(word, &self.matches)
            && super::filter::satisfies_misplaced(word, &self.misplaced)
            && super::filter::avoids_letters(word, &self.excluded)
    }

    fn check_match(&self, position: usize, letter: u8) -> Result<()> {
        match self.matches.get(&position) {
            Some(&existing) if existing != letter => Err(Error::Contradiction {
                position,
                existing: existing as char,
                incoming: letter as char,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matches: Vec<String> = self
            .matches
            .iter()
            .map(|(i, &l)| format!("{i}={}", l as char))
            .collect();
        let misplaced: Vec<String> = self
            .misplaced
            .iter()
            .map(|(i, set)| format!("{i}!={}", set.iter().map(|&l| l as char).collect::<String>()))
            .collect();
        let excluded: String = self.excluded.iter().map(|&l| l as char).collect();

        write!(
            f,
            "matches [{}] misplaced [{}] excluded [{excluded}]",
            matches.join(" "),
            misplaced.join(" ")
        )
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
