//! Candidate narrowing
//!
//! Three independent predicates, each usable alone, and [`filter`] which ANDs
//! them in one pass. All of them keep the input order and never fail: an
//! empty result just means no word fits.

use super::ConstraintSet;
use crate::core::Word;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Keep the words consistent with every constraint in the set
///
/// # Examples
/// ```
/// use wordle_sieve::constraints::{ConstraintSet, filter};
/// use wordle_sieve::core::{Word, compare};
///
/// let words: Vec<Word> = ["solar", "polar", "think", "arose"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let secret = Word::new("solar").unwrap();
/// let guess = Word::new("think").unwrap();
/// let mut constraints = ConstraintSet::new();
/// constraints.observe(&guess, compare(&secret, &guess).unwrap()).unwrap();
///
/// let remaining = filter(&words, &constraints);
/// assert_eq!(remaining.len(), 3);
/// assert!(!remaining.iter().any(|w| w.text() == "think"));
/// ```
pub fn filter<'w, I>(words: I, constraints: &ConstraintSet) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    let kept: Vec<&Word> = words
        .into_iter()
        .filter(|word| constraints.admits(word))
        .collect();

    debug!("filter kept {} candidates ({constraints})", kept.len());
    kept
}

/// Keep words carrying the confirmed letter at every matched position
pub fn include_matches<'w, I>(words: I, matches: &BTreeMap<usize, u8>) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words
        .into_iter()
        .filter(|word| satisfies_matches(word, matches))
        .collect()
}

/// Keep words that avoid each misplaced letter at its position yet contain it elsewhere
pub fn exclude_invalid_pos<'w, I>(words: I, misplaced: &BTreeMap<usize, BTreeSet<u8>>) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words
        .into_iter()
        .filter(|word| satisfies_misplaced(word, misplaced))
        .collect()
}

/// Drop words containing any of the given letters
pub fn exclude_invalid_chars<'w, I>(words: I, letters: &[u8]) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words
        .into_iter()
        .filter(|word| avoids_letters(word, letters))
        .collect()
}

pub(super) fn satisfies_matches(word: &Word, matches: &BTreeMap<usize, u8>) -> bool {
    matches
        .iter()
        .all(|(&i, letter)| word.chars().get(i) == Some(letter))
}

pub(super) fn satisfies_misplaced(word: &Word, misplaced: &BTreeMap<usize, BTreeSet<u8>>) -> bool {
    misplaced.iter().all(|(&i, letters)| {
        let here_ok = word.chars().get(i).is_none_or(|c| !letters.contains(c));
        here_ok && letters.iter().all(|&l| word.has_letter(l))
    })
}

pub(super) fn avoids_letters<'l>(word: &Word, letters: impl IntoIterator<Item = &'l u8>) -> bool {
    letters.into_iter().all(|&l| !word.has_letter(l))
}
