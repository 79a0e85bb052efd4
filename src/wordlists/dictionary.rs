//! Uniform-length word collections

use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// An ordered, de-duplicated list of words that all share one length
///
/// The dictionary is read-only once built, so it can be shared freely
/// between threads running independent solves.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_len: usize,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of repeated words
    ///
    /// # Errors
    /// - [`Error::EmptyDictionary`] if no words are given
    /// - [`Error::MixedLengths`] if a word differs in length from the first one
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let words = ["hoard", "wharf", "hoard"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.word_len(), 5);
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut kept = Vec::new();
        let mut index = FxHashMap::default();
        let mut word_len = None;

        for word in words {
            let expected = *word_len.get_or_insert(word.len());
            if word.len() != expected {
                return Err(Error::MixedLengths {
                    expected,
                    found: word.len(),
                    word: word.text().to_string(),
                });
            }
            if index.contains_key(word.text()) {
                continue;
            }
            index.insert(word.text().to_string(), kept.len());
            kept.push(word);
        }

        let word_len = word_len.ok_or(Error::EmptyDictionary)?;

        Ok(Self {
            words: kept,
            index,
            word_len,
        })
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// [`Error::InvalidWord`] for the first entry that is not a word, otherwise as [`new`](Self::new).
    pub fn from_strs(texts: &[&str]) -> Result<Self> {
        let words = texts
            .iter()
            .map(|&t| Word::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// The word list bundled with the crate
    ///
    /// # Errors
    /// Only fails if the bundled list itself is malformed.
    pub fn embedded() -> Result<Self> {
        Self::from_strs(super::WORDS)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty dictionaries are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Position of a word in dictionary order
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index_of(text).map(|i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Look up a word typed by a user, normalising case first
    ///
    /// # Errors
    /// - [`Error::InvalidWord`] if the text is not a word at all
    /// - [`Error::NotInDictionary`] if it is a word this dictionary lacks
    pub fn require(&self, text: &str) -> Result<&Word> {
        let word = Word::new(text)?;
        self.get(word.text())
            .ok_or_else(|| Error::NotInDictionary(word.text().to_string()))
    }
}
