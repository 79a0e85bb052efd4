//! Precomputed pattern lookup
//!
//! Every (guess, secret) pair of one dictionary, computed once in parallel and
//! then shared read-only between scorers. Memory grows as n² `u32` codes, so
//! the table suits dictionaries of a few thousand words.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

const MAGIC: &[u8; 4] = b"WPT1";

/// Patterns for every ordered pair of dictionary words
///
/// Rows are guesses and columns are secrets, both in dictionary order.
#[derive(Debug, Clone)]
pub struct PairwisePatternTable {
    words: Vec<String>,
    index: FxHashMap<String, u32>,
    word_len: u8,
    codes: Vec<u32>,
}

impl PairwisePatternTable {
    /// Compute the full table for a dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Word, compare};
    /// use wordle_sieve::solver::PairwisePatternTable;
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["other", "bored", "ether"]).unwrap();
    /// let table = PairwisePatternTable::build(&dictionary);
    ///
    /// let guess = Word::new("other").unwrap();
    /// let secret = Word::new("bored").unwrap();
    /// assert_eq!(
    ///     table.lookup(&guess, &secret),
    ///     Some(compare(&secret, &guess).unwrap())
    /// );
    /// ```
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let start = Instant::now();
        let words = dictionary.words();
        let n = words.len();
        let mut codes = vec![0u32; n * n];

        codes
            .par_chunks_mut(n.max(1))
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (slot, secret) in row.iter_mut().zip(words) {
                    *slot = Pattern::calculate_aligned(guess.chars(), secret.chars()).value();
                }
            });

        info!(
            "built {n}x{n} pattern table in {:.2?}",
            start.elapsed()
        );

        Self::from_parts(
            words.iter().map(|w| w.text().to_string()).collect(),
            dictionary.word_len() as u8,
            codes,
        )
    }

    fn from_parts(words: Vec<String>, word_len: u8, codes: Vec<u32>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u32))
            .collect();

        Self {
            words,
            index,
            word_len,
            codes,
        }
    }

    /// Number of words on each side of the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len as usize
    }

    /// Pattern for `guess` played against `secret`, if both words are in the table
    #[must_use]
    pub fn lookup(&self, guess: &Word, secret: &Word) -> Option<Pattern> {
        let g = *self.index.get(guess.text())? as usize;
        let s = *self.index.get(secret.text())? as usize;
        let code = self.codes[g * self.words.len() + s];
        Some(Pattern::from_raw(code, self.word_len))
    }

    /// Write the table in its binary form
    ///
    /// # Errors
    /// Propagates write failures as [`Error::Io`].
    pub fn save<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(MAGIC)?;
        writer.write_all(&(self.words.len() as u32).to_le_bytes())?;
        writer.write_all(&[self.word_len])?;
        for word in &self.words {
            writer.write_all(word.as_bytes())?;
        }
        for code in &self.codes {
            writer.write_all(&code.to_le_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a table and check it was built from `dictionary`
    ///
    /// # Errors
    /// - [`Error::Io`] on read failures, including a truncated file
    /// - [`Error::CorruptTable`] on a bad header, a word list that differs from
    ///   the dictionary, or a code outside the pattern range
    pub fn load<R: Read>(mut reader: R, dictionary: &Dictionary) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(Error::CorruptTable("bad magic".to_string()));
        }

        let mut count = [0u8; 4];
        reader.read_exact(&mut count)?;
        let count = u32::from_le_bytes(count) as usize;

        let mut word_len = [0u8; 1];
        reader.read_exact(&mut word_len)?;
        let word_len = word_len[0];

        if count != dictionary.len() || word_len as usize != dictionary.word_len() {
            return Err(Error::CorruptTable(format!(
                "table holds {count} words of length {word_len}, dictionary has {} of length {}",
                dictionary.len(),
                dictionary.word_len()
            )));
        }

        let mut words = Vec::with_capacity(count);
        let mut buf = vec![0u8; word_len as usize];
        for expected in dictionary.words() {
            reader.read_exact(&mut buf)?;
            if buf != expected.chars() {
                return Err(Error::CorruptTable(format!(
                    "word '{}' does not match dictionary word '{expected}'",
                    String::from_utf8_lossy(&buf)
                )));
            }
            words.push(expected.text().to_string());
        }

        let limit = 3u32.pow(u32::from(word_len));
        let mut codes = Vec::with_capacity(count * count);
        let mut code = [0u8; 4];
        for _ in 0..count * count {
            reader.read_exact(&mut code)?;
            let value = u32::from_le_bytes(code);
            if value >= limit {
                return Err(Error::CorruptTable(format!("pattern code {value} out of range")));
            }
            codes.push(value);
        }

        Ok(Self::from_parts(words, word_len, codes))
    }

    /// # Errors
    /// See [`save`](Self::save); also fails if the file cannot be created.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save(BufWriter::new(File::create(path)?))
    }

    /// # Errors
    /// See [`load`](Self::load); also fails if the file cannot be opened.
    pub fn load_from_path(path: impl AsRef<Path>, dictionary: &Dictionary) -> Result<Self> {
        let table = Self::load(BufReader::new(File::open(path.as_ref())?), dictionary)?;
        info!(
            "loaded {0}x{0} pattern table from {1}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }
}
