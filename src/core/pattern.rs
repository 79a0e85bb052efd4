//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Miss (letter not in word, or all its occurrences already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Hit (letter in correct position)
//!
//! The pattern is stored as a single `u32` value plus its length, where each
//! position contributes digit × 3^position to the total.

use super::Word;
use super::word::MAX_WORD_LEN;
use crate::error::{Error, Result};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the secret
    Miss,
    /// Letter in the secret, elsewhere
    Present,
    /// Letter at this exact position
    Hit,
}

impl Mark {
    const fn digit(self) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }

    /// Tile letter: `g`, `y` or `r`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Miss => 'r',
        }
    }

    /// Coloured square for the mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '🟥',
        }
    }

    /// Parse a tile character
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `r`/`R`/`b`/`B`/`-`/`_`/🟥/⬜/⬛.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'g' | 'G' | '🟩' => Some(Self::Hit),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'r' | 'R' | 'b' | 'B' | '-' | '_' | '🟥' | '⬜' | '⬛' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the tiles of one guess as a single base-3 number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All hits for a word of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LEN`]
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_marks(&vec![Mark::Hit; len])
    }

    /// Build a pattern from individual marks
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LEN`] marks are given
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LEN, "pattern too long");

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for &mark in marks {
            code += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Rebuild a pattern from its raw code and length
    ///
    /// Used when reading persisted tables.
    #[must_use]
    pub const fn from_raw(code: u32, len: u8) -> Self {
        Self { code, len }
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Mark at a position
    ///
    /// # Panics
    /// Panics in debug mode if `position >= self.len()`
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        debug_assert!(position < self.len());
        Mark::from_digit((self.code / 3u32.pow(position as u32)) % 3)
    }

    /// Iterate the marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.code;
        (0..self.len).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Check if this is a perfect match (all hits)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.len > 0 && self.marks().all(|m| m == Mark::Hit)
    }

    /// Count the number of hit tiles
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.marks().filter(|&m| m == Mark::Hit).count()
    }

    /// Count the number of present tiles
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (hits) and remove them from the answer's pool
    /// 2. Second pass, left to right: mark present while the pool still holds the letter
    /// 3. Encode as base-3 number
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Pattern, Word};
    ///
    /// let guess = Word::new("other").unwrap();
    /// let answer = Word::new("bored").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    /// assert_eq!(pattern.to_string(), "yrrgy");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self> {
        check_lengths(guess, answer)?;
        Ok(Self::calculate_aligned(guess.chars(), answer.chars()))
    }

    /// Pattern of `guess` against `answer`, both known to have the same length
    pub(crate) fn calculate_aligned(guess: &[u8], answer: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), answer.len());

        let mut marks = [Mark::Miss; MAX_WORD_LEN];
        let mut answer_available = letter_counts(answer);

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                marks[i] = Mark::Hit;
                answer_available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Mark::Hit {
                continue;
            }
            let count = &mut answer_available[letter_index(g)];
            if *count > 0 {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(&marks[..guess.len()])
    }

    /// Parse a pattern from a string like "gyrrg" or "🟩🟨🟥🟥🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("gy-rg").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨🟥🟥🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let marks: Vec<Mark> = s.chars().map(Mark::from_char).collect::<Option<_>>()?;

        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_marks(&marks))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Pattern;
    ///
    /// let p = Pattern::from_str("gyrgy").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨🟥🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().map(Mark::to_emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Feedback for `guess` played against the hidden `secret`
///
/// # Errors
/// Returns [`Error::InvalidInput`] if the words differ in length.
pub fn compare(secret: &Word, guess: &Word) -> Result<Pattern> {
    Pattern::calculate(guess, secret)
}

/// Both directions of feedback between two words
///
/// Returns `(a played against b, b played against a)`. Hits are shared; each
/// direction draws its presents from the other word's letters left over after
/// the hits.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_sieve::core::{Word, compare_mutual};
///
/// let a = Word::new("other").unwrap();
/// let b = Word::new("arose").unwrap();
/// let (a_as_guess, b_as_guess) = compare_mutual(&a, &b).unwrap();
/// assert_eq!(a_as_guess.to_string(), "yrryy");
/// assert_eq!(b_as_guess.to_string(), "ryyry");
/// ```
pub fn compare_mutual(a: &Word, b: &Word) -> Result<(Pattern, Pattern)> {
    check_lengths(a, b)?;

    let (a, b) = (a.chars(), b.chars());
    let len = a.len();
    let mut a_marks = [Mark::Miss; MAX_WORD_LEN];
    let mut b_marks = [Mark::Miss; MAX_WORD_LEN];
    let mut a_left = letter_counts(a);
    let mut b_left = letter_counts(b);

    // Index needed to read both words and set both outputs
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if a[i] == b[i] {
            a_marks[i] = Mark::Hit;
            b_marks[i] = Mark::Hit;
            a_left[letter_index(a[i])] -= 1;
            b_left[letter_index(b[i])] -= 1;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if a_marks[i] == Mark::Hit {
            continue;
        }
        let in_b = &mut b_left[letter_index(a[i])];
        if *in_b > 0 {
            a_marks[i] = Mark::Present;
            *in_b -= 1;
        }
        let in_a = &mut a_left[letter_index(b[i])];
        if *in_a > 0 {
            b_marks[i] = Mark::Present;
            *in_a -= 1;
        }
    }

    Ok((
        Pattern::from_marks(&a_marks[..len]),
        Pattern::from_marks(&b_marks[..len]),
    ))
}

fn check_lengths(a: &Word, b: &Word) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            expected: a.len(),
            found: b.len(),
        })
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

fn letter_counts(word: &[u8]) -> [u8; 26] {
    let mut counts = [0u8; 26];
    for &ch in word {
        counts[letter_index(ch)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn mutual(a: &str, b: &str) -> (String, String) {
        let (p, q) = compare_mutual(&word(a), &word(b)).unwrap();
        (p.to_string(), q.to_string())
    }

    #[test]
    fn mutual_comparison_fixtures() {
        let cases = [
            ("other", "arose", ("yrryy", "ryyry")),
            ("other", "quick", ("rrrrr", "rrrrr")),
            ("other", "bored", ("yrrgy", "ryygr")),
            ("other", "other", ("ggggg", "ggggg")),
            ("other", "ether", ("rgggg", "rgggg")),
            ("other", "abade", ("rrryr", "rrrry")),
        ];

        for (a, b, (a_guess, b_guess)) in cases {
            assert_eq!(
                mutual(a, b),
                (a_guess.to_string(), b_guess.to_string()),
                "{a} vs {b}"
            );
        }
    }

    #[test]
    fn mutual_agrees_with_single_direction() {
        let pairs = [("other", "arose"), ("speed", "erase"), ("robot", "floor")];
        for (a, b) in pairs {
            let (a_guess, b_guess) = compare_mutual(&word(a), &word(b)).unwrap();
            assert_eq!(a_guess, compare(&word(b), &word(a)).unwrap());
            assert_eq!(b_guess, compare(&word(a), &word(b)).unwrap());
        }
    }

    #[test]
    fn self_comparison_is_perfect() {
        for text in ["other", "eerie", "aaaaa", "cat", "letters"] {
            let w = word(text);
            let pattern = compare(&w, &w).unwrap();
            assert!(pattern.is_perfect());
            assert_eq!(pattern, Pattern::perfect(w.len()));
        }
    }

    #[test]
    fn repeated_guess_letter_against_single_occurrence() {
        // Two e's guessed, one e in the secret: one present, one miss
        let pattern = compare(&word("other"), &word("geese")).unwrap();
        assert_eq!(pattern.to_string(), "ryrrr");

        let e_marks: Vec<Mark> = [1, 2, 4].iter().map(|&i| pattern.mark_at(i)).collect();
        assert_eq!(
            e_marks.iter().filter(|&&m| m == Mark::Present).count(),
            1
        );
    }

    #[test]
    fn hit_consumes_letter_before_presents() {
        // ROBOT vs FLOOR: second o is a hit, so the first o only gets the leftover o
        let pattern = compare(&word("floor"), &word("robot")).unwrap();
        assert_eq!(pattern.to_string(), "yyrgr");
    }

    #[test]
    fn duplicate_letter_bound_holds() {
        let words = ["other", "eerie", "geese", "speed", "erase", "robot", "floor", "abade"];
        for secret in words {
            for guess in words {
                let (s, g) = (word(secret), word(guess));
                let pattern = compare(&s, &g).unwrap();
                for letter in g.distinct_letters() {
                    let marked = g
                        .positions_of(letter)
                        .iter()
                        .filter(|&&i| pattern.mark_at(i) != Mark::Miss)
                        .count();
                    assert!(
                        marked <= s.positions_of(letter).len(),
                        "{guess} vs {secret}: too many marks for {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = compare(&word("other"), &word("cat")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                expected: 3,
                found: 5
            }
        ));
        assert!(compare_mutual(&word("other"), &word("letters")).is_err());
    }

    #[test]
    fn pattern_round_trips_through_text() {
        let p = Pattern::from_str("GY_rg").unwrap();
        assert_eq!(p.to_string(), "gyrrg");
        assert_eq!(p.len(), 5);
        assert_eq!(p.count_hits(), 2);
        assert_eq!(p.count_presents(), 1);
        assert_eq!("gyrrg".parse::<Pattern>().unwrap(), p);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("").is_none());
        assert!(Pattern::from_str("gxg").is_none());
        assert!(Pattern::from_str(&"g".repeat(MAX_WORD_LEN + 1)).is_none());
        assert!("gqg".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_encoding_matches_base3() {
        // y=1, g=2, r=0, g=2, y=1: 1 + 2×3 + 0×9 + 2×27 + 1×81 = 142
        let p = Pattern::from_str("ygrgy").unwrap();
        assert_eq!(p.value(), 142);
        assert_eq!(Pattern::from_raw(142, 5), p);
        assert_eq!(Pattern::perfect(5).value(), 242);
    }

    #[test]
    fn twenty_letter_patterns_fit() {
        let p = Pattern::perfect(MAX_WORD_LEN);
        assert!(p.is_perfect());
        assert_eq!(p.count_hits(), MAX_WORD_LEN);
    }
}
