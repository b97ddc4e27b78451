//! Guess feedback representation and scoring
//!
//! Feedback is one mark per letter position:
//! - `Exact` - letter in the correct position (green)
//! - `Misplaced` - letter in the word, wrong position (yellow)
//! - `Absent` - letter not in the word (gray)
//!
//! Each entry keeps the guessed letter alongside its mark so the constraint
//! interpreter can work from the feedback alone.

use super::Word;

/// Number of letters in a word and entries in a feedback sequence
pub const WORD_LEN: usize = 5;

/// Per-position feedback mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter in the correct position (green)
    Exact,
    /// Letter in the word but not at this position (yellow)
    Misplaced,
    /// Letter not in the word (gray)
    Absent,
}

/// Feedback for one guess: an ordered `(letter, mark)` pair per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    entries: [(u8, Mark); WORD_LEN],
}

impl Feedback {
    /// Build feedback directly from `(letter, mark)` entries
    #[inline]
    #[must_use]
    pub const fn new(entries: [(u8, Mark); WORD_LEN]) -> Self {
        Self { entries }
    }

    /// Score `guess` against `secret` with Wordle's feedback rules
    ///
    /// Duplicate letters are handled the official way: exact matches consume
    /// the secret's letter pool first, then remaining occurrences may be
    /// marked misplaced, and anything past the pool is absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_trainer::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// let marks: Vec<Mark> = feedback.iter().map(|(_, m)| m).collect();
    /// assert_eq!(
    ///     marks,
    ///     vec![Mark::Absent, Mark::Absent, Mark::Exact, Mark::Absent, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut entries = guess.letters().map(|letter| (letter, Mark::Absent));
        let mut available = secret.letter_counts();

        // First pass: exact matches consume the letter pool
        for (i, entry) in entries.iter_mut().enumerate() {
            if entry.0 == secret.letter_at(i) {
                entry.1 = Mark::Exact;
                if let Some(count) = available.get_mut(&entry.0) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what remains
        for entry in &mut entries {
            if entry.1 == Mark::Absent
                && let Some(count) = available.get_mut(&entry.0)
                && *count > 0
            {
                entry.1 = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self { entries }
    }

    /// Parse feedback for `guess` from a pattern string like "GY-G-"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/⬜ for absent
    ///
    /// Returns `None` for wrong lengths or unknown characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_trainer::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let f1 = Feedback::from_pattern(&guess, "GY-G-").unwrap();
    /// let f2 = Feedback::from_pattern(&guess, "🟩🟨⬜🟩⬜").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: &str) -> Option<Self> {
        let chars: Vec<char> = pattern.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut entries = guess.letters().map(|letter| (letter, Mark::Absent));
        for (entry, ch) in entries.iter_mut().zip(chars) {
            entry.1 = match ch {
                'G' | 'g' | '🟩' => Mark::Exact,
                'Y' | 'y' | '🟨' => Mark::Misplaced,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self { entries })
    }

    /// Get the `(letter, mark)` entries
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[(u8, Mark); WORD_LEN] {
        &self.entries
    }

    /// Iterate over `(letter, mark)` pairs in position order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.entries.iter().copied()
    }

    /// Check whether every mark is exact (winning guess)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.entries.iter().all(|&(_, mark)| mark == Mark::Exact)
    }
}
