//! Feedback constraint extraction and candidate filtering
//!
//! Turns one guess's feedback into a normalized constraint set and applies
//! it to a word collection. Three constraint groups:
//! - exact: position -> required letter
//! - misplaced: letter must appear, but never at its forbidden positions
//! - absent: letter must not appear at all
//!
//! Duplicate-letter rule: an absent mark is suppressed whenever the same
//! letter carries an exact or misplaced mark anywhere in the same feedback.

use crate::core::{Feedback, Mark, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Normalized constraints extracted from one feedback sequence
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    /// Position -> letter required there
    exact: FxHashMap<usize, u8>,
    /// Letter -> positions it must not occupy (the letter must appear somewhere)
    misplaced: FxHashMap<u8, Vec<usize>>,
    /// Letters that must not appear in the word
    absent: FxHashSet<u8>,
}

impl ConstraintSet {
    /// Extract constraints from a feedback sequence
    ///
    /// Exact and misplaced marks are collected first so that absent marks on
    /// duplicate occurrences of the same letter can be suppressed regardless
    /// of their position in the feedback.
    #[must_use]
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let mut constraints = Self::default();

        for (position, (letter, mark)) in feedback.iter().enumerate() {
            match mark {
                Mark::Exact => {
                    constraints.exact.insert(position, letter);
                }
                Mark::Misplaced => {
                    constraints
                        .misplaced
                        .entry(letter)
                        .or_default()
                        .push(position);
                }
                Mark::Absent => {}
            }
        }

        for (letter, mark) in feedback.iter() {
            if mark == Mark::Absent && !constraints.letter_is_present(letter) {
                constraints.absent.insert(letter);
            }
        }

        constraints
    }

    /// Whether the letter carries an exact or misplaced requirement
    fn letter_is_present(&self, letter: u8) -> bool {
        self.misplaced.contains_key(&letter) || self.exact.values().any(|&l| l == letter)
    }

    /// Check a single word against all three constraint groups
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        for (&position, &letter) in &self.exact {
            if word.letter_at(position) != letter {
                return false;
            }
        }

        for (&letter, forbidden) in &self.misplaced {
            if !word.has_letter(letter) {
                return false;
            }
            if forbidden.iter().any(|&p| word.letter_at(p) == letter) {
                return false;
            }
        }

        for &letter in &self.absent {
            if word.has_letter(letter) {
                return false;
            }
        }

        true
    }

    /// Filter a word collection down to the words satisfying every constraint
    ///
    /// Stable: survivors keep their relative order. An empty result is a
    /// legitimate outcome; the caller decides on any fallback.
    #[must_use]
    pub fn filter(&self, words: &[Word]) -> Vec<Word> {
        words.iter().filter(|w| self.permits(w)).cloned().collect()
    }

    /// Letter required at the given position, if any
    #[must_use]
    pub fn exact_at(&self, position: usize) -> Option<u8> {
        self.exact.get(&position).copied()
    }

    /// Whether the letter is excluded outright
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }
}
