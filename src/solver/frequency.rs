//! Letter-frequency statistics over a word collection
//!
//! The scoring heuristic: a letter's frequency is the number of words in the
//! basis containing it at least once (presence count, not occurrence count),
//! and a word's score is the sum of frequencies over its distinct letters.
//! Repeated letters never count twice, so high scores favor guesses that
//! probe many common letters at once.

use crate::core::{WORD_LEN, Word};

const ALPHABET: usize = 26;

/// Per-letter presence counts over a basis collection
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    presence: [u32; ALPHABET],
}

impl LetterFrequencies {
    /// Count, for every letter, the words in `basis` containing it
    #[must_use]
    pub fn from_words(basis: &[Word]) -> Self {
        let mut presence = [0u32; ALPHABET];

        for word in basis {
            for letter in word.unique_letters() {
                presence[index(letter)] += 1;
            }
        }

        Self { presence }
    }

    /// Presence count for a letter
    #[inline]
    #[must_use]
    pub fn of(&self, letter: u8) -> u32 {
        self.presence[index(letter)]
    }

    /// Score a word: sum of presence counts over its distinct letters
    ///
    /// Two words with the same distinct-letter set score identically,
    /// whatever the letter order or duplicate counts.
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.unique_letters().map(|letter| self.of(letter)).sum()
    }
}

/// Per-position letter counts over a basis collection
///
/// Diagnostic statistic only; not folded into word scores.
#[derive(Debug, Clone)]
pub struct PositionFrequencies {
    counts: [[u32; ALPHABET]; WORD_LEN],
}

impl PositionFrequencies {
    /// Count letter occurrences per slot across `basis`
    #[must_use]
    pub fn from_words(basis: &[Word]) -> Self {
        let mut counts = [[0u32; ALPHABET]; WORD_LEN];

        for word in basis {
            for (position, &letter) in word.letters().iter().enumerate() {
                counts[position][index(letter)] += 1;
            }
        }

        Self { counts }
    }

    /// Occurrence count of `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][index(letter)]
    }

    /// The most common letter at `position`, with its count
    ///
    /// Ties go to the alphabetically first letter. Returns `None` for an
    /// empty basis.
    #[must_use]
    pub fn top_letter(&self, position: usize) -> Option<(u8, u32)> {
        let mut best: Option<(u8, u32)> = None;

        for (i, &count) in self.counts[position].iter().enumerate() {
            if count > 0 && best.is_none_or(|(_, top)| count > top) {
                best = Some((b'A' + i as u8, count));
            }
        }

        best
    }
}

#[inline]
fn index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn presence_counts_words_not_occurrences() {
        // SPEED has two Es but contributes 1 to E's count
        let basis = words(&["SPEED", "CRANE", "SLATE"]);
        let freq = LetterFrequencies::from_words(&basis);

        assert_eq!(freq.of(b'E'), 3);
        assert_eq!(freq.of(b'S'), 2);
        assert_eq!(freq.of(b'C'), 1);
        assert_eq!(freq.of(b'Z'), 0);
    }

    #[test]
    fn score_sums_distinct_letters_once() {
        let basis = words(&["SPEED", "CRANE", "SLATE"]);
        let freq = LetterFrequencies::from_words(&basis);

        // GEESE: distinct letters G, E, S
        let geese = Word::new("geese").unwrap();
        assert_eq!(freq.score(&geese), freq.of(b'G') + freq.of(b'E') + freq.of(b'S'));
    }

    #[test]
    fn score_depends_only_on_letter_set() {
        let basis = words(&["CRANE", "SLATE", "TRACE", "LEAST"]);
        let freq = LetterFrequencies::from_words(&basis);

        // Same distinct-letter set {S, L, A, T, E}, different order and
        // duplicate counts
        let slate = Word::new("slate").unwrap();
        let least = Word::new("least").unwrap();
        let tales = Word::new("tales").unwrap();
        let stale = Word::new("stale").unwrap();

        let expected = freq.score(&slate);
        assert_eq!(freq.score(&least), expected);
        assert_eq!(freq.score(&tales), expected);
        assert_eq!(freq.score(&stale), expected);
    }

    #[test]
    fn score_is_zero_against_empty_basis() {
        let freq = LetterFrequencies::from_words(&[]);
        assert_eq!(freq.score(&Word::new("crane").unwrap()), 0);
    }

    #[test]
    fn position_counts_per_slot() {
        let basis = words(&["CRANE", "CRATE", "SLATE"]);
        let positions = PositionFrequencies::from_words(&basis);

        assert_eq!(positions.at(0, b'C'), 2);
        assert_eq!(positions.at(0, b'S'), 1);
        assert_eq!(positions.at(2, b'A'), 3);
        assert_eq!(positions.at(4, b'E'), 3);
        assert_eq!(positions.at(4, b'C'), 0);
    }

    #[test]
    fn position_top_letter() {
        let basis = words(&["CRANE", "CRATE", "SLATE"]);
        let positions = PositionFrequencies::from_words(&basis);

        assert_eq!(positions.top_letter(2), Some((b'A', 3)));
        assert_eq!(positions.top_letter(4), Some((b'E', 3)));
    }

    #[test]
    fn position_top_letter_empty_basis() {
        let positions = PositionFrequencies::from_words(&[]);
        assert_eq!(positions.top_letter(0), None);
    }
}
