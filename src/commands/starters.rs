//! Starter analysis
//!
//! Ranks opening guesses by letter coverage and profiles which letters
//! dominate each position across the universe.

use crate::core::{WORD_LEN, Word};
use crate::solver::{PositionFrequencies, rank_words};

/// Result of a starter analysis
#[derive(Debug)]
pub struct StarterAnalysis {
    pub universe_size: usize,
    /// Best openers, strongest first, with their coverage scores
    pub ranked: Vec<(Word, u32)>,
    /// Most common letter per position with its count
    pub top_by_position: [Option<(u8, u32)>; WORD_LEN],
}

/// Rank the top `count` starters and profile per-position letters
#[must_use]
pub fn analyze_starters(universe: &[Word], count: usize) -> StarterAnalysis {
    let ranked = rank_words(universe, universe, count);

    let positions = PositionFrequencies::from_words(universe);
    let mut top_by_position = [None; WORD_LEN];
    for (pos, slot) in top_by_position.iter_mut().enumerate() {
        *slot = positions.top_letter(pos);
    }

    StarterAnalysis {
        universe_size: universe.len(),
        ranked,
        top_by_position,
    }
}
