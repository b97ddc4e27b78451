//! Guess selection over a scored pool
//!
//! `select_guess` picks the highest-frequency-score word from a pool, with
//! first-wins tie-breaking so the outcome follows pool order. The policy
//! layer decides which pool/basis pairing to use: remaining-only mode scores
//! the candidate set against itself, elimination mode scores the full
//! universe against the candidate set's letter distribution.

use super::frequency::LetterFrequencies;
use crate::core::Word;

/// Select the best word from `pool` by an arbitrary score function
///
/// A pool of exactly one word is returned directly, without calling `score`
/// at all. Ties go to the earliest word in the pool.
///
/// Returns `None` if the pool is empty.
pub fn select_by_score<'a, F>(pool: &'a [Word], mut score: F) -> Option<&'a Word>
where
    F: FnMut(&Word) -> u32,
{
    match pool {
        [] => None,
        [only] => Some(only),
        [first, rest @ ..] => {
            let mut best = first;
            let mut best_score = score(best);

            for word in rest {
                let word_score = score(word);
                if word_score > best_score {
                    best = word;
                    best_score = word_score;
                }
            }

            Some(best)
        }
    }
}

/// Select the best guess from `pool`, scored against `basis` frequencies
///
/// Returns `None` if the pool is empty.
#[must_use]
pub fn select_guess<'a>(pool: &'a [Word], basis: &[Word]) -> Option<&'a Word> {
    if pool.len() <= 1 {
        return pool.first();
    }

    let frequencies = LetterFrequencies::from_words(basis);
    select_by_score(pool, |word| frequencies.score(word))
}

/// Rank the pool by descending score against `basis`, keeping the top `limit`
///
/// The sort is stable, so tied words keep their pool order.
#[must_use]
pub fn rank_words(pool: &[Word], basis: &[Word], limit: usize) -> Vec<(Word, u32)> {
    let frequencies = LetterFrequencies::from_words(basis);

    let mut ranked: Vec<(Word, u32)> = pool
        .iter()
        .map(|word| (word.clone(), frequencies.score(word)))
        .collect();

    ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_scoring_word() {
        let basis = words(&["CRANE", "CRATE", "TRACE", "SLATE"]);
        // SNAKY shares fewer common letters than CRATE
        let pool = words(&["SNAKY", "CRATE"]);

        let best = select_guess(&pool, &basis).unwrap();
        assert_eq!(best.text(), "CRATE");
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let basis = words(&["CRANE"]);
        assert!(select_guess(&[], &basis).is_none());
    }

    #[test]
    fn single_word_pool_skips_scoring() {
        let pool = words(&["CRANE"]);
        let calls = Cell::new(0u32);

        let best = select_by_score(&pool, |_| {
            calls.set(calls.get() + 1);
            0
        });

        assert_eq!(best.unwrap().text(), "CRANE");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn single_word_pool_ignores_basis() {
        // Even an empty basis returns the lone pool word
        let pool = words(&["CRANE"]);
        let best = select_guess(&pool, &[]).unwrap();
        assert_eq!(best.text(), "CRANE");
    }

    #[test]
    fn multi_word_pool_scores_every_word() {
        let pool = words(&["CRANE", "SLATE", "TRACE"]);
        let calls = Cell::new(0u32);

        select_by_score(&pool, |_| {
            calls.set(calls.get() + 1);
            0
        });

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn ties_go_to_the_earliest_word() {
        // SLATE and STALE have identical letter sets, so they always tie
        let basis = words(&["CRANE", "SLATE", "STALE"]);
        let pool = words(&["STALE", "SLATE"]);

        let best = select_guess(&pool, &basis).unwrap();
        assert_eq!(best.text(), "STALE");

        let reversed = words(&["SLATE", "STALE"]);
        let best = select_guess(&reversed, &basis).unwrap();
        assert_eq!(best.text(), "SLATE");
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let basis = words(&["CRANE", "SLATE", "STALE", "TRACE"]);
        let pool = words(&["SLATE", "STALE", "ZYMIC"]);

        let ranked = rank_words(&pool, &basis, 10);

        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].1 >= ranked[1].1);
        assert!(ranked[1].1 >= ranked[2].1);
        // SLATE and STALE tie; pool order decides
        assert_eq!(ranked[0].0.text(), "SLATE");
        assert_eq!(ranked[1].0.text(), "STALE");
        assert_eq!(ranked[2].0.text(), "ZYMIC");
    }

    #[test]
    fn ranking_respects_limit() {
        let basis = words(&["CRANE", "SLATE", "TRACE", "GRACE"]);
        let ranked = rank_words(&basis, &basis, 2);
        assert_eq!(ranked.len(), 2);
    }
}
