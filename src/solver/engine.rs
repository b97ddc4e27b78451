//! Game engine
//!
//! One `Engine` drives one game at a time: it owns the shrinking candidate
//! set and the guess/feedback history, borrows the read-only universe, and
//! applies the strategy policy to pick each guess. The starter ranking is
//! computed once at construction and never changes.

use super::constraints::ConstraintSet;
use super::selector::{rank_words, select_guess};
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Starter words retained from the initial universe ranking
const STARTER_POOL: usize = 20;

/// Candidate counts above this use elimination mode (adaptive strategy)
const ELIMINATION_THRESHOLD: usize = 100;

/// Candidate counts above this use remaining-only mode (adaptive strategy)
const FREQUENCY_THRESHOLD: usize = 10;

/// Candidates scored by `suggest` (bounded-cost approximation)
const SUGGEST_POOL: usize = 100;

/// Alternatives returned by `suggest` alongside the best word
const SUGGEST_ALTERNATIVES: usize = 5;

/// Snapshot of the current game state
#[derive(Debug, Clone)]
pub struct GameStatistics {
    pub attempts_made: usize,
    pub remaining_candidates: usize,
    pub strategy: Strategy,
    pub guess_history: Vec<Word>,
}

/// Read-only guess recommendation: one best word plus runners-up
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub best: Option<Word>,
    pub alternatives: Vec<Word>,
}

/// Word-filtering and guess-selection engine for a single game
pub struct Engine<'a> {
    universe: &'a [Word],
    candidates: Vec<Word>,
    strategy: Strategy,
    starters: Vec<Word>,
    guesses: Vec<Word>,
    feedbacks: Vec<Feedback>,
    rng: StdRng,
}

impl<'a> Engine<'a> {
    /// Build an engine over a universe with the given strategy
    ///
    /// Precomputes the starter ranking (the universe scored against itself)
    /// and initializes the candidate set to the full universe.
    #[must_use]
    pub fn new(universe: &'a [Word], strategy: Strategy) -> Self {
        Self::with_rng(universe, strategy, StdRng::from_os_rng())
    }

    /// Build an engine with a deterministic seed for its random choices
    #[must_use]
    pub fn with_seed(universe: &'a [Word], strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(universe, strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(universe: &'a [Word], strategy: Strategy, rng: StdRng) -> Self {
        let starters = rank_words(universe, universe, STARTER_POOL)
            .into_iter()
            .map(|(word, _)| word)
            .collect();

        Self {
            universe,
            candidates: universe.to_vec(),
            strategy,
            starters,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            rng,
        }
    }

    /// Restore the candidate set to the full universe and clear the history
    pub fn reset(&mut self) {
        self.candidates = self.universe.to_vec();
        self.guesses.clear();
        self.feedbacks.clear();
    }

    /// The full, never-mutated word universe
    #[must_use]
    pub const fn universe(&self) -> &'a [Word] {
        self.universe
    }

    /// Words still consistent with every feedback applied this game
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The strategy this engine was built with
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The precomputed starter ranking (best first)
    #[must_use]
    pub fn starters(&self) -> &[Word] {
        &self.starters
    }

    /// The single best opening word
    #[must_use]
    pub fn best_starter(&self) -> Option<&Word> {
        self.starters.first()
    }

    /// Pick the next guess for the given 1-based attempt number
    ///
    /// Attempt 1 always plays the cached best starter. Later attempts follow
    /// the strategy policy; an empty candidate set falls back to a uniform
    /// random word from the universe. Returns `None` only when the universe
    /// itself is empty.
    pub fn next_guess(&mut self, attempt: usize) -> Option<Word> {
        if attempt <= 1 {
            return self.best_starter().cloned();
        }

        match self.strategy {
            Strategy::Random => {
                if self.candidates.is_empty() {
                    self.random_from_universe()
                } else {
                    self.candidates.choose(&mut self.rng).cloned()
                }
            }
            Strategy::Frequency => self
                .remaining_only_guess()
                .or_else(|| self.random_from_universe()),
            Strategy::Elimination => self.elimination_guess(),
            Strategy::Adaptive => {
                let remaining = self.candidates.len();
                if remaining > ELIMINATION_THRESHOLD {
                    self.elimination_guess()
                } else if remaining > FREQUENCY_THRESHOLD {
                    self.remaining_only_guess()
                } else if remaining > 0 {
                    // Endgame: just play the first surviving candidate
                    Some(self.candidates[0].clone())
                } else {
                    self.random_from_universe()
                }
            }
        }
    }

    /// Fold one guess's feedback into the candidate set
    ///
    /// Records the guess and feedback in the history, then keeps only the
    /// candidates consistent with the extracted constraints. The filter is
    /// in place and order-preserving; an emptied candidate set is a valid
    /// state handled by `next_guess` fallbacks.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        self.guesses.push(guess.clone());
        self.feedbacks.push(feedback.clone());

        let constraints = ConstraintSet::from_feedback(feedback);
        self.candidates.retain(|word| constraints.permits(word));
    }

    /// Snapshot the current game state
    #[must_use]
    pub fn statistics(&self) -> GameStatistics {
        GameStatistics {
            attempts_made: self.guesses.len(),
            remaining_candidates: self.candidates.len(),
            strategy: self.strategy,
            guess_history: self.guesses.clone(),
        }
    }

    /// Guess and feedback history so far, in round order
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.guesses.iter().zip(self.feedbacks.iter())
    }

    /// Recommend the best next word plus up to 5 runners-up
    ///
    /// Read-only. Scores at most the first 100 candidates against the full
    /// candidate distribution, so it is a bounded-cost approximation rather
    /// than a full-set guarantee.
    #[must_use]
    pub fn suggest(&self) -> Suggestion {
        if self.candidates.is_empty() {
            return Suggestion {
                best: None,
                alternatives: Vec::new(),
            };
        }

        let pool = &self.candidates[..self.candidates.len().min(SUGGEST_POOL)];
        let mut ranked = rank_words(pool, &self.candidates, 1 + SUGGEST_ALTERNATIVES);

        let mut words = ranked.drain(..).map(|(word, _)| word);
        Suggestion {
            best: words.next(),
            alternatives: words.collect(),
        }
    }

    /// Remaining-only mode: pool and basis are both the candidate set
    fn remaining_only_guess(&self) -> Option<Word> {
        select_guess(&self.candidates, &self.candidates).cloned()
    }

    /// Elimination mode: guess from the full universe, scored against the
    /// candidate distribution
    ///
    /// Probing letters absent from every candidate is deliberate; the score
    /// still reflects relevance to the live distribution. With 1-2
    /// candidates left there is nothing worth probing, so the guess comes
    /// from the candidates directly.
    fn elimination_guess(&self) -> Option<Word> {
        let remaining = self.candidates.len();
        if (1..=2).contains(&remaining) {
            self.remaining_only_guess()
        } else {
            select_guess(self.universe, &self.candidates).cloned()
        }
    }

    fn random_from_universe(&mut self) -> Option<Word> {
        self.universe.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn feedback(guess: &Word, pattern: &str) -> Feedback {
        Feedback::from_pattern(guess, pattern).unwrap()
    }

    #[test]
    fn starters_are_precomputed_at_construction() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE"]);
        let engine = Engine::with_seed(&universe, Strategy::Frequency, 7);

        assert_eq!(engine.starters().len(), 4);
        // TRACE and CRANE share common letters; best starter must be the
        // top-scoring word of the universe against itself
        let best = engine.best_starter().unwrap().clone();
        let ranked = rank_words(&universe, &universe, 1);
        assert_eq!(best, ranked[0].0);
    }

    #[test]
    fn starter_pool_is_capped_at_twenty() {
        let texts: Vec<String> = (0..30)
            .map(|i| {
                let a = b'A' + (i % 26) as u8;
                format!("{}{}{}{}{}", a as char, 'X', 'Y', 'Z', 'Q')
            })
            .collect();
        let universe: Vec<Word> = texts.iter().map(|t| Word::new(t.clone()).unwrap()).collect();

        let engine = Engine::with_seed(&universe, Strategy::Adaptive, 0);
        assert_eq!(engine.starters().len(), 20);
    }

    #[test]
    fn first_attempt_plays_best_starter_for_every_strategy() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE"]);

        for strategy in Strategy::ALL {
            let mut engine = Engine::with_seed(&universe, strategy, 42);
            let first = engine.next_guess(1).unwrap();
            assert_eq!(Some(&first), engine.best_starter());
        }
    }

    #[test]
    fn empty_universe_yields_no_guess() {
        let universe: Vec<Word> = Vec::new();
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 3);

        assert!(engine.next_guess(1).is_none());
        assert!(engine.next_guess(2).is_none());
    }

    #[test]
    fn apply_feedback_shrinks_monotonically() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE", "CRACE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Frequency, 1);

        let guess = Word::new("crane").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "GGG-G"));

        assert_eq!(engine.candidates(), words(&["CRACE"]).as_slice());

        // Applying the same feedback again is a fixed point
        engine.apply_feedback(&guess, &feedback(&guess, "GGG-G"));
        assert_eq!(engine.candidates(), words(&["CRACE"]).as_slice());
    }

    #[test]
    fn reset_restores_universe_and_clears_history() {
        let universe = words(&["CRANE", "SLATE", "TRACE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 5);

        let guess = Word::new("crane").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-----"));
        assert!(engine.candidates().len() < universe.len());
        assert_eq!(engine.statistics().attempts_made, 1);

        engine.reset();
        assert_eq!(engine.candidates(), universe.as_slice());
        assert_eq!(engine.statistics().attempts_made, 0);
        assert_eq!(engine.history().count(), 0);
    }

    #[test]
    fn candidates_stay_subset_of_universe() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE", "SPEED"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 9);

        let guess = Word::new("slate").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-Y---"));

        for candidate in engine.candidates() {
            assert!(universe.contains(candidate));
        }
    }

    #[test]
    fn random_strategy_falls_back_to_universe_when_empty() {
        let universe = words(&["CRANE", "SLATE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Random, 11);

        let guess = Word::new("zzzzz").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "GGGGG"));
        assert!(engine.candidates().is_empty());

        let fallback = engine.next_guess(2).unwrap();
        assert!(universe.contains(&fallback));
    }

    #[test]
    fn random_strategy_draws_from_candidates() {
        let universe = words(&["CRANE", "SLATE", "TRACE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Random, 13);

        let guess = Word::new("slate").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "GGGGG"));
        assert_eq!(engine.candidates().len(), 1);

        let pick = engine.next_guess(2).unwrap();
        assert_eq!(pick.text(), "SLATE");
    }

    #[test]
    fn frequency_strategy_selects_from_remaining() {
        let universe = words(&["CRATE", "TRACE", "GRACE", "SLUMP"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Frequency, 17);

        let guess = Word::new("slump").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-----"));
        assert_eq!(engine.candidates().len(), 3);

        let pick = engine.next_guess(2).unwrap();
        assert!(engine.candidates().contains(&pick));
        // CRATE and TRACE tie on the same letter set; first candidate wins
        assert_eq!(pick.text(), "CRATE");
    }

    #[test]
    fn elimination_strategy_may_guess_outside_candidates() {
        // GHOUD ties the candidates' top score against the candidate basis
        // and comes first in universe order, so elimination plays it even
        // though it can no longer be the answer.
        let universe = words(&["GHOUD", "BOUGH", "DOUGH", "COUGH"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Elimination, 19);

        let guess = Word::new("tough").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-GGGG"));
        assert_eq!(engine.candidates().len(), 3);

        let pick = engine.next_guess(2).unwrap();
        assert_eq!(pick.text(), "GHOUD");
        assert!(!engine.candidates().contains(&pick));
    }

    #[test]
    fn elimination_guesses_directly_from_two_candidates() {
        let universe = words(&["BATCH", "CATCH", "ZZZZZ", "QQQQQ"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Elimination, 23);

        let guess = Word::new("match").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-GGGG"));
        assert_eq!(engine.candidates().len(), 2);

        let pick = engine.next_guess(2).unwrap();
        assert!(engine.candidates().contains(&pick));
    }

    #[test]
    fn adaptive_plays_first_candidate_in_endgame() {
        let universe = words(&["CRANE", "CRATE", "TRACE", "GRACE", "SLATE", "BRACE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 29);

        let guess = Word::new("grace").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "-GGGG"));
        let remaining = engine.candidates().to_vec();
        assert_eq!(remaining, words(&["TRACE", "BRACE"]));

        let pick = engine.next_guess(2).unwrap();
        assert_eq!(pick, remaining[0]);
    }

    #[test]
    fn adaptive_falls_back_to_universe_when_empty() {
        let universe = words(&["CRANE", "SLATE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 31);

        let guess = Word::new("zzzzz").unwrap();
        engine.apply_feedback(&guess, &feedback(&guess, "GGGGG"));

        let fallback = engine.next_guess(2).unwrap();
        assert!(universe.contains(&fallback));
    }

    #[test]
    fn statistics_reflect_history() {
        let universe = words(&["CRANE", "SLATE", "TRACE"]);
        let mut engine = Engine::with_seed(&universe, Strategy::Adaptive, 37);

        let g1 = Word::new("crane").unwrap();
        let g2 = Word::new("slate").unwrap();
        engine.apply_feedback(&g1, &feedback(&g1, "--Y-Y"));
        engine.apply_feedback(&g2, &feedback(&g2, "GGGGG"));

        let stats = engine.statistics();
        assert_eq!(stats.attempts_made, 2);
        assert_eq!(stats.strategy, Strategy::Adaptive);
        assert_eq!(stats.guess_history, vec![g1, g2]);
        assert_eq!(stats.remaining_candidates, engine.candidates().len());
    }

    #[test]
    fn suggest_on_empty_universe_is_empty() {
        let universe: Vec<Word> = Vec::new();
        let engine = Engine::with_seed(&universe, Strategy::Adaptive, 41);

        let suggestion = engine.suggest();
        assert!(suggestion.best.is_none());
        assert!(suggestion.alternatives.is_empty());
    }

    #[test]
    fn suggest_returns_best_plus_alternatives() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE", "SPEED", "CRATE", "STALE"]);
        let engine = Engine::with_seed(&universe, Strategy::Frequency, 43);

        let suggestion = engine.suggest();
        let best = suggestion.best.unwrap();

        assert!(suggestion.alternatives.len() <= 5);
        assert!(!suggestion.alternatives.contains(&best));

        // Best matches the full ranking's head
        let ranked = rank_words(&universe, &universe, 1);
        assert_eq!(best, ranked[0].0);
    }

    #[test]
    fn suggest_does_not_mutate_state() {
        let universe = words(&["CRANE", "SLATE", "TRACE"]);
        let engine = Engine::with_seed(&universe, Strategy::Adaptive, 47);

        let before = engine.candidates().to_vec();
        let _ = engine.suggest();
        assert_eq!(engine.candidates(), before.as_slice());
    }
}
