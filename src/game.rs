//! Secret-word game oracle
//!
//! The collaborator on the other side of the engine: holds a secret word and
//! answers guesses with well-formed feedback. Guesses are validated against
//! the word universe; an invalid guess is an error the calling loop must
//! treat as a lost round rather than feed into the filter.

use crate::core::{Feedback, Word};
use rand::prelude::IndexedRandom;
use rand::Rng;
use std::fmt;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Error type for oracle-rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guessed word is not in the universe
    InvalidGuess(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(word) => write!(f, "'{word}' is not a valid guess"),
        }
    }
}

impl std::error::Error for GameError {}

/// One game's oracle: a secret word drawn from a shared universe
pub struct Game<'a> {
    secret: Word,
    universe: &'a [Word],
}

impl<'a> Game<'a> {
    /// Create a game with a fixed secret word
    pub const fn new(universe: &'a [Word], secret: Word) -> Self {
        Self { secret, universe }
    }

    /// Create a game with a secret drawn uniformly from the universe
    ///
    /// Returns `None` if the universe is empty.
    pub fn random<R: Rng>(universe: &'a [Word], rng: &mut R) -> Option<Self> {
        let secret = universe.choose(rng)?.clone();
        Some(Self::new(universe, secret))
    }

    /// The secret word (for post-game reporting)
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Score a guess against the secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` if the guess is not in the
    /// universe. No feedback is produced for rejected guesses.
    pub fn feedback(&self, guess: &Word) -> Result<Feedback, GameError> {
        if !self.universe.contains(guess) {
            return Err(GameError::InvalidGuess(guess.text().to_string()));
        }

        Ok(Feedback::score(guess, &self.secret))
    }
}
