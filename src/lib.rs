//! Wordle Trainer
//!
//! Plays and trains Wordle strategies using a letter-frequency heuristic:
//! feedback is folded into positional/inclusion/exclusion constraints that
//! shrink the candidate set, and guesses are ranked by how many distinct,
//! common letters they probe.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_trainer::core::{Feedback, Word};
//! use wordle_trainer::solver::{Engine, Strategy};
//!
//! let universe = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("slate").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//!
//! let mut engine = Engine::new(&universe, Strategy::Adaptive);
//! let guess = engine.next_guess(1).unwrap();
//! let feedback = Feedback::score(&guess, &Word::new("trace").unwrap());
//! engine.apply_feedback(&guess, &feedback);
//! println!("{} candidates left", engine.candidates().len());
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and strategy engine
pub mod solver;

// Secret-word game oracle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
