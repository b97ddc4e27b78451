//! Word-filtering and guess-selection engine
//!
//! Constraint propagation over guess feedback plus a letter-frequency
//! scoring heuristic, driven by a per-game strategy policy.

pub mod constraints;
mod engine;
pub mod frequency;
pub mod selector;
mod strategy;

pub use constraints::ConstraintSet;
pub use engine::{Engine, GameStatistics, Suggestion};
pub use frequency::{LetterFrequencies, PositionFrequencies};
pub use selector::{rank_words, select_guess};
pub use strategy::{Strategy, StrategyError};
