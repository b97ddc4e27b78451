//! Core domain types
//!
//! Fundamental types shared by the engine and its collaborators: words and
//! per-letter guess feedback. Everything here is pure and owns no game state.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, WORD_LEN};
pub use word::{Word, WordError};
