//! Word lists
//!
//! Provides the embedded default list and a file loader.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
