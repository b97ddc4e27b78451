//! Strategy policy
//!
//! A closed set of guess-selection policies. Names are resolved once, at
//! engine construction; an unknown name is a configuration error, not a
//! per-guess fallback.

use std::fmt;
use std::str::FromStr;

/// Guess-selection policy for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random choice from the remaining candidates
    Random,
    /// Highest-frequency word among the remaining candidates
    Frequency,
    /// Highest-frequency word from the full universe, scored against the
    /// remaining candidates' letter distribution
    Elimination,
    /// Switches between elimination, frequency and direct picks based on
    /// how many candidates remain
    Adaptive,
}

/// Error type for unresolvable strategy names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    Unknown(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "Unknown strategy '{name}' (expected one of: random, frequency, elimination, adaptive)"
            ),
        }
    }
}

impl std::error::Error for StrategyError {}

impl Strategy {
    /// Every strategy, in comparison order
    pub const ALL: [Self; 4] = [
        Self::Random,
        Self::Frequency,
        Self::Elimination,
        Self::Adaptive,
    ];

    /// Resolve a strategy from its name
    ///
    /// # Errors
    /// Returns `StrategyError::Unknown` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, StrategyError> {
        match name {
            "random" => Ok(Self::Random),
            "frequency" => Ok(Self::Frequency),
            "elimination" => Ok(Self::Elimination),
            "adaptive" => Ok(Self::Adaptive),
            _ => Err(StrategyError::Unknown(name.to_string())),
        }
    }

    /// The strategy's canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Frequency => "frequency",
            Self::Elimination => "elimination",
            Self::Adaptive => "adaptive",
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
