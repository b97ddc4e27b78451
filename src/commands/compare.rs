//! Strategy comparison
//!
//! Trains every strategy on the same universe and game count so their win
//! rates and attempt averages can be tabulated side by side.

use super::train::{TrainingConfig, TrainingStats, run_training};
use crate::core::Word;
use crate::solver::Strategy;

/// Train all strategies with a shared seed and game count
///
/// The same base seed means every strategy faces the same secrets, making
/// the comparison fair.
#[must_use]
pub fn compare_strategies(universe: &[Word], games: usize, seed: Option<u64>) -> Vec<TrainingStats> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let mut config = TrainingConfig::new(strategy, games);
            config.seed = seed;
            run_training(universe, &config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn compares_every_strategy() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE", "SPEED"]);

        let results = compare_strategies(&universe, 4, Some(11));

        assert_eq!(results.len(), Strategy::ALL.len());
        for (stats, strategy) in results.iter().zip(Strategy::ALL) {
            assert_eq!(stats.strategy, strategy);
            assert_eq!(stats.total_games, 4);
        }
    }

    #[test]
    fn strategies_face_the_same_secrets() {
        let universe = words(&["CRANE", "SLATE", "TRACE", "GRACE", "SPEED"]);

        let results = compare_strategies(&universe, 5, Some(21));

        let secrets: Vec<Vec<&str>> = results
            .iter()
            .map(|stats| stats.reports.iter().map(|r| r.secret.text()).collect())
            .collect();

        for other in &secrets[1..] {
            assert_eq!(&secrets[0], other);
        }
    }
}
