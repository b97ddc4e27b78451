//! Training harness
//!
//! Plays many games with one strategy and aggregates the outcomes. Each game
//! runs on its own engine over the shared read-only universe, so games are
//! independent and run in parallel; per-game reports are collected first and
//! folded into statistics afterwards.

use crate::core::Word;
use crate::game::{Game, GameError, MAX_ATTEMPTS};
use crate::solver::{Engine, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Configuration for a training run
pub struct TrainingConfig {
    pub strategy: Strategy,
    pub games: usize,
    /// Base seed for secrets and random-strategy draws; derived per game
    pub seed: Option<u64>,
    /// Fixed secrets for the first games, in order (testing/regression)
    pub secrets: Option<Vec<Word>>,
}

impl TrainingConfig {
    #[must_use]
    pub const fn new(strategy: Strategy, games: usize) -> Self {
        Self {
            strategy,
            games,
            seed: None,
            secrets: None,
        }
    }
}

/// Outcome of a single training game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub game: usize,
    pub won: bool,
    pub attempts: usize,
    pub secret: Word,
    pub guesses: Vec<Word>,
}

/// Aggregated outcome of a training run
#[derive(Debug)]
pub struct TrainingStats {
    pub strategy: Strategy,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Average attempts over won games only
    pub average_attempts: f64,
    /// Index i counts wins in i+1 attempts
    pub attempt_distribution: [usize; MAX_ATTEMPTS],
    pub reports: Vec<GameReport>,
}

impl TrainingStats {
    /// Fold per-game reports into run statistics
    #[must_use]
    pub fn aggregate(strategy: Strategy, reports: Vec<GameReport>) -> Self {
        let total_games = reports.len();
        let wins = reports.iter().filter(|r| r.won).count();
        let losses = total_games - wins;

        let won_attempts: usize = reports.iter().filter(|r| r.won).map(|r| r.attempts).sum();
        let average_attempts = if wins > 0 {
            won_attempts as f64 / wins as f64
        } else {
            0.0
        };
        let win_rate = if total_games > 0 {
            wins as f64 / total_games as f64 * 100.0
        } else {
            0.0
        };

        let mut attempt_distribution = [0usize; MAX_ATTEMPTS];
        for report in reports.iter().filter(|r| r.won) {
            if (1..=MAX_ATTEMPTS).contains(&report.attempts) {
                attempt_distribution[report.attempts - 1] += 1;
            }
        }

        Self {
            strategy,
            total_games,
            wins,
            losses,
            win_rate,
            average_attempts,
            attempt_distribution,
            reports,
        }
    }
}

/// Play one full game of an engine against an oracle
///
/// The engine is reset first. An oracle-rejected guess ends the round as a
/// loss; corrupt feedback never reaches the filter.
pub fn play_game(engine: &mut Engine<'_>, game: &Game<'_>) -> (bool, usize, Vec<Word>) {
    engine.reset();
    let mut guesses = Vec::new();

    for attempt in 1..=MAX_ATTEMPTS {
        let Some(guess) = engine.next_guess(attempt) else {
            break;
        };
        guesses.push(guess.clone());

        let feedback = match game.feedback(&guess) {
            Ok(feedback) => feedback,
            Err(GameError::InvalidGuess(_)) => break,
        };

        engine.apply_feedback(&guess, &feedback);

        if feedback.is_win() {
            return (true, attempt, guesses);
        }
    }

    (false, guesses.len(), guesses)
}

/// Run a full training session and aggregate the results
#[must_use]
pub fn run_training(universe: &[Word], config: &TrainingConfig) -> TrainingStats {
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let progress = ProgressBar::new(config.games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    progress.set_message(format!("strategy: {}", config.strategy));

    let reports: Vec<GameReport> = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let game_seed = base_seed.wrapping_add(index as u64);
            let report = play_one(universe, config, index, game_seed);
            progress.inc(1);
            report
        })
        .collect();

    progress.finish_with_message("Complete!");

    TrainingStats::aggregate(config.strategy, reports)
}

fn play_one(
    universe: &[Word],
    config: &TrainingConfig,
    index: usize,
    game_seed: u64,
) -> GameReport {
    let secret = config
        .secrets
        .as_ref()
        .and_then(|secrets| secrets.get(index).cloned());

    let game = match secret {
        Some(secret) => Game::new(universe, secret),
        None => {
            let mut rng = StdRng::seed_from_u64(game_seed);
            match Game::random(universe, &mut rng) {
                Some(game) => game,
                None => {
                    // Empty universe: nothing to play
                    return GameReport {
                        game: index + 1,
                        won: false,
                        attempts: 0,
                        secret: Word::new("aaaaa").expect("constant is valid"),
                        guesses: Vec::new(),
                    };
                }
            }
        }
    };

    let mut engine = Engine::with_seed(universe, config.strategy, game_seed);
    let (won, attempts, guesses) = play_game(&mut engine, &game);

    GameReport {
        game: index + 1,
        won,
        attempts,
        secret: game.secret().clone(),
        guesses,
    }
}
