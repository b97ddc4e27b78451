//! Command implementations
//!
//! Each subcommand of the binary lives here: visible demo games, batch
//! training, strategy comparison, the interactive assistant, and starter
//! analysis.

pub mod assist;
pub mod compare;
pub mod demo;
pub mod starters;
pub mod train;

pub use assist::run_assist;
pub use compare::compare_strategies;
pub use demo::run_demo;
pub use starters::{StarterAnalysis, analyze_starters};
pub use train::{GameReport, TrainingConfig, TrainingStats, run_training};
