//! # fortuna-core
//!
//! **Lottery numbers that are exactly as good as chance.**
//!
//! `fortuna-core` draws lottery-style number sets from a uniform random
//! generator and ships the tooling to show that no "smarter" selection beats
//! it: historical draw storage, a frequency-based predictor, and an
//! evaluator comparing that predictor with random picks.
//!
//! ## Quick Start
//!
//! ```
//! use fortuna_core::{LotteryKind, sample_unique};
//!
//! // Seven distinct numbers from 1..=49, ascending.
//! let numbers = sample_unique(7, 1, 49).unwrap();
//! assert_eq!(numbers.len(), 7);
//!
//! // A full ticket for a configured lottery.
//! let ticket = LotteryKind::Powerball.config().generate_ticket().unwrap();
//! assert!(ticket.powerball.is_some());
//! ```
//!
//! ## Architecture
//!
//! Sampler → Lottery table → Draw history (CSV) → Cache → Evaluation
//!
//! The sampler and the derived metrics are leaves with no internal
//! dependencies. Everything the crate prints or returns is non-predictive;
//! see [`DISCLAIMER`].

pub mod cache;
pub mod disclaimer;
pub mod draws;
pub mod error;
pub mod evaluation;
pub mod lottery;
pub mod metrics;
pub mod sampler;

pub use cache::{DEFAULT_CACHE_TTL, DrawCache};
pub use disclaimer::{DISCLAIMER, rng_explanation};
pub use draws::{
    DataDir, Draw, generate_synthetic_draws, load_draws, parse_date, parse_numbers, save_draws,
};
pub use error::{FortunaError, Result};
pub use evaluation::{
    EvaluationConfig, EvaluationReport, FrequencyModel, count_matches, evaluate_prediction_model,
    evaluate_random_baseline, one_sided_t_test,
};
pub use lottery::{Bonus, LotteryConfig, LotteryKind, NumberRange, Ticket};
pub use metrics::{
    DEFAULT_METRIC_LABELS, DerivedMetrics, default_metrics, derive_metrics,
    derive_metrics_with_rng,
};
pub use sampler::{
    SampleRequest, Strategy, sample_unique, sample_unique_with_rng, sample_with_replacement,
    sample_with_replacement_with_rng,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
