//! Prediction model evaluation against a random baseline.
//!
//! The [`FrequencyModel`] looks like a reasonable predictor: it weighs how
//! often and how recently each number appeared. On independent uniform draws
//! it cannot do better than a random pick, and
//! [`evaluate_prediction_model`] measures exactly that with a one-sided
//! Student's t-test against the random baseline's average.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::draws::Draw;
use crate::error::{FortunaError, Result};
use crate::lottery::NumberRange;

/// Draws needed before a model can be trained.
pub const MIN_HISTORY: usize = 10;

/// p-value threshold used when summarising a report.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// ---------------------------------------------------------------------------
// Configuration and results
// ---------------------------------------------------------------------------

/// Settings for [`evaluate_prediction_model`].
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    pub trials: usize,
    /// `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Leading fraction of history used for training.
    pub train_fraction: f64,
    /// Trailing draws the model looks at.
    pub window: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: Some(42),
            train_fraction: 0.8,
            window: 5,
        }
    }
}

/// Outcome of an evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub trials: usize,
    pub avg_matches: f64,
    /// matches → number of trials.
    pub match_distribution: BTreeMap<usize, usize>,
    /// matches → fraction of trials.
    pub match_probabilities: BTreeMap<usize, f64>,
    /// Random baseline average (model evaluations only).
    pub baseline_avg: Option<f64>,
    /// One-sided p-value for "model beats baseline" (model evaluations only).
    pub p_value: Option<f64>,
}

impl EvaluationReport {
    fn from_matches(matches: &[usize], max_matches: usize) -> Self {
        let trials = matches.len();
        let mut match_distribution: BTreeMap<usize, usize> =
            (0..=max_matches).map(|k| (k, 0)).collect();
        for &m in matches {
            *match_distribution.entry(m).or_insert(0) += 1;
        }
        let match_probabilities = match_distribution
            .iter()
            .map(|(&k, &v)| (k, v as f64 / trials as f64))
            .collect();
        Self {
            trials,
            avg_matches: matches.iter().sum::<usize>() as f64 / trials as f64,
            match_distribution,
            match_probabilities,
            baseline_avg: None,
            p_value: None,
        }
    }

    /// True when the model showed a statistically significant improvement.
    pub fn is_significant(&self) -> bool {
        self.p_value.is_some_and(|p| p <= SIGNIFICANCE_LEVEL)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Number of values shared by `selection` and `winning`.
pub fn count_matches(selection: &[i64], winning: &[i64]) -> usize {
    let winning: HashSet<i64> = winning.iter().copied().collect();
    selection
        .iter()
        .copied()
        .collect::<HashSet<i64>>()
        .intersection(&winning)
        .count()
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// One-sided one-sample t-test of `H1: mean(samples) > mu`.
///
/// Returns 1.0 when the sample mean is not above `mu`. A zero-variance
/// sample above `mu` returns 0.0.
pub fn one_sided_t_test(samples: &[f64], mu: f64) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 1.0;
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    if mean <= mu {
        return 1.0;
    }
    if var == 0.0 {
        return 0.0;
    }
    let t = (mean - mu) / (var / n as f64).sqrt();
    match StudentsT::new(0.0, 1.0, (n - 1) as f64) {
        Ok(dist) => dist.sf(t).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

fn main_range(draws: &[Draw]) -> Result<NumberRange> {
    draws
        .first()
        .map(|d| d.lottery.config().main)
        .ok_or(FortunaError::InsufficientHistory { needed: 1, got: 0 })
}

// ---------------------------------------------------------------------------
// Random baseline
// ---------------------------------------------------------------------------

/// Pick a random historical draw and a random ticket per trial and count the
/// matches.
pub fn evaluate_random_baseline(
    draws: &[Draw],
    trials: usize,
    seed: Option<u64>,
) -> Result<EvaluationReport> {
    let range = main_range(draws)?;
    if trials == 0 {
        return Err(FortunaError::NoTrials);
    }
    let mut rng = make_rng(seed);
    let mut matches = Vec::with_capacity(trials);
    for _ in 0..trials {
        let Some(draw) = draws.choose(&mut rng) else {
            break;
        };
        let selection = range.sample_with_rng(&mut rng)?;
        matches.push(count_matches(&selection, &draw.numbers));
    }
    let report = EvaluationReport::from_matches(&matches, range.count);
    debug!("random baseline: {:.4} avg matches over {trials} trials", report.avg_matches);
    Ok(report)
}

// ---------------------------------------------------------------------------
// Frequency model
// ---------------------------------------------------------------------------

/// Scores numbers by frequency and recency over a trailing window and picks
/// the top scorers.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyModel {
    pub window: usize,
}

impl FrequencyModel {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Score every in-range number seen in the last `window` draws.
    ///
    /// A draw `age` steps back contributes `1 + 1 / (age + 1)` per number.
    pub fn scores(&self, history: &[Draw], range: NumberRange) -> HashMap<i64, f64> {
        let mut scores = HashMap::new();
        for (age, draw) in history.iter().rev().take(self.window).enumerate() {
            let weight = 1.0 + 1.0 / (age as f64 + 1.0);
            for &n in draw.numbers.iter().filter(|&&n| range.contains(n)) {
                *scores.entry(n).or_insert(0.0) += weight;
            }
        }
        scores
    }

    /// Predict one ticket's main numbers, sorted ascending.
    ///
    /// Ties break toward the smaller number. If the window holds fewer than
    /// `range.count` distinct numbers the rest are filled at random.
    pub fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        history: &[Draw],
        range: NumberRange,
        rng: &mut R,
    ) -> Result<Vec<i64>> {
        if history.len() < self.window {
            return Err(FortunaError::InsufficientHistory {
                needed: self.window,
                got: history.len(),
            });
        }
        range.request().validate()?;

        let mut ranked: Vec<(i64, f64)> = self.scores(history, range).into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut picked: Vec<i64> = ranked.iter().take(range.count).map(|&(n, _)| n).collect();
        if picked.len() < range.count {
            let taken: HashSet<i64> = picked.iter().copied().collect();
            let rest: Vec<i64> = (range.min..=range.max).filter(|n| !taken.contains(n)).collect();
            let needed = range.count - picked.len();
            let fill = NumberRange::new(0, rest.len() as i64 - 1, needed).sample_with_rng(rng)?;
            picked.extend(fill.into_iter().map(|i| rest[i as usize]));
        }
        picked.sort_unstable();
        Ok(picked)
    }
}

// ---------------------------------------------------------------------------
// Model evaluation
// ---------------------------------------------------------------------------

/// Evaluate [`FrequencyModel`] on held-out draws and compare it with the
/// random baseline.
///
/// History is split chronologically; each sampled test draw is predicted
/// from every draw before it. Test draws are sampled with replacement when
/// there are fewer of them than `config.trials`.
pub fn evaluate_prediction_model(
    draws: &[Draw],
    config: &EvaluationConfig,
) -> Result<EvaluationReport> {
    if draws.len() < MIN_HISTORY {
        return Err(FortunaError::InsufficientHistory {
            needed: MIN_HISTORY,
            got: draws.len(),
        });
    }
    if config.trials == 0 {
        return Err(FortunaError::NoTrials);
    }
    let range = main_range(draws)?;
    let model = FrequencyModel::new(config.window);

    let train_size = ((config.train_fraction.clamp(0.0, 1.0) * draws.len() as f64) as usize)
        .clamp(model.window.min(draws.len() - 1), draws.len() - 1);
    let test_len = draws.len() - train_size;

    let mut rng = make_rng(config.seed);
    let test_indices: Vec<usize> = if test_len < config.trials {
        (0..config.trials)
            .map(|_| train_size + rng.random_range(0..test_len))
            .collect()
    } else {
        rand::seq::index::sample(&mut rng, test_len, config.trials)
            .into_iter()
            .map(|i| train_size + i)
            .collect()
    };
    info!(
        "evaluating frequency model: {} train draws, {test_len} test draws, {} trials",
        train_size, config.trials
    );

    let mut matches = Vec::with_capacity(config.trials);
    for idx in test_indices {
        let prediction = model.predict_with_rng(&draws[..idx], range, &mut rng)?;
        matches.push(count_matches(&prediction, &draws[idx].numbers));
    }

    let mut report = EvaluationReport::from_matches(&matches, range.count);
    let baseline = evaluate_random_baseline(draws, config.trials, config.seed)?;
    let samples: Vec<f64> = matches.iter().map(|&m| m as f64).collect();
    report.p_value = Some(one_sided_t_test(&samples, baseline.avg_matches));
    report.baseline_avg = Some(baseline.avg_matches);
    Ok(report)
}
