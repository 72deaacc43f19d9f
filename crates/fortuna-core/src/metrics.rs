//! Derived display metrics.
//!
//! These scores are cosmetic. Each one is an independent uniform draw with a
//! small jitter, clamped into `[0, 1]`. They are not computed from any
//! generated numbers or historical draws and carry no predictive meaning.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Labels shown next to a generated ticket by default.
pub const DEFAULT_METRIC_LABELS: [&str; 5] = [
    "frequency",
    "recency",
    "entropy",
    "cooccurrence",
    "seasonality",
];

/// Maximum absolute jitter added to each uniform draw.
pub const METRIC_JITTER: f64 = 0.1;

/// Label → score in `[0, 1]`. Ordered by label for stable output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedMetrics(BTreeMap<String, f64>);

impl DerivedMetrics {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Produce one score per distinct label.
pub fn derive_metrics<S: AsRef<str>>(labels: &[S]) -> DerivedMetrics {
    derive_metrics_with_rng(labels, &mut rand::rng())
}

/// [`derive_metrics`] with a caller-supplied RNG.
pub fn derive_metrics_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
    labels: &[S],
    rng: &mut R,
) -> DerivedMetrics {
    let mut scores = BTreeMap::new();
    for label in labels {
        let base: f64 = rng.random();
        let jitter = rng.random_range(-METRIC_JITTER..=METRIC_JITTER);
        scores.insert(label.as_ref().to_string(), (base + jitter).clamp(0.0, 1.0));
    }
    DerivedMetrics(scores)
}

/// [`derive_metrics`] over [`DEFAULT_METRIC_LABELS`].
pub fn default_metrics() -> DerivedMetrics {
    derive_metrics(&DEFAULT_METRIC_LABELS)
}
