//! Unique bounded sampling.
//!
//! Draws `count` distinct integers from the closed range `[min, max]` with a
//! uniform RNG. Two strategies, chosen by how much of the range is requested:
//!
//! - **Rejection**: draw uniformly, keep unseen values, stop at `count`.
//!   Cheap when `count` is small relative to the range.
//! - **Shuffle**: materialize the range, Fisher–Yates shuffle, take `count`.
//!   Used once the request covers at least half the range, where rejection
//!   would spend most of its draws on repeats.
//!
//! Output is always sorted ascending. Validation happens before any draw, so
//! invalid requests fail identically regardless of the RNG.
//!
//! Every entrypoint has a `*_with_rng` variant taking a caller-supplied RNG
//! for deterministic testing.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{FortunaError, Result};

/// Strategy used to satisfy a [`SampleRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Rejection,
    Shuffle,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejection => write!(f, "rejection"),
            Self::Shuffle => write!(f, "shuffle"),
        }
    }
}

/// A validated request for `count` distinct integers in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub count: usize,
    pub min: i64,
    pub max: i64,
}

impl SampleRequest {
    /// Build and validate a request.
    pub fn new(count: usize, min: i64, max: i64) -> Result<Self> {
        let request = Self { count, min, max };
        request.validate()?;
        Ok(request)
    }

    /// Number of integers in `[min, max]`, or 0 when `max < min`.
    pub fn span(&self) -> u64 {
        span(self.min, self.max)
    }

    /// Check the bounds and the uniqueness constraint.
    pub fn validate(&self) -> Result<()> {
        validate_bounds(self.count, self.min, self.max)?;
        let span = self.span();
        if self.count as u64 > span {
            return Err(FortunaError::InvalidRange {
                count: self.count,
                min: self.min,
                max: self.max,
                span,
            });
        }
        Ok(())
    }

    /// Strategy that will be used for this request.
    pub fn strategy(&self) -> Strategy {
        if (self.count as u128) * 2 >= self.span() as u128 {
            Strategy::Shuffle
        } else {
            Strategy::Rejection
        }
    }

    /// Draw the sample with the given RNG. Validates again, so a request
    /// built by hand still cannot bypass the checks.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i64>> {
        self.validate()?;
        let strategy = self.strategy();
        debug!(
            "sampling {} of [{}, {}] via {strategy}",
            self.count, self.min, self.max
        );
        let out = match strategy {
            Strategy::Rejection => rejection_sample(self, rng),
            Strategy::Shuffle => shuffle_sample(self, rng),
        };
        debug_assert_eq!(out.len(), self.count);
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Public entrypoints
// ---------------------------------------------------------------------------

/// Draw `count` distinct integers from `[min, max]`, sorted ascending.
///
/// Fails with [`FortunaError::InvalidBounds`] when `count == 0` or
/// `max < min`, and with [`FortunaError::InvalidRange`] when
/// `count > max - min + 1`.
pub fn sample_unique(count: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    sample_unique_with_rng(count, min, max, &mut rand::rng())
}

/// [`sample_unique`] with a caller-supplied RNG.
pub fn sample_unique_with_rng<R: Rng + ?Sized>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>> {
    SampleRequest::new(count, min, max)?.sample_with_rng(rng)
}

/// Draw `count` independent uniform integers from `[min, max]`.
///
/// Duplicates are allowed, so only the bounds are validated. The result is
/// in draw order.
pub fn sample_with_replacement(count: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    sample_with_replacement_with_rng(count, min, max, &mut rand::rng())
}

/// [`sample_with_replacement`] with a caller-supplied RNG.
pub fn sample_with_replacement_with_rng<R: Rng + ?Sized>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>> {
    validate_bounds(count, min, max)?;
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn rejection_sample<R: Rng + ?Sized>(request: &SampleRequest, rng: &mut R) -> Vec<i64> {
    let mut seen = BTreeSet::new();
    while seen.len() < request.count {
        seen.insert(rng.random_range(request.min..=request.max));
    }
    seen.into_iter().collect()
}

fn shuffle_sample<R: Rng + ?Sized>(request: &SampleRequest, rng: &mut R) -> Vec<i64> {
    let mut values: Vec<i64> = (request.min..=request.max).collect();
    values.shuffle(rng);
    values.truncate(request.count);
    values.sort_unstable();
    values
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_bounds(count: usize, min: i64, max: i64) -> Result<()> {
    if count == 0 || max < min {
        return Err(FortunaError::InvalidBounds { count, min, max });
    }
    Ok(())
}

fn span(min: i64, max: i64) -> u64 {
    if max < min {
        return 0;
    }
    // Full i64 range overflows u64 by one; saturate.
    u64::try_from(max as i128 - min as i128 + 1).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0xf0f7_0a7a)
    }

    fn assert_valid(out: &[i64], count: usize, min: i64, max: i64) {
        assert_eq!(out.len(), count);
        assert!(out.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {out:?}");
        assert!(out.iter().all(|&n| (min..=max).contains(&n)), "out of range: {out:?}");
    }

    #[test]
    fn test_seven_of_forty_nine() {
        let out = sample_unique(7, 1, 49).unwrap();
        assert_valid(&out, 7, 1, 49);
    }

    #[test]
    fn test_full_range_returns_every_value() {
        assert_eq!(sample_unique(6, 1, 6).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_too_many_is_invalid_range() {
        let err = sample_unique(8, 1, 6).unwrap_err();
        assert!(matches!(
            err,
            FortunaError::InvalidRange {
                count: 8,
                span: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_count_is_invalid_bounds() {
        let err = sample_unique(0, 1, 6).unwrap_err();
        assert!(matches!(err, FortunaError::InvalidBounds { .. }));
    }

    #[test]
    fn test_inverted_range_is_invalid_bounds() {
        let err = sample_unique(1, 10, 1).unwrap_err();
        assert!(matches!(err, FortunaError::InvalidBounds { .. }));
    }

    #[test]
    fn test_validation_is_deterministic() {
        for _ in 0..20 {
            assert!(matches!(
                sample_unique(8, 1, 6),
                Err(FortunaError::InvalidRange { .. })
            ));
            assert!(matches!(
                sample_unique(3, 5, 4),
                Err(FortunaError::InvalidBounds { .. })
            ));
        }
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(sample_unique(1, 42, 42).unwrap(), vec![42]);
    }

    #[test]
    fn test_negative_range() {
        let out = sample_unique(4, -10, -3).unwrap();
        assert_valid(&out, 4, -10, -3);
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            SampleRequest::new(7, 1, 49).unwrap().strategy(),
            Strategy::Rejection
        );
        assert_eq!(
            SampleRequest::new(25, 1, 50).unwrap().strategy(),
            Strategy::Shuffle
        );
        assert_eq!(
            SampleRequest::new(6, 1, 6).unwrap().strategy(),
            Strategy::Shuffle
        );
    }

    #[test]
    fn test_both_strategies_produce_valid_output() {
        let mut rng = seeded();
        for count in 1..=20 {
            let out = sample_unique_with_rng(count, 1, 20, &mut rng).unwrap();
            assert_valid(&out, count, 1, 20);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = sample_unique_with_rng(6, 1, 45, &mut seeded()).unwrap();
        let b = sample_unique_with_rng(6, 1, 45, &mut seeded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_sparse_range_terminates() {
        let out = sample_unique(5, 0, i64::MAX / 2).unwrap();
        assert_valid(&out, 5, 0, i64::MAX / 2);
    }

    #[test]
    fn test_extreme_span_saturates() {
        assert_eq!(span(i64::MIN, i64::MAX), u64::MAX);
        assert_eq!(span(5, 4), 0);
        assert_eq!(span(-3, 3), 7);
    }

    #[test]
    fn test_hand_built_request_is_revalidated() {
        let request = SampleRequest {
            count: 10,
            min: 1,
            max: 3,
        };
        assert!(request.sample_with_rng(&mut seeded()).is_err());
    }

    #[test]
    fn test_with_replacement_allows_duplicates() {
        let out = sample_with_replacement_with_rng(20, 1, 5, &mut seeded()).unwrap();
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|n| (1..=5).contains(n)));
        let distinct: BTreeSet<_> = out.iter().collect();
        assert!(distinct.len() < 20);
    }

    #[test]
    fn test_with_replacement_validates_bounds() {
        assert!(matches!(
            sample_with_replacement(0, 1, 5),
            Err(FortunaError::InvalidBounds { .. })
        ));
        assert!(matches!(
            sample_with_replacement(3, 5, 1),
            Err(FortunaError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_roughly_uniform() {
        let mut rng = seeded();
        let mut counts = [0usize; 10];
        let trials = 10_000;
        for _ in 0..trials {
            let n = sample_unique_with_rng(1, 1, 10, &mut rng).unwrap()[0];
            counts[(n - 1) as usize] += 1;
        }
        let expected = trials as f64 / 10.0;
        let sigma = (expected * 0.9).sqrt();
        for (i, &c) in counts.iter().enumerate() {
            assert!(
                (c as f64 - expected).abs() <= 4.0 * sigma,
                "value {} drawn {c} times, expected ~{expected}",
                i + 1
            );
        }
    }
}
