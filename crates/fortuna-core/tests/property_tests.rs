use fortuna_core::{
    FortunaError, derive_metrics_with_rng, sample_unique_with_rng,
    sample_with_replacement_with_rng,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn prop_unique_sample_contract(
        min in -1000i64..1000,
        width in 0i64..200,
        count_frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let max = min + width;
        let span = (width + 1) as usize;
        let count = ((span as f64 * count_frac).ceil() as usize).clamp(1, span);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let out = sample_unique_with_rng(count, min, max, &mut rng).unwrap();

        prop_assert_eq!(out.len(), count);
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(out.iter().all(|n| (min..=max).contains(n)));
    }

    #[test]
    fn prop_full_range_is_identity(min in -500i64..500, width in 0i64..100, seed in any::<u64>()) {
        let max = min + width;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let out = sample_unique_with_rng((width + 1) as usize, min, max, &mut rng).unwrap();
        prop_assert_eq!(out, (min..=max).collect::<Vec<_>>());
    }

    #[test]
    fn prop_oversized_request_fails(
        min in -500i64..500,
        width in 0i64..100,
        extra in 1usize..50,
        seed in any::<u64>(),
    ) {
        let max = min + width;
        let count = (width + 1) as usize + extra;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let is_range_error = matches!(
            sample_unique_with_rng(count, min, max, &mut rng),
            Err(FortunaError::InvalidRange { .. })
        );
        prop_assert!(is_range_error);
    }

    #[test]
    fn prop_inverted_bounds_fail(min in -500i64..500, gap in 1i64..100, count in 0usize..10) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let is_bounds_error = matches!(
            sample_unique_with_rng(count, min, min - gap, &mut rng),
            Err(FortunaError::InvalidBounds { .. })
        );
        prop_assert!(is_bounds_error);
    }

    #[test]
    fn prop_with_replacement_in_range(
        min in -100i64..100,
        width in 0i64..20,
        count in 1usize..100,
        seed in any::<u64>(),
    ) {
        let max = min + width;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let out = sample_with_replacement_with_rng(count, min, max, &mut rng).unwrap();
        prop_assert_eq!(out.len(), count);
        prop_assert!(out.iter().all(|n| (min..=max).contains(n)));
    }

    #[test]
    fn prop_metrics_one_entry_per_label(
        labels in prop::collection::btree_set("[a-z]{1,12}", 0..10),
        seed in any::<u64>(),
    ) {
        let labels: Vec<String> = labels.into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let m = derive_metrics_with_rng(&labels, &mut rng);
        prop_assert_eq!(m.len(), labels.len());
        for label in &labels {
            let v = m.get(label).unwrap();
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
