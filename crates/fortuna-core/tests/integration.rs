//! Integration tests for fortuna-core.
//!
//! These tests exercise the full pipeline:
//! data directory → synthetic history → CSV load → cache → evaluation.

use fortuna_core::{
    DataDir, DrawCache, EvaluationConfig, FortunaError, LotteryKind, evaluate_prediction_model,
    evaluate_random_baseline, generate_synthetic_draws, load_draws, sample_unique, save_draws,
};

#[test]
fn sampler_examples_hold() {
    let seven = sample_unique(7, 1, 49).unwrap();
    assert_eq!(seven.len(), 7);
    assert!(seven.windows(2).all(|w| w[0] < w[1]));
    assert!(seven.iter().all(|n| (1..=49).contains(n)));

    assert_eq!(sample_unique(6, 1, 6).unwrap(), vec![1, 2, 3, 4, 5, 6]);

    assert!(matches!(
        sample_unique(8, 1, 6),
        Err(FortunaError::InvalidRange { .. })
    ));
}

#[test]
fn save_then_load_preserves_draws() {
    let dir = tempfile::tempdir().unwrap();
    for kind in LotteryKind::ALL {
        let path = dir.path().join(kind.data_file_name());
        let original = generate_synthetic_draws(kind, 10, Some(42)).unwrap();
        save_draws(&original, &path).unwrap();

        let loaded = load_draws(&path, kind).unwrap();
        assert_eq!(loaded, original, "{kind}");
    }
}

#[test]
fn data_dir_feeds_cache_and_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path().join("data"));
    data.ensure_files().unwrap();

    let mut cache = DrawCache::default();
    let draws = cache.get_from(&data, LotteryKind::Mega7).unwrap().to_vec();
    assert_eq!(draws.len(), 100);
    assert!(draws.iter().all(|d| d.numbers.len() == 7));

    let config = EvaluationConfig {
        trials: 300,
        ..EvaluationConfig::default()
    };
    let model = evaluate_prediction_model(&draws, &config).unwrap();
    let baseline = evaluate_random_baseline(&draws, 300, Some(42)).unwrap();

    assert_eq!(model.baseline_avg, Some(baseline.avg_matches));
    let p = model.p_value.unwrap();
    assert!((0.0..=1.0).contains(&p));

    // Second lookup is served from the cache.
    cache.get_from(&data, LotteryKind::Mega7).unwrap();
    assert_eq!(cache.loads(), 1);
}

#[test]
fn evaluation_is_reproducible_for_a_seed() {
    let draws = generate_synthetic_draws(LotteryKind::Easy6, 60, Some(7)).unwrap();
    let config = EvaluationConfig {
        trials: 100,
        seed: Some(7),
        ..EvaluationConfig::default()
    };
    let a = evaluate_prediction_model(&draws, &config).unwrap();
    let b = evaluate_prediction_model(&draws, &config).unwrap();
    assert_eq!(a.match_distribution, b.match_distribution);
    assert_eq!(a.p_value, b.p_value);
}

#[test]
fn missing_data_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path());
    assert!(data.load(LotteryKind::Fast5).is_err());
}
