//! `fortuna evaluate-model`: frequency model vs. random baseline.

use fortuna_core::evaluation::SIGNIFICANCE_LEVEL;
use fortuna_core::{
    DataDir, DrawCache, EvaluationConfig, EvaluationReport, evaluate_prediction_model,
};

pub struct EvaluateCommandConfig<'a> {
    pub lottery: &'a str,
    pub trials: usize,
    pub seed: u64,
    pub window: usize,
    pub data_dir: &'a str,
    pub output_path: Option<&'a str>,
}

pub fn run(cfg: EvaluateCommandConfig<'_>) -> fortuna_core::Result<()> {
    let kind = super::parse_lottery(cfg.lottery)?;
    println!("Evaluating prediction model for {kind} against random baseline");
    println!("Running {} trials with seed {}", cfg.trials, cfg.seed);

    let data = DataDir::new(cfg.data_dir);
    let created = data.ensure_files()?;
    if !created.is_empty() {
        println!(
            "Generated synthetic history for {} lottery file(s) in {}",
            created.len(),
            data.root().display()
        );
    }

    let mut cache = DrawCache::default();
    let draws = cache.get_from(&data, kind)?;

    let config = EvaluationConfig {
        trials: cfg.trials,
        seed: Some(cfg.seed),
        window: cfg.window,
        ..EvaluationConfig::default()
    };
    let report = evaluate_prediction_model(draws, &config)?;
    print_report(&report);

    if let Some(path) = cfg.output_path {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("\nReport written to {path}");
    }
    Ok(())
}

fn print_report(report: &EvaluationReport) {
    println!("\n===== EVALUATION RESULTS =====");
    if let Some(baseline) = report.baseline_avg {
        println!("Random Baseline  - Average matches: {baseline:.4}");
    }
    println!("Prediction Model - Average matches: {:.4}", report.avg_matches);
    if let Some(p) = report.p_value {
        println!("Statistical significance (p-value): {p:.4}");
    }

    println!("\n  {:>7} {:>8} {:>8}", "Matches", "Trials", "Share");
    println!("  {}", "-".repeat(25));
    for (matches, count) in &report.match_distribution {
        let share = report.match_probabilities.get(matches).copied().unwrap_or(0.0);
        println!("  {matches:>7} {count:>8} {:>7.1}%", share * 100.0);
    }

    if report.is_significant() {
        println!("\n⚠️  UNEXPECTED RESULT: p <= {SIGNIFICANCE_LEVEL}.");
        println!("This is almost certainly random chance in this particular run.");
        println!("Try different seeds: the effect will not persist.");
    } else {
        println!("\n⚠️  CONCLUSION: the prediction model shows NO statistically significant");
        println!("improvement over random selection. Lottery numbers CANNOT be predicted");
        println!("better than chance.");
    }
}
