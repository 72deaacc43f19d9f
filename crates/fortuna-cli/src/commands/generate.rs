//! `fortuna generate-numbers`: draw ticket sets for a lottery.

use fortuna_core::{DEFAULT_METRIC_LABELS, DerivedMetrics, Ticket, derive_metrics_with_rng};
use log::info;
use serde::Serialize;

pub struct GenerateCommandConfig<'a> {
    pub lottery: &'a str,
    pub count: usize,
    pub seed: Option<u64>,
    pub include_metrics: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct GeneratedSet {
    set: usize,
    #[serde(flatten)]
    ticket: Ticket,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<DerivedMetrics>,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    lottery: &'a str,
    sets: Vec<GeneratedSet>,
    disclaimer: &'static str,
}

pub fn run(cfg: GenerateCommandConfig<'_>) -> fortuna_core::Result<()> {
    let kind = super::parse_lottery(cfg.lottery)?;
    let config = kind.config();
    let mut rng = super::make_rng(cfg.seed);
    info!("generating {} sets of {kind} numbers", cfg.count);

    let mut sets = Vec::with_capacity(cfg.count);
    for i in 0..cfg.count {
        let ticket = config.generate_ticket_with_rng(&mut rng)?;
        let metrics = cfg
            .include_metrics
            .then(|| derive_metrics_with_rng(&DEFAULT_METRIC_LABELS, &mut rng));
        sets.push(GeneratedSet {
            set: i + 1,
            ticket,
            metrics,
        });
    }

    if cfg.json {
        let output = GenerateOutput {
            lottery: kind.id(),
            sets,
            disclaimer: fortuna_core::DISCLAIMER,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{kind}: {} set(s)\n", cfg.count);
    for set in &sets {
        println!("  Set {}: {}", set.set, set.ticket);
        if let Some(metrics) = &set.metrics {
            for (label, value) in metrics.iter() {
                println!("    {label:<14} {value:.3}");
            }
        }
    }
    super::print_disclaimer();
    Ok(())
}
