use fortuna_core::derive_metrics_with_rng;

pub fn run(labels: Option<&str>, seed: Option<u64>) -> fortuna_core::Result<()> {
    let labels = super::parse_labels(labels);
    let mut rng = super::make_rng(seed);
    let metrics = derive_metrics_with_rng(&labels, &mut rng);

    println!("  {:<16} {:>6}", "Metric", "Score");
    println!("  {}", "-".repeat(23));
    for (label, value) in metrics.iter() {
        println!("  {label:<16} {value:>6.3}");
    }
    println!("\nThese scores are independent random draws. They describe nothing.");
    super::print_disclaimer();
    Ok(())
}
