pub mod evaluate;
pub mod explain;
pub mod generate;
pub mod metrics;
pub mod synth;

use fortuna_core::{DEFAULT_METRIC_LABELS, LotteryKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Lottery ids accepted on the command line.
pub const LOTTERY_IDS: [&str; 6] = [
    "mega7",
    "easy6",
    "fast5",
    "powerball",
    "euromillions",
    "omillionaire",
];

/// Parse a lottery id into its kind.
pub fn parse_lottery(s: &str) -> fortuna_core::Result<LotteryKind> {
    s.parse()
}

/// Seeded RNG when a seed is given, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Split a comma-separated label list, dropping blanks.
/// `None` yields the default metric labels.
pub fn parse_labels(s: Option<&str>) -> Vec<String> {
    match s {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        None => DEFAULT_METRIC_LABELS.iter().map(|l| l.to_string()).collect(),
    }
}

/// Print the non-prediction notice to stdout.
pub fn print_disclaimer() {
    println!("\n⚠️  {}", fortuna_core::DISCLAIMER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // -----------------------------------------------------------------------
    // LOTTERY_IDS / parse_lottery tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_lottery_ids_match_table() {
        assert_eq!(LOTTERY_IDS.len(), LotteryKind::ALL.len());
        for (id, kind) in LOTTERY_IDS.iter().zip(LotteryKind::ALL) {
            assert_eq!(*id, kind.id());
        }
    }

    #[test]
    fn test_parse_lottery_known() {
        assert_eq!(parse_lottery("fast5").unwrap(), LotteryKind::Fast5);
    }

    #[test]
    fn test_parse_lottery_unknown() {
        assert!(parse_lottery("keno").is_err());
    }

    // -----------------------------------------------------------------------
    // parse_labels tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_labels_default() {
        let labels = parse_labels(None);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "frequency");
    }

    #[test]
    fn test_parse_labels_trims_and_drops_blanks() {
        assert_eq!(parse_labels(Some(" a, b,,c ,")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_labels_empty_string() {
        assert!(parse_labels(Some("")).is_empty());
    }

    // -----------------------------------------------------------------------
    // make_rng tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_make_rng_seeded_is_reproducible() {
        let a: u64 = make_rng(Some(11)).random();
        let b: u64 = make_rng(Some(11)).random();
        assert_eq!(a, b);
    }
}
