//! CLI for quantum fortuna: lottery numbers that are exactly as good as chance.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fortuna")]
#[command(about = "Quantum Fortuna: an educational tool showing why predicting lottery numbers fails")]
#[command(after_help = "This is an educational project, not a prediction tool.")]
#[command(version = fortuna_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lottery number sets from a uniform random generator
    GenerateNumbers {
        /// Lottery format
        #[arg(long, default_value = "mega7", value_parser = commands::LOTTERY_IDS)]
        lottery: String,

        /// Number of sets to generate
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Show decorative derived metrics next to each set
        #[arg(long)]
        metrics: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the frequency model against a random baseline
    EvaluateModel {
        /// Lottery format
        #[arg(long, default_value = "mega7", value_parser = commands::LOTTERY_IDS)]
        lottery: String,

        /// Number of trials
        #[arg(long, default_value = "1000")]
        trials: usize,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Trailing draws the model looks at
        #[arg(long, default_value = "5")]
        window: usize,

        /// Directory holding historical draw CSV files (missing files are synthesized)
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Write the full report as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Print decorative derived metrics
    Metrics {
        /// Comma-separated labels (default: frequency,recency,entropy,cooccurrence,seasonality)
        #[arg(long)]
        labels: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write synthetic draw history for every lottery whose file is missing
    SynthData {
        /// Target directory
        #[arg(long, default_value = "data")]
        data_dir: String,
    },

    /// Explain where the numbers come from
    Explain,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateNumbers {
            lottery,
            count,
            seed,
            metrics,
            json,
        } => commands::generate::run(commands::generate::GenerateCommandConfig {
            lottery: &lottery,
            count,
            seed,
            include_metrics: metrics,
            json,
        }),
        Commands::EvaluateModel {
            lottery,
            trials,
            seed,
            window,
            data_dir,
            output,
        } => commands::evaluate::run(commands::evaluate::EvaluateCommandConfig {
            lottery: &lottery,
            trials,
            seed,
            window,
            data_dir: &data_dir,
            output_path: output.as_deref(),
        }),
        Commands::Metrics { labels, seed } => commands::metrics::run(labels.as_deref(), seed),
        Commands::SynthData { data_dir } => commands::synth::run(&data_dir),
        Commands::Explain => {
            commands::explain::run();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
