use clap::Parser;
use minimal_subgraph_embedding::{
    experiment::{run_batch, ExperimentConfig},
    logging,
    output::save_records_csv,
    stats::ErrorSummary,
};
use std::path::PathBuf;
use tracing::info;

/// Compare the exact and approximate solvers on random instances
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file receiving one row per trial
    #[arg(default_value = "experiment_results.csv")]
    output_csv: PathBuf,

    /// Edge weights are drawn from 0..=max_edge_weight
    #[arg(default_value_t = 20)]
    max_edge_weight: usize,

    /// Number of random instances
    #[arg(default_value_t = 10000)]
    num_trials: usize,

    /// Number of worker threads
    #[arg(default_value_t = 5)]
    num_workers: usize,

    /// Smallest pattern size
    #[arg(long, default_value_t = 3)]
    min_n1: usize,

    /// Largest pattern size
    #[arg(long, default_value_t = 8)]
    max_n1: usize,

    /// Smallest target size (always raised above the trial's pattern size)
    #[arg(long, default_value_t = 4)]
    min_n2: usize,

    /// Largest target size
    #[arg(long, default_value_t = 10)]
    max_n2: usize,

    /// Leading pattern vertices permuted by the approximate solver
    #[arg(long, default_value_t = 1)]
    perm_coeff: usize,

    /// Base random seed (if omitted, uses the current time)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn to_config(&self) -> ExperimentConfig {
        ExperimentConfig {
            num_trials: self.num_trials,
            n1_range: self.min_n1..=self.max_n1,
            n2_range: self.min_n2..=self.max_n2,
            max_edge_weight: self.max_edge_weight,
            num_workers: self.num_workers,
            perm_coeff: self.perm_coeff,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();
    let config = args.to_config();

    println!(
        "Generating {} random test cases with max_value={}...",
        config.num_trials, config.max_edge_weight
    );
    println!(
        "Matrix size ranges: n1=[{},{}], n2=[{},{}] (where n1 < n2)",
        args.min_n1, args.max_n1, args.min_n2, args.max_n2
    );
    println!("Using {} worker threads", config.num_workers);
    println!();

    let start_time = std::time::Instant::now();
    let records = run_batch(&config)?;
    info!(
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "batch finished"
    );

    save_records_csv(&args.output_csv, &records)?;
    println!("Results saved to {}", args.output_csv.display());

    if let Some(summary) = ErrorSummary::from_records(&records) {
        println!();
        println!("============================================================");
        println!("ABSOLUTE ERROR ANALYSIS");
        println!("============================================================");
        println!("{}", summary);
    }

    Ok(())
}
