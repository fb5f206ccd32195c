use clap::Parser;
use minimal_subgraph_embedding::{generate::random_instance, logging, output::save_instance};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

/// Input Generator for Minimal Subgraph Embedding problem instances.
///
/// Writes a pattern graph and a larger target graph in the layout read by the
/// exact and approximation solvers:
///
/// <n1>
/// <pattern matrix: n1 rows of n1 space-separated weights>
///
/// <n2>
/// <target matrix: n2 rows of n2 space-separated weights>
///
/// Every weight is drawn independently and uniformly from 0..=max_weight.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random test instances for Minimal Subgraph Embedding"
)]
struct Args {
    /// Number of vertices in pattern graph G (n1)
    #[arg(long, default_value_t = 5)]
    n1: usize,

    /// Number of vertices in target graph H (n2), must be >= n1
    #[arg(long, default_value_t = 10)]
    n2: usize,

    /// Largest edge weight
    #[arg(long, default_value_t = 9)]
    max_weight: usize,

    /// Remove self-loops from both graphs
    #[arg(long, default_value_t = false)]
    zero_diagonal: bool,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the instance to
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    if args.n1 > args.n2 {
        return Err(format!("n1 ({}) must not exceed n2 ({})", args.n1, args.n2).into());
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let instance = random_instance(
        args.n1,
        args.n2,
        args.max_weight,
        args.zero_diagonal,
        &mut rng,
    );
    save_instance(&args.output, &instance)?;

    info!(
        n1 = args.n1,
        n2 = args.n2,
        max_weight = args.max_weight,
        seed,
        output = %args.output.display(),
        "instance written"
    );
    println!("Generated instance:");
    println!("  n1 = {}", args.n1);
    println!("  n2 = {}", args.n2);
    println!("  max_weight = {}", args.max_weight);
    println!("  zero_diagonal = {}", args.zero_diagonal);
    println!("  seed = {}", seed);
    println!("  output file: {:?}", args.output);

    Ok(())
}
