use clap::Parser;
use minimal_subgraph_embedding::{
    exact::{solve_exact_with, Enumeration},
    logging,
    output::save_solution,
    parser::parse_input_file,
    Matrix,
};
use std::path::PathBuf;
use tracing::info;

/// Exact Solver for Minimal Subgraph Embedding
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file containing both graphs
    input: PathBuf,

    /// Path the minimal change and delta matrix are written to
    output: PathBuf,

    /// Visit every full permutation of the target vertices instead of each
    /// assignment once
    #[arg(long, default_value_t = false)]
    full_permutations: bool,
}

fn print_matrix(matrix: &Matrix) {
    for row in matrix.rows() {
        println!("  {:?}", row);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();

    let instance = parse_input_file(&args.input)?;
    let (g, h) = (&instance.pattern, &instance.target);

    println!("Graph 1 ({}x{}):", g.size(), g.size());
    print_matrix(g);
    println!();
    println!("Graph 2 ({}x{}):", h.size(), h.size());
    print_matrix(h);
    println!();

    let enumeration = if args.full_permutations {
        Enumeration::Permutations
    } else {
        Enumeration::PartialPermutations
    };
    info!(
        candidates = enumeration.candidates(g.size(), h.size()),
        "running exact search"
    );

    let start_time = std::time::Instant::now();
    let solution = solve_exact_with(g, h, enumeration)?;
    let elapsed = start_time.elapsed();

    println!("Minimal change: {}", solution.cost);
    println!("Assignment (G -> H): {:?}", solution.assignment);
    println!("Evaluated assignments: {}", solution.evaluated);
    println!("Computation time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("Minimal subgraph:");
    print_matrix(&solution.delta);

    save_solution(&args.output, &solution)?;
    info!(output = %args.output.display(), "solution written");

    Ok(())
}
