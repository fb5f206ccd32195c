use clap::Parser;
use minimal_subgraph_embedding::{
    approx::{max_stride, solve_approx_permuted, windows},
    logging,
    output::save_solution,
    parser::parse_input_file,
    Matrix,
};
use std::path::PathBuf;
use tracing::info;

/// Approximation Solver for Minimal Subgraph Embedding
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file containing both graphs
    input: PathBuf,

    /// Path the minimal change and delta matrix are written to
    output: PathBuf,

    /// Try every ordering of this many leading pattern vertices (1 = none)
    #[arg(short = 'p', long, default_value_t = 1)]
    perm_coeff: usize,
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

    info!(
        max_stride = max_stride(g.size(), h.size()),
        windows = windows(g.size(), h.size()).count(),
        perm_coeff = args.perm_coeff,
        "running stride-window search"
    );

    let start_time = std::time::Instant::now();
    let solution = solve_approx_permuted(g, h, args.perm_coeff)?;
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
