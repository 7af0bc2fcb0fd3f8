use clap::Parser;
use induced_subgraph_search::{
    timing::{run_sweep, DEFAULT_SWEEP},
    utils::{parse_case, parse_probability},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

/// Time the search over random graphs of growing size
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Probability of each edge in both graphs
    #[arg(long, value_parser = parse_probability)]
    probability: f64,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Size pairs as HOST:PATTERN; repeat for several. Defaults to 6:3 8:4 10:5 12:6 15:7
    #[arg(long = "case", value_parser = parse_case)]
    cases: Vec<(usize, usize)>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let cases = if args.cases.is_empty() {
        DEFAULT_SWEEP.to_vec()
    } else {
        args.cases
    };

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, cases = cases.len(), "starting sweep");
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "{:>15}{:>15}{:>20}{:>15}",
        "Host (verts)", "Pattern (verts)", "Time (s)", "Found"
    );
    println!("{}", "-".repeat(65));

    for row in run_sweep(&cases, args.probability, &mut rng) {
        println!(
            "{:>15}{:>15}{:>20.6}{:>15}",
            row.host_vertices,
            row.pattern_vertices,
            row.elapsed.as_secs_f64(),
            row.found
        );
    }
}
