use clap::Parser;
use induced_subgraph_search::{
    mapping::count_induced_subgraphs,
    parser::write_instance,
    utils::{format_mapping, parse_probability},
    Graph,
};
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Input Generator for induced subgraph search instances.
///
/// This tool writes a host graph followed by a pattern graph in the format
/// read by `subgraph-search`:
///
/// <n> <m>
/// <m lines of "u v">
///
/// <n> <m>
/// <m lines of "u v">
///
/// Both graphs are random with independent edge probabilities. Unless
/// `--no-plant` is given, the pattern is then copied onto a random set of
/// host vertices: every pattern pair is made adjacent in the host exactly
/// when it is adjacent in the pattern, so the instance has at least one
/// induced embedding.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random instances for induced subgraph search"
)]
struct Args {
    /// Number of vertices in the host graph
    #[arg(long)]
    host_vertices: usize,

    /// Number of vertices in the pattern graph, at most host_vertices
    #[arg(long)]
    pattern_vertices: usize,

    /// Density (probability of an edge) for the host graph
    #[arg(long, default_value_t = 0.30, value_parser = parse_probability)]
    density_host: f64,

    /// Density (probability of an edge) for the pattern graph
    #[arg(long, default_value_t = 0.50, value_parser = parse_probability)]
    density_pattern: f64,

    /// Skip planting the pattern into the host
    #[arg(long, default_value_t = false)]
    no_plant: bool,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the instance (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// Select a random injective mapping from pattern vertices into host vertices
fn random_injective_mapping<R: Rng + ?Sized>(n_p: usize, n_h: usize, rng: &mut R) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..n_h).collect();
    pool.shuffle(rng);
    pool.truncate(n_p);
    pool
}

/// Rewrite host adjacency among `mapping`'s image so it equals the pattern's.
fn plant_pattern(host: &mut Graph, pattern: &Graph, mapping: &[usize]) {
    for (i, j) in (0..pattern.num_vertices()).tuple_combinations() {
        if pattern.has_edge(i, j) {
            host.add_edge(mapping[i], mapping[j]);
        } else {
            host.remove_edge(mapping[i], mapping[j]);
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.pattern_vertices > args.host_vertices {
        eprintln!("Error: pattern_vertices must not exceed host_vertices.");
        std::process::exit(1);
    }

    // Initialize RNG
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut host = Graph::random(args.host_vertices, args.density_host, &mut rng);
    let pattern = Graph::random(args.pattern_vertices, args.density_pattern, &mut rng);

    let planted = if args.no_plant {
        None
    } else {
        let mapping = random_injective_mapping(args.pattern_vertices, args.host_vertices, &mut rng);
        plant_pattern(&mut host, &pattern, &mapping);
        Some(mapping)
    };

    let mut writer = BufWriter::new(File::create(&args.output)?);
    write_instance(&mut writer, &host, &pattern)?;
    writer.flush()?;

    // Print stats to stdout (not into the file)
    println!("Generated instance:");
    println!("  host = {} vertices, {} edges", host.num_vertices(), host.num_edges());
    println!(
        "  pattern = {} vertices, {} edges",
        pattern.num_vertices(),
        pattern.num_edges()
    );
    println!("  density_host = {:.3}", args.density_host);
    println!("  density_pattern = {:.3}", args.density_pattern);
    println!("  seed = {}", seed);
    if let Some(mapping) = &planted {
        println!("  planted mapping: {}", format_mapping(mapping));
    }
    if host.num_vertices() <= 12 {
        println!(
            "  induced embeddings: {}",
            count_induced_subgraphs(&host, &pattern)
        );
    }
    println!("  output file: {:?}", args.output);

    Ok(())
}
