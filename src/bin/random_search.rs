use clap::Parser;
use induced_subgraph_search::{
    svg::{render_comparison, render_graph, save_svg},
    timing::timed_search,
    utils::{format_mapping, parse_probability},
    Graph,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

/// Generate a random host and pattern and search for induced embeddings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices in the host graph
    #[arg(long)]
    host_vertices: usize,

    /// Number of vertices in the pattern graph
    #[arg(long)]
    pattern_vertices: usize,

    /// Probability of each edge, used for both graphs
    #[arg(long, value_parser = parse_probability)]
    probability: f64,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a side-by-side SVG of the first mapping to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write an SVG of the host graph alone to this path
    #[arg(long)]
    host_svg: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.pattern_vertices > args.host_vertices {
        eprintln!("Error: the pattern cannot have more vertices than the host graph");
        std::process::exit(1);
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let host = Graph::random(args.host_vertices, args.probability, &mut rng);
    let pattern = Graph::random(args.pattern_vertices, args.probability, &mut rng);

    println!("Generated graphs (seed {}):", seed);
    println!(
        "  Host: {} vertices, {} edges",
        host.num_vertices(),
        host.num_edges()
    );
    println!(
        "  Pattern: {} vertices, {} edges",
        pattern.num_vertices(),
        pattern.num_edges()
    );
    println!();
    println!("Host adjacency matrix:");
    print!("{}", host);
    println!();
    println!("Pattern adjacency matrix:");
    print!("{}", pattern);
    println!();

    if let Some(path) = &args.host_svg {
        save_svg(path, &render_graph(&host)?)?;
        println!("Host graph saved to {}", path.display());
    }

    let (mappings, elapsed) = timed_search(&host, &pattern);
    println!("Search time: {:.6}s", elapsed.as_secs_f64());
    println!("Found {} induced subgraphs", mappings.len());

    match mappings.first() {
        Some(first) => {
            println!();
            println!("First mapping (pattern -> host):");
            println!("  {}", format_mapping(first));
            if let Some(path) = &args.svg {
                save_svg(path, &render_comparison(&host, &pattern, first)?)?;
                println!("Result saved to {}", path.display());
            }
        }
        None => println!("No induced subgraph isomorphic to the pattern was found."),
    }

    Ok(())
}
