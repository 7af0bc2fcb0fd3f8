use clap::Parser;
use induced_subgraph_search::{
    mapping::{find_induced_subgraphs, par_find_induced_subgraphs},
    parser::parse_input_file,
    svg::{render_comparison, render_graph, save_svg},
    utils::{format_mapping, num_permutations},
    Graph,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Find every node-induced embedding of a pattern graph in a host graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the instance file (host graph, then pattern graph)
    #[arg(short, long)]
    input: PathBuf,

    /// Split the search across threads
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Write a side-by-side SVG of the first mapping to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write an SVG of the host graph alone to this path
    #[arg(long)]
    host_svg: Option<PathBuf>,

    /// Print at most this many mappings
    #[arg(long, default_value_t = 100)]
    max_print: usize,
}

fn describe(name: &str, graph: &Graph) {
    println!(
        "{}: {} vertices, {} edges",
        name,
        graph.num_vertices(),
        graph.num_edges()
    );
    print!("{}", graph);
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Induced Subgraph Search");
    println!("=======================");
    println!();

    let (host, pattern) = match parse_input_file(&args.input) {
        Ok(graphs) => graphs,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    describe("Host graph", &host);
    describe("Pattern graph", &pattern);

    if let Some(path) = &args.host_svg {
        save_svg(path, &render_graph(&host)?)?;
        println!("Host graph saved to {}", path.display());
    }

    if pattern.num_vertices() > host.num_vertices() {
        eprintln!("Error: the pattern cannot have more vertices than the host graph");
        std::process::exit(1);
    }

    info!(
        search_space = num_permutations(host.num_vertices(), pattern.num_vertices()),
        parallel = args.parallel,
        "searching"
    );
    let start = Instant::now();
    let mappings = if args.parallel {
        par_find_induced_subgraphs(&host, &pattern)
    } else {
        find_induced_subgraphs(&host, &pattern)
    };
    let elapsed = start.elapsed();

    println!("Search time: {:.6}s", elapsed.as_secs_f64());
    println!("Found {} induced subgraphs", mappings.len());
    println!();

    let Some(first) = mappings.first() else {
        println!("No induced subgraph isomorphic to the pattern was found.");
        return Ok(());
    };

    println!("Mappings (pattern -> host):");
    for (i, mapping) in mappings.iter().take(args.max_print).enumerate() {
        println!("  {}: {}", i + 1, format_mapping(mapping));
    }
    if mappings.len() > args.max_print {
        println!("  ... {} more", mappings.len() - args.max_print);
    }

    if let Some(path) = &args.svg {
        save_svg(path, &render_comparison(&host, &pattern, first)?)?;
        println!();
        println!("First mapping saved to {}", path.display());
    }

    Ok(())
}
