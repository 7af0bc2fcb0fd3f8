use crate::{mapping::find_induced_subgraphs, Graph, Mapping};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::info;

/// (host vertices, pattern vertices) pairs timed by default
pub const DEFAULT_SWEEP: [(usize, usize); 5] = [(6, 3), (8, 4), (10, 5), (12, 6), (15, 7)];

/// One measured search of the sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub host_vertices: usize,
    pub pattern_vertices: usize,
    pub elapsed: Duration,
    pub found: usize,
}

/// Run the full search and measure wall-clock time.
pub fn timed_search(host: &Graph, pattern: &Graph) -> (Vec<Mapping>, Duration) {
    let start = Instant::now();
    let mappings = find_induced_subgraphs(host, pattern);
    (mappings, start.elapsed())
}

/// For each case generate a random host and pattern with edge probability `p`
/// and time the search between them.
pub fn run_sweep<R: Rng + ?Sized>(cases: &[(usize, usize)], p: f64, rng: &mut R) -> Vec<SweepRow> {
    cases
        .iter()
        .map(|&(host_vertices, pattern_vertices)| {
            let host = Graph::random(host_vertices, p, rng);
            let pattern = Graph::random(pattern_vertices, p, rng);
            let (mappings, elapsed) = timed_search(&host, &pattern);
            info!(
                host_vertices,
                pattern_vertices,
                elapsed_secs = elapsed.as_secs_f64(),
                found = mappings.len(),
                "sweep case done"
            );
            SweepRow {
                host_vertices,
                pattern_vertices,
                elapsed,
                found: mappings.len(),
            }
        })
        .collect()
}
