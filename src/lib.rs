use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// Represents an undirected simple graph on vertices `0..n`.
///
/// Adjacency is stored twice: a neighbor list per vertex for degree and
/// neighbor enumeration, and a symmetric boolean matrix for O(1) edge tests.
/// Every mutation updates both.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    /// Neighbor list: adj[v] holds every vertex adjacent to v, in no particular order
    adj: Vec<Vec<usize>>,
    /// Adjacency matrix: matrix[u][v] == matrix[v][u] == true iff {u, v} is an edge
    matrix: Vec<Vec<bool>>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            adj: vec![Vec::new(); n],
            matrix: vec![vec![false; n]; n],
        }
    }

    /// Build a graph from an edge list. Pairs that `add_edge` would ignore
    /// (out of range, self-loops, repeats) are dropped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Build a random graph, see [`Graph::generate_random`].
    pub fn random<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Self {
        let mut graph = Graph::new(0);
        graph.generate_random(n, p, rng);
        graph
    }

    /// Reset to `n` isolated vertices, then include each pair `{i, j}`, `i < j`,
    /// independently when a uniform draw from `[0, 1)` falls below `p`.
    ///
    /// `p` is not validated: `p <= 0` gives no edges, `p >= 1` the complete graph.
    pub fn generate_random<R: Rng + ?Sized>(&mut self, n: usize, p: f64, rng: &mut R) {
        *self = Graph::new(n);
        for (i, j) in (0..n).tuple_combinations() {
            if rng.gen::<f64>() < p {
                self.insert_unchecked(i, j);
            }
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Half the degree sum; every edge is recorded once per endpoint.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn in_range(&self, v: usize) -> bool {
        v < self.n
    }

    fn insert_unchecked(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.matrix[u][v] = true;
        self.matrix[v][u] = true;
    }

    /// Insert `{u, v}`. Ignored when either endpoint is out of range, when
    /// `u == v`, or when the edge already exists.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if self.in_range(u) && self.in_range(v) && u != v && !self.matrix[u][v] {
            self.insert_unchecked(u, v);
        }
    }

    /// Remove `{u, v}` if present; no-op otherwise.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if !self.in_range(u) || !self.in_range(v) || !self.matrix[u][v] {
            return;
        }
        if let Some(pos) = self.adj[u].iter().position(|&x| x == v) {
            self.adj[u].swap_remove(pos);
        }
        if let Some(pos) = self.adj[v].iter().position(|&x| x == u) {
            self.adj[v].swap_remove(pos);
        }
        self.matrix[u][v] = false;
        self.matrix[v][u] = false;
    }

    /// O(1) edge test. Out-of-range endpoints are reported as non-adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.in_range(u) && self.in_range(v) && self.matrix[u][v]
    }

    /// Number of neighbors of `v`, 0 when `v` is out of range.
    pub fn degree(&self, v: usize) -> usize {
        self.adj.get(v).map_or(0, Vec::len)
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adj.get(v).map_or(&[][..], Vec::as_slice)
    }

    pub fn adjacency_matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Every edge once as `(i, j)` with `i < j`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n)
            .tuple_combinations()
            .filter(move |&(i, j)| self.matrix[i][j])
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.matrix == other.matrix
    }
}

impl Eq for Graph {}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for j in 0..self.n {
            write!(f, "{} ", j)?;
        }
        writeln!(f)?;
        for (i, row) in self.matrix.iter().enumerate() {
            write!(f, "{}: ", i)?;
            for &cell in row {
                write!(f, "{} ", u8::from(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Represents an injective mapping from pattern graph to host graph:
/// position `i` holds the host vertex assigned to pattern vertex `i`.
pub type Mapping = Vec<usize>;

// Module declarations
pub mod error;
pub mod mapping;
pub mod parser;
pub mod svg;
pub mod timing;
pub mod utils;

pub use error::Error;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn path4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_graph_creation() {
        let g = Graph::new(3);
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 0);
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.degree(0), 0);
        assert!(!g.has_edge(0, 0));
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = Graph::new(3);
        g.add_edge(0, 2);
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(2), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_add_existing_edge_is_noop() {
        let mut g = path4();
        g.add_edge(1, 0);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.num_edges(), 3);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 4)]
    #[case(7, 1)]
    fn test_add_edge_ignores_invalid(#[case] u: usize, #[case] v: usize) {
        let mut g = path4();
        let before = g.clone();
        g.add_edge(u, v);
        assert_eq!(g, before);
        assert_eq!(g.num_edges(), 3);
    }

    #[rstest]
    #[case(0, 9)]
    #[case(9, 0)]
    #[case(usize::MAX, usize::MAX)]
    fn test_queries_out_of_range(#[case] u: usize, #[case] v: usize) {
        let g = path4();
        assert!(!g.has_edge(u, v));
        assert_eq!(g.degree(u.max(v)), 0);
        assert!(g.neighbors(u.max(v)).is_empty());
    }

    #[test]
    fn test_add_then_remove_restores_graph() {
        let mut g = path4();
        let before = g.clone();
        g.add_edge(0, 3);
        assert_eq!(g.num_edges(), 4);
        g.remove_edge(3, 0);
        assert_eq!(g, before);
        assert_eq!(g.neighbors(0), before.neighbors(0));
        assert_eq!(g.neighbors(3), before.neighbors(3));
    }

    #[test]
    fn test_remove_absent_edge_is_noop() {
        let mut g = path4();
        g.remove_edge(0, 2);
        g.remove_edge(0, 99);
        assert_eq!(g, path4());
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn test_list_and_matrix_agree() {
        let mut g = Graph::from_edges(5, &[(0, 1), (0, 2), (3, 4), (2, 4)]);
        g.remove_edge(0, 2);
        g.add_edge(1, 3);
        for v in 0..5 {
            let from_matrix = g.adjacency_matrix()[v].iter().filter(|&&b| b).count();
            assert_eq!(g.degree(v), from_matrix);
            for &w in g.neighbors(v) {
                assert!(g.has_edge(v, w));
            }
        }
    }

    #[test]
    fn test_edges_listed_once_in_order() {
        let g = Graph::from_edges(4, &[(3, 2), (1, 0), (2, 1), (1, 2)]);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_generate_random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let complete = Graph::random(6, 1.0, &mut rng);
        assert_eq!(complete.num_edges(), 15);
        let empty = Graph::random(6, 0.0, &mut rng);
        assert_eq!(empty.num_edges(), 0);
        assert_eq!(empty.num_vertices(), 6);
    }

    #[test]
    fn test_generate_random_overwrites_state() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = path4();
        g.generate_random(3, 0.0, &mut rng);
        assert_eq!(g, Graph::new(3));
    }

    #[test]
    fn test_generate_random_is_seed_deterministic() {
        let a = Graph::random(12, 0.4, &mut StdRng::seed_from_u64(42));
        let b = Graph::random(12, 0.4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.edges().all(|(i, j)| i != j));
    }

    #[test]
    fn test_display_matrix() {
        let g = Graph::from_edges(2, &[(0, 1)]);
        assert_eq!(g.to_string(), "   0 1 \n0: 0 1 \n1: 1 0 \n");
    }
}
