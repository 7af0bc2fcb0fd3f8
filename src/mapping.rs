use crate::{utils::num_permutations, Graph, Mapping};
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Marks a pattern vertex that has no host vertex assigned yet.
pub const UNASSIGNED: usize = usize::MAX;

/// Find every embedding of `pattern` as a node-induced subgraph of `host`.
///
/// Mappings are returned in discovery order: pattern vertices are assigned
/// in index order and host candidates are tried in increasing index order,
/// so the result is sorted lexicographically. Automorphic images are all
/// reported. A pattern with more vertices than the host yields no mappings;
/// an empty pattern yields exactly the empty mapping.
pub fn find_induced_subgraphs(host: &Graph, pattern: &Graph) -> Vec<Mapping> {
    let mut all_mappings = Vec::new();
    let _ = visit_induced_subgraphs(host, pattern, |mapping| {
        all_mappings.push(mapping.to_vec());
        ControlFlow::Continue(())
    });
    debug!(found = all_mappings.len(), "search finished");
    all_mappings
}

/// The first mapping [`find_induced_subgraphs`] would return, without
/// exploring the rest of the search tree.
pub fn find_first_induced_subgraph(host: &Graph, pattern: &Graph) -> Option<Mapping> {
    let mut first = None;
    let _ = visit_induced_subgraphs(host, pattern, |mapping| {
        first = Some(mapping.to_vec());
        ControlFlow::Break(())
    });
    first
}

pub fn count_induced_subgraphs(host: &Graph, pattern: &Graph) -> usize {
    let mut count = 0;
    let _ = visit_induced_subgraphs(host, pattern, |_| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

/// Run the backtracking search, handing each completed mapping to `visit`
/// in discovery order. Returning `Break` from `visit` ends the search.
pub fn visit_induced_subgraphs<F>(host: &Graph, pattern: &Graph, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    let n_p = pattern.num_vertices();
    let n_h = host.num_vertices();
    debug!(
        host_vertices = n_h,
        pattern_vertices = n_p,
        search_space = num_permutations(n_h, n_p),
        "starting induced subgraph search"
    );

    if n_p > n_h {
        return ControlFlow::Continue(()); // No injective mapping exists
    }

    SearchState::new(host, pattern).backtrack(0, &mut visit)
}

/// Same result as [`find_induced_subgraphs`], including order, with the
/// branches for pattern vertex 0 explored on the rayon pool.
pub fn par_find_induced_subgraphs(host: &Graph, pattern: &Graph) -> Vec<Mapping> {
    let n_p = pattern.num_vertices();
    let n_h = host.num_vertices();

    if n_p > n_h {
        return vec![];
    }
    if n_p == 0 {
        return vec![Vec::new()];
    }

    // One branch per root candidate; each owns its mapping buffer and used set.
    let branches: Vec<Vec<Mapping>> = (0..n_h)
        .into_par_iter()
        .map(|v| {
            let mut state = SearchState::new(host, pattern);
            let mut found = Vec::new();
            if state.is_feasible(0, v) {
                state.assign(0, v);
                let _ = state.backtrack(1, &mut |mapping: &[usize]| {
                    found.push(mapping.to_vec());
                    ControlFlow::Continue(())
                });
            }
            found
        })
        .collect();

    let all_mappings: Vec<Mapping> = branches.into_iter().flatten().collect();
    debug!(found = all_mappings.len(), "parallel search finished");
    all_mappings
}

/// Check that `mapping` is a total injective map from the pattern's vertices
/// into the host's, and that adjacency agrees for every pattern vertex pair.
pub fn is_induced_embedding(host: &Graph, pattern: &Graph, mapping: &[usize]) -> bool {
    let n_p = pattern.num_vertices();
    let n_h = host.num_vertices();
    if mapping.len() != n_p {
        return false;
    }

    let mut used_vh = vec![false; n_h];
    for &v in mapping {
        if v >= n_h || used_vh[v] {
            return false;
        }
        used_vh[v] = true;
    }

    (0..n_p)
        .tuple_combinations()
        .all(|(i, j)| pattern.has_edge(i, j) == host.has_edge(mapping[i], mapping[j]))
}

/// Partial mapping plus the set of host vertices it already uses.
struct SearchState<'a> {
    host: &'a Graph,
    pattern: &'a Graph,
    mapping: Vec<usize>,
    used_vh: Vec<bool>,
}

impl<'a> SearchState<'a> {
    fn new(host: &'a Graph, pattern: &'a Graph) -> Self {
        SearchState {
            host,
            pattern,
            mapping: vec![UNASSIGNED; pattern.num_vertices()],
            used_vh: vec![false; host.num_vertices()],
        }
    }

    /// Can host vertex `v` take pattern vertex `depth` given the assignments
    /// for pattern vertices `0..depth`?
    fn is_feasible(&self, depth: usize, v: usize) -> bool {
        // Lower bound only: edges to unassigned pattern vertices are not checked here
        if self.pattern.degree(depth) > self.host.degree(v) {
            return false;
        }
        (0..depth).all(|i| self.pattern.has_edge(i, depth) == self.host.has_edge(self.mapping[i], v))
    }

    fn assign(&mut self, depth: usize, v: usize) {
        self.mapping[depth] = v;
        self.used_vh[v] = true;
    }

    fn unassign(&mut self, depth: usize) {
        let v = self.mapping[depth];
        self.used_vh[v] = false;
        self.mapping[depth] = UNASSIGNED;
    }

    /// Recursive backtracking, one pattern vertex per depth
    fn backtrack<F>(&mut self, depth: usize, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        if depth == self.mapping.len() {
            // Complete mapping found; re-validate before reporting
            if is_induced_embedding(self.host, self.pattern, &self.mapping) {
                trace!(mapping = ?self.mapping, "mapping found");
                return visit(&self.mapping);
            }
            return ControlFlow::Continue(());
        }

        for v in 0..self.host.num_vertices() {
            if self.used_vh[v] || !self.is_feasible(depth, v) {
                continue;
            }
            self.assign(depth, v);
            let flow = self.backtrack(depth + 1, visit);
            self.unassign(depth);
            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])
    }

    #[test]
    fn test_embedding_check_rejects_bad_mappings() {
        let host = triangle();
        let pattern = Graph::from_edges(2, &[(0, 1)]);
        assert!(is_induced_embedding(&host, &pattern, &[2, 0]));
        assert!(!is_induced_embedding(&host, &pattern, &[1, 1]));
        assert!(!is_induced_embedding(&host, &pattern, &[0, 3]));
        assert!(!is_induced_embedding(&host, &pattern, &[0]));
        assert!(!is_induced_embedding(&host, &pattern, &[0, UNASSIGNED]));
    }

    #[test]
    fn test_embedding_check_requires_missing_edges_to_stay_missing() {
        let host = triangle();
        let pattern = Graph::new(2);
        assert!(!is_induced_embedding(&host, &pattern, &[0, 1]));
    }

    #[test]
    fn test_degree_pruning_rejects_low_degree_hosts() {
        let host = Graph::from_edges(3, &[(0, 1)]);
        let pattern = Graph::from_edges(2, &[(0, 1)]);
        let state = SearchState::new(&host, &pattern);
        assert!(state.is_feasible(0, 0));
        assert!(!state.is_feasible(0, 2));
    }

    #[test]
    fn test_state_is_restored_after_search() {
        let host = triangle();
        let pattern = Graph::from_edges(2, &[(0, 1)]);
        let mut state = SearchState::new(&host, &pattern);
        let mut seen = 0;
        let _ = state.backtrack(0, &mut |_: &[usize]| {
            seen += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(seen, 6);
        assert!(state.mapping.iter().all(|&v| v == UNASSIGNED));
        assert!(state.used_vh.iter().all(|&u| !u));
    }

    #[test]
    fn test_first_stops_early() {
        let host = Graph::new(5);
        let pattern = Graph::new(2);
        assert_eq!(find_first_induced_subgraph(&host, &pattern), Some(vec![0, 1]));
        assert_eq!(count_induced_subgraphs(&host, &pattern), 20);
    }
}
