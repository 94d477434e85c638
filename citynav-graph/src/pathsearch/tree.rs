//! Shortest path tree and path reconstruction.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::errors::PathError;
use crate::numtraits::{CheckedAdd, Zero};
use crate::store::Graph;

/// Result of a single-source search: minimum distance to every reachable node
/// and the predecessor of every reachable node on one of its shortest paths.
///
/// Nodes unreachable from `start` (including nodes unknown to the graph) have no entry.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PathTree<T: Eq + Hash, W> {
    start: T,
    distances: HashMap<T, W>,
    previous: HashMap<T, T>,
}

/// One hop of a reconstructed path.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Leg<T, W> {
    pub from: T,
    pub to: T,
    pub weight: W,
}

impl<T: Clone + Eq + Hash, W: Zero> PathTree<T, W> {
    /// Tree containing only the start node at zero distance.
    pub(crate) fn new(start: T) -> Self {
        let mut distances = HashMap::new();
        distances.insert(start.clone(), W::ZERO);
        PathTree {
            start,
            distances,
            previous: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash, W: Copy + Ord> PathTree<T, W> {
    /// Record `cost` as the distance to `node` via `via` if it is strictly better than what is known.
    pub(crate) fn relax(&mut self, node: &T, via: &T, cost: W) -> bool {
        match self.distances.get(node) {
            Some(&best) if cost >= best => false,
            _ => {
                self.distances.insert(node.clone(), cost);
                self.previous.insert(node.clone(), via.clone());
                true
            }
        }
    }
}

impl<T: Eq + Hash, W: Copy> PathTree<T, W> {
    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn distance(&self, node: &T) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Predecessor of the node on its shortest path. `None` for the start node and unreachable nodes.
    pub fn predecessor(&self, node: &T) -> Option<&T> {
        self.previous.get(node)
    }

    pub fn is_reachable(&self, node: &T) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of reachable nodes, the start node included.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All reachable nodes with their distances, in unspecified order.
    pub fn distances(&self) -> impl Iterator<Item = (&T, W)> {
        self.distances.iter().map(|(t, &w)| (t, w))
    }
}

impl<T: Clone + Eq + Hash, W: Copy> PathTree<T, W> {
    /// Nodes on the path from the start node to `end`, both included.
    pub fn path_to(&self, end: &T) -> Option<Vec<T>> {
        if !self.is_reachable(end) {
            return None;
        }

        let mut path = vec![end.clone()];
        let mut current = end;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();

        Some(path)
    }
}

/// Walk the predecessor links of `tree` back from `end` and collect the edges, start to end.
///
/// Among parallel edges the first one in the adjacency list whose weight matches
/// the distance difference is taken, so the sum of leg weights always equals the distance to `end`.
/// The graph must be the one the tree was computed on; if it lost a matching edge
/// `PathError::MissingEdge` is returned.
pub fn reconstruct_path<T, W>(graph: &Graph<T, W>, tree: &PathTree<T, W>, end: &T) -> Result<Vec<Leg<T, W>>, PathError>
where
    T: Clone + Eq + Hash,
    W: Copy + Eq + CheckedAdd,
{
    if !tree.is_reachable(end) {
        return Err(PathError::Unreachable);
    }

    let mut legs = Vec::new();
    let mut current = end;
    while let Some(prev) = tree.predecessor(current) {
        let (prev_dist, cur_dist) = match (tree.distance(prev), tree.distance(current)) {
            (Some(p), Some(c)) => (p, c),
            _ => return Err(PathError::MissingEdge),
        };
        let weight = graph
            .neighbors(prev)
            .and_then(|links| links.iter().find(|(n, w)| n == current && prev_dist.checked_add(*w) == Some(cur_dist)))
            .map(|&(_, w)| w)
            .ok_or(PathError::MissingEdge)?;
        legs.push(Leg {
            from: prev.clone(),
            to: current.clone(),
            weight,
        });
        current = prev;
    }
    legs.reverse();

    Ok(legs)
}

#[cfg(test)]
mod tests {
    use crate::{reconstruct_path, Graph, GraphBuilder, GraphSolver, Leg, PathError, PathTree};

    fn leg(from: &'static str, to: &'static str, weight: u64) -> Leg<&'static str, u64> {
        Leg { from, to, weight }
    }

    #[test]
    fn relax_only_improves() {
        let mut t = PathTree::<&str, u64>::new("A");
        assert!(t.relax(&"B", &"A", 10));
        assert!(!t.relax(&"B", &"C", 10));
        assert!(!t.relax(&"B", &"C", 11));
        assert!(t.relax(&"B", &"C", 4));
        assert_eq!(t.distance(&"B"), Some(4));
        assert_eq!(t.predecessor(&"B"), Some(&"C"));
        assert_eq!(t.predecessor(&"A"), None);
        assert_eq!(t.distance(&"A"), Some(0));
    }

    #[test]
    fn reconstruct_simple() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 5_u64);
        g.add_edge("B", "C", 3);
        g.add_edge("A", "C", 10);
        let t = g.shortest_paths(&"A");
        assert_eq!(reconstruct_path(&g, &t, &"C"), Ok(vec![leg("A", "B", 5), leg("B", "C", 3)]));
        assert_eq!(t.path_to(&"C"), Some(vec!["A", "B", "C"]));
    }

    #[test]
    fn reconstruct_to_self_is_empty() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 5_u64);
        let t = g.shortest_paths(&"A");
        assert_eq!(reconstruct_path(&g, &t, &"A"), Ok(vec![]));
        assert_eq!(t.path_to(&"A"), Some(vec!["A"]));
    }

    #[test]
    fn reconstruct_unreachable() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 5_u64);
        g.add_edge("C", "D", 1);
        let t = g.shortest_paths(&"A");
        assert_eq!(reconstruct_path(&g, &t, &"C"), Err(PathError::Unreachable));
        assert_eq!(reconstruct_path(&g, &t, &"nowhere"), Err(PathError::Unreachable));
        assert_eq!(t.path_to(&"D"), None);
    }

    #[test]
    fn reconstruct_picks_matching_parallel_edge() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 10_u64);
        g.add_edge("A", "B", 3);
        let t = g.shortest_paths(&"A");
        assert_eq!(t.distance(&"B"), Some(3));
        assert_eq!(reconstruct_path(&g, &t, &"B"), Ok(vec![leg("A", "B", 3)]));
    }

    #[test]
    fn reconstruct_survives_later_parallel_edge() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 10_u64);
        let t = g.shortest_paths(&"A");
        g.add_edge("A", "B", 1);
        assert_eq!(reconstruct_path(&g, &t, &"B"), Ok(vec![leg("A", "B", 10)]));
    }

    #[test]
    fn reconstruct_next_to_max_weight() {
        let mut g = Graph::new();
        g.add_edge("A", "B", u64::MAX);
        g.add_edge("B", "C", 1);
        let t = g.shortest_paths(&"A");
        assert_eq!(reconstruct_path(&g, &t, &"B"), Ok(vec![leg("A", "B", u64::MAX)]));
        assert_eq!(reconstruct_path(&g, &t, &"C"), Err(PathError::Unreachable));
    }

    #[test]
    fn reconstruct_against_other_graph() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 10_u64);
        let t = g.shortest_paths(&"A");
        let mut other = Graph::new();
        other.add_edge("A", "B", 7_u64);
        assert_eq!(reconstruct_path(&other, &t, &"B"), Err(PathError::MissingEdge));
    }
}
