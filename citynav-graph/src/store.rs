//! Adjacency store for a weighted undirected graph.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::numtraits::Zero;
use crate::pathsearch::GraphBuilder;

/// Weighted undirected graph, only grows (there is no edge removal).
#[derive(Clone, Debug)]
pub struct Graph<T, W> {
    /// Links node with tag `<T>` to the list of adjacent nodes with corresponding weights `<W>`,
    /// in the order the edges were added.
    nodes: HashMap<T, Vec<(T, W)>>,

    /// Number of undirected edges, parallel edges counted individually.
    edge_count: usize,
}

impl<T, W> Graph<T, W> {
    /// Create new instance with empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new(),
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All known nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.keys()
    }
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<T: Eq + Hash, W> Graph<T, W> {
    pub fn contains(&self, node: &T) -> bool {
        self.nodes.contains_key(node)
    }

    /// Adjacent nodes with weights, in insertion order. `None` if the node is unknown.
    pub fn neighbors(&self, node: &T) -> Option<&[(T, W)]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    /// Make sure the node exists, even without any edges.
    /// Returns `true` if the node was not known before.
    pub fn add_node(&mut self, node: T) -> bool {
        if self.nodes.contains_key(&node) {
            false
        } else {
            self.nodes.insert(node, Vec::new());
            true
        }
    }
}

impl<T: Eq + Hash, W: Clone> Graph<T, W> {
    /// Weight of the first edge `from -- to` found in `from`'s adjacency list.
    pub fn edge_weight(&self, from: &T, to: &T) -> Option<W> {
        self.nodes.get(from)?.iter().find(|(n, _)| n == to).map(|(_, w)| w.clone())
    }
}

impl<T, W> GraphBuilder<T, W> for Graph<T, W> where T: Clone + Eq + Hash, W: Clone + PartialOrd + Zero {
    fn add_edge(&mut self, a: T, b: T, weight: W) {
        debug_assert!(weight >= W::ZERO, "Negative weight detected");
        self.add_node(a.clone());
        self.add_node(b.clone());

        // Both lists exist now, since the nodes were just added
        if let Some(links) = self.nodes.get_mut(&a) {
            links.push((b.clone(), weight.clone()));
        }
        if let Some(links) = self.nodes.get_mut(&b) {
            links.push((a, weight));
        }
        self.edge_count += 1;
        trace!("edge added, {} nodes {} edges", self.nodes.len(), self.edge_count);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Graph, GraphBuilder};

    #[test]
    fn empty_graph() {
        let g = Graph::<&str, u64>::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(&"A"));
        assert_eq!(g.neighbors(&"A"), None);
    }

    #[test]
    fn add_edge_is_undirected() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 5_u64);
        assert_eq!(g.neighbors(&"A"), Some(&[("B", 5)][..]));
        assert_eq!(g.neighbors(&"B"), Some(&[("A", 5)][..]));
        assert_eq!(g.edge_weight(&"A", &"B"), Some(5));
        assert_eq!(g.edge_weight(&"B", &"A"), Some(5));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut g = Graph::new();
        g.add_edge("A", "C", 10_u64);
        g.add_edge("A", "B", 5);
        g.add_edge("D", "A", 1);
        assert_eq!(g.neighbors(&"A"), Some(&[("C", 10), ("B", 5), ("D", 1)][..]));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 7_u64);
        g.add_edge("A", "B", 3);
        assert_eq!(g.neighbors(&"A"), Some(&[("B", 7), ("B", 3)][..]));
        assert_eq!(g.neighbors(&"B"), Some(&[("A", 7), ("A", 3)][..]));
        assert_eq!(g.edge_weight(&"A", &"B"), Some(7)); // First match wins
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn isolated_node_is_addressable() {
        let mut g = Graph::<&str, u64>::new();
        assert!(g.add_node("X"));
        assert!(!g.add_node("X"));
        assert!(g.contains(&"X"));
        assert_eq!(g.neighbors(&"X"), Some(&[][..]));
        assert_eq!(g.edge_weight(&"X", &"Y"), None);
    }

    #[test]
    fn zero_weight_and_self_loop() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 0_u64);
        g.add_edge("C", "C", 2);
        assert_eq!(g.edge_weight(&"A", &"B"), Some(0));
        assert_eq!(g.neighbors(&"C"), Some(&[("C", 2), ("C", 2)][..]));
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    #[should_panic(expected = "Negative weight detected")]
    #[cfg(debug_assertions)]
    fn negative_weight_is_caught_in_debug() {
        let mut g = Graph::new();
        g.add_edge("A", "B", -3_i64);
    }
}
