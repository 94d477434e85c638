//! Dijkstra path search implementation.

use std::collections::HashSet;
use std::hash::Hash;

use log::trace;

use crate::numtraits::{CheckedAdd, Zero};
use crate::store::Graph;

use super::frontier::Frontier;
use super::graph::GraphSolver;
use super::tree::PathTree;

impl<T, W> GraphSolver<T, W> for Graph<T, W> where T: Clone + Eq + Hash, W: Copy + Ord + CheckedAdd + Zero {
    fn shortest_paths(&self, start: &T) -> PathTree<T, W> {
        let mut tree = PathTree::new(start.clone());

        // Unknown start node is isolated: reachable from itself only
        if !self.contains(start) {
            trace!("search from unknown node, nothing reachable");
            return tree;
        }

        // Algorithm state
        let mut finalized = HashSet::<T>::new();
        let mut frontier = Frontier::<T, W>::new();
        let mut max_frontier = 0;

        // Add the starting point to the frontier, it will be the first node visited
        frontier.push(start.clone(), W::ZERO);

        // Run until we have visited every node in the frontier
        while let Some((id, cost)) = frontier.pop() {
            // Outdated entry, this node was already reached with a lower cost
            if !finalized.insert(id.clone()) {
                continue;
            }

            // Loop all the neighboring nodes
            if let Some(neighbors) = self.neighbors(&id) {
                for (n_node, n_cost) in neighbors.iter() {
                    // If we already explored the node - skip it
                    if finalized.contains(n_node) {
                        continue;
                    }

                    // A cost that does not fit into `W` is never a shortest one
                    let node_cost = match cost.checked_add(*n_cost) {
                        Some(node_cost) => node_cost,
                        None => continue,
                    };
                    if tree.relax(n_node, &id, node_cost) {
                        frontier.push(n_node.clone(), node_cost);
                    }
                }
            }
            max_frontier = max_frontier.max(frontier.len());
        }

        trace!("search done, {} nodes reached, frontier peaked at {}", tree.reachable_count(), max_frontier);
        tree
    }

    fn path(&self, from: &T, to: &T) -> Option<Vec<T>> {
        // Don't run when either end is not in the graph
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.shortest_paths(from).path_to(to)
    }
}
