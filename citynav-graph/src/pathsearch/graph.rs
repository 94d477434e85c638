//! Path solver graph traits.

use std::hash::Hash;

use super::tree::PathTree;

/// Graph building functions.
pub trait GraphBuilder<T, W> {
    /// Add an undirected edge `a -- b`, creating both nodes if needed.
    fn add_edge(&mut self, a: T, b: T, weight: W);
}

/// Path finding functions.
pub trait GraphSolver<T: Eq + Hash, W> {
    /// Minimum distances and predecessors of every node reachable from `start`.
    fn shortest_paths(&self, start: &T) -> PathTree<T, W>;

    /// Find a path from `from` node to `to` node, both ends included.
    /// `None` if either node is unknown or there is no path.
    fn path(&self, from: &T, to: &T) -> Option<Vec<T>>;
}
