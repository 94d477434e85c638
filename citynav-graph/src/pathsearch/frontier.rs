//! Frontier for the Dijkstra algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier for the Dijkstra algorithm.
/// Min-priority queue with lazy deletion: a node is pushed again each time its cost decreases,
/// the caller skips outdated entries when they are popped.
/// Entries with equal cost are popped in insertion order.
pub(super) struct Frontier<T, W> {
    heap: BinaryHeap<Entry<T, W>>,

    /// Insertion counter used to break cost ties.
    seq: u64,
}

struct Entry<T, W> {
    cost: W,
    seq: u64,
    tag: T,
}

impl<T, W: Ord> Ord for Entry<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, since `BinaryHeap` is a max-heap
        other.cost.cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T, W: Ord> PartialOrd for Entry<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, W: Ord> PartialEq for Entry<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, W: Ord> Eq for Entry<T, W> {}

impl<T, W: Ord> Frontier<T, W> {
    /// Create new empty instance.
    pub fn new() -> Frontier<T, W> {
        Frontier {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert a node with associated cost into the priority queue.
    pub fn push(&mut self, tag: T, cost: W) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { cost, seq, tag });
    }

    /// Extract node with the least cost from the queue.
    pub fn pop(&mut self) -> Option<(T, W)> {
        self.heap.pop().map(|Entry { cost, tag, .. }| (tag, cost))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push("N", 1_u64);
    assert_eq!(f.pop(), Some(("N", 1)));
    assert_eq!(f.pop(), None);

    f.push("A", 1);
    f.push("B", 2);
    assert_eq!(f.pop(), Some(("A", 1)));
    assert_eq!(f.pop(), Some(("B", 2)));
    assert_eq!(f.pop(), None);

    f.push("X", 2);
    f.push("Y", 1);
    assert_eq!(f.pop(), Some(("Y", 1)));
    assert_eq!(f.pop(), Some(("X", 2)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_equal_cost_fifo() {
    let mut f = Frontier::new();
    f.push("C", 3_u64);
    f.push("B", 3);
    f.push("A", 3);
    f.push("Z", 0);
    assert_eq!(f.pop(), Some(("Z", 0)));
    assert_eq!(f.pop(), Some(("C", 3)));
    assert_eq!(f.pop(), Some(("B", 3)));
    assert_eq!(f.pop(), Some(("A", 3)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_duplicates_are_kept() {
    let mut f = Frontier::new();
    f.push("X", 5_u64);
    f.push("Y", 4);
    f.push("X", 2);
    assert_eq!(f.len(), 3);
    assert_eq!(f.pop(), Some(("X", 2)));
    assert_eq!(f.pop(), Some(("Y", 4)));
    // Outdated entry is still there, the caller decides what to do with it
    assert_eq!(f.pop(), Some(("X", 5)));
    assert_eq!(f.pop(), None);
    assert_eq!(f.len(), 0);
}
