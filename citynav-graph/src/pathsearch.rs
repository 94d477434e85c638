//! Path search in a weighted graph.

pub use self::graph::{GraphBuilder, GraphSolver};
pub use self::tree::{reconstruct_path, Leg, PathTree};

mod dijkstra;
mod frontier;
mod graph;
mod tree;

#[cfg(test)]
use crate::Graph;

#[test]
fn test_dijkstra_search() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 1_u64);
    g.add_edge("B", "C", 2);
    g.add_edge("B", "D", 4);
    g.add_edge("C", "D", 1);
    assert_eq!(g.path(&"A", &"D"), Some(vec!["A", "B", "C", "D"]));
    assert_eq!(g.path(&"D", &"A"), Some(vec!["D", "C", "B", "A"]));
    assert_eq!(g.path(&"A", &"E"), None);
    assert_eq!(g.path(&"E", &"E"), None);
}

#[test]
fn test_dijkstra_search_all() {
    let mut g = Graph::new();
    g.add_edge("1", "2", 7_u64);
    g.add_edge("1", "3", 9);
    g.add_edge("1", "6", 14);
    g.add_edge("2", "3", 10);
    g.add_edge("2", "4", 15);
    g.add_edge("3", "4", 11);
    g.add_edge("3", "6", 2);
    g.add_edge("4", "5", 6);
    g.add_edge("5", "6", 9);
    let all = g.shortest_paths(&"1");
    assert_eq!(*all.start(), "1");
    assert_eq!(all.reachable_count(), 6);

    let mut dist = all.distances().map(|(&n, d)| (n, d)).collect::<Vec<_>>();
    dist.sort();
    assert_eq!(dist, vec![("1", 0), ("2", 7), ("3", 9), ("4", 20), ("5", 20), ("6", 11)]);

    assert_eq!(all.predecessor(&"1"), None);
    assert_eq!(all.path_to(&"4"), Some(vec!["1", "3", "4"]));
    assert_eq!(all.path_to(&"5"), Some(vec!["1", "3", "6", "5"]));
    assert_eq!(all.path_to(&"6"), Some(vec!["1", "3", "6"]));
}

#[test]
fn test_scenario_prefers_cheaper_two_hop_route() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 5_u64);
    g.add_edge("B", "C", 3);
    g.add_edge("A", "C", 10);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"C"), Some(8));
    assert_eq!(
        reconstruct_path(&g, &t, &"C"),
        Ok(vec![Leg { from: "A", to: "B", weight: 5 }, Leg { from: "B", to: "C", weight: 3 }])
    );
}

#[test]
fn test_scenario_never_added_node_is_unreachable() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 4_u64);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"D"), None);
    assert!(!t.is_reachable(&"D"));
    assert_eq!(reconstruct_path(&g, &t, &"D"), Err(crate::PathError::Unreachable));
}

#[test]
fn test_scenario_direct_edge_undercuts_three_hops() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 1_u64);
    g.add_edge("B", "C", 1);
    g.add_edge("C", "D", 1);
    g.add_edge("A", "D", 2);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"D"), Some(2));
    assert_eq!(reconstruct_path(&g, &t, &"D"), Ok(vec![Leg { from: "A", to: "D", weight: 2 }]));
}

#[test]
fn test_unknown_start() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 4_u64);
    let t = g.shortest_paths(&"X");
    assert_eq!(*t.start(), "X");
    assert_eq!(t.distance(&"X"), Some(0));
    assert_eq!(t.reachable_count(), 1);
    assert_eq!(t.distance(&"A"), None);
    assert_eq!(reconstruct_path(&g, &t, &"X"), Ok(vec![]));

    let empty = Graph::<&str, u64>::new();
    assert_eq!(empty.shortest_paths(&"X").reachable_count(), 1);
}

#[test]
fn test_isolated_components() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 1_u64);
    g.add_edge("C", "D", 1);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.reachable_count(), 2);
    assert!(t.is_reachable(&"B"));
    assert!(!t.is_reachable(&"C"));
    assert!(!t.is_reachable(&"D"));
}

#[test]
fn test_zero_weights() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 0_u64);
    g.add_edge("B", "C", 0);
    g.add_edge("A", "C", 1);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"C"), Some(0));
    assert_eq!(t.path_to(&"C"), Some(vec!["A", "B", "C"]));
}

#[test]
fn test_equal_cost_tie_break_is_stable() {
    // Two routes of cost 2, the one relaxed first wins
    let mut g = Graph::new();
    g.add_edge("S", "L", 1_u64);
    g.add_edge("S", "R", 1);
    g.add_edge("L", "T", 1);
    g.add_edge("R", "T", 1);
    for _ in 0..10 {
        let t = g.shortest_paths(&"S");
        assert_eq!(t.distance(&"T"), Some(2));
        assert_eq!(t.predecessor(&"T"), Some(&"L"));
    }
}

#[test]
fn test_overflowing_cost_is_not_a_path() {
    let mut g = Graph::new();
    g.add_edge("A", "B", u64::MAX);
    g.add_edge("B", "C", 1);
    g.add_edge("A", "D", 1);
    g.add_edge("D", "C", u64::MAX - 1);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"B"), Some(u64::MAX));
    assert_eq!(t.distance(&"C"), Some(u64::MAX));
    assert_eq!(t.path_to(&"C"), Some(vec!["A", "D", "C"]));

    let mut g = Graph::new();
    g.add_edge("A", "B", u64::MAX);
    g.add_edge("B", "C", 1);
    let t = g.shortest_paths(&"A");
    assert_eq!(t.distance(&"B"), Some(u64::MAX));
    assert!(!t.is_reachable(&"C"));
    assert_eq!(g.path(&"A", &"C"), None);
    assert_eq!(g.shortest_paths(&"C").distance(&"A"), None);
}

#[test]
fn test_search_does_not_mutate_graph() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 2_u64);
    g.add_edge("B", "C", 2);
    let before = (g.node_count(), g.edge_count(), g.neighbors(&"B").map(<[_]>::to_vec));
    let _ = g.shortest_paths(&"A");
    let _ = g.shortest_paths(&"Z");
    let after = (g.node_count(), g.edge_count(), g.neighbors(&"B").map(<[_]>::to_vec));
    assert_eq!(before, after);
}
