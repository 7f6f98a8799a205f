#![expect(
    clippy::indexing_slicing,
    reason = "brute-force helpers index dense per-node arrays sized up front"
)]
#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the routing engines.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid graph snapshots, complementing the example-driven unit tests.
//!
//! # Invariants tested
//!
//! - **Dijkstra optimality:** the returned cost equals the brute-force
//!   minimum over all simple paths.
//! - **MST agreement:** Kruskal and Prim agree on total weight and edge
//!   count, and a connected subset is fully spanned.
//! - **Tour optimality:** branch and bound matches the brute-force
//!   permutation minimum over the shortest-path closure.
//! - **Tour shape:** every returned tour is a proper Hamiltonian cycle.

use homeward_core::{Edge, Graph};
use homeward_routing::{SpanningTree, kruskal, prim, shortest_path, solve_tour};
use proptest::prelude::*;

/// Node identifiers used by the generated graphs.
const IDS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Generate a graph over up to six nodes with integral weights.
///
/// Weights are whole numbers so float comparisons in assertions are exact.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    let edge = (0..IDS.len(), 0..IDS.len(), 0u32..20).prop_filter_map(
        "self-loops never affect optimal routes",
        |(a, b, weight)| {
            (a != b).then(|| Edge {
                from: IDS[a].to_owned(),
                to: IDS[b].to_owned(),
                weight: f64::from(weight),
            })
        },
    );
    proptest::collection::vec(edge, 1..12).prop_map(|edges| Graph::from_edges(&edges))
}

/// Walk the returned tree edges from `start` and collect the reached ids.
fn tree_reach(tree: &SpanningTree, start: &str) -> std::collections::HashSet<String> {
    let mut adjacency: std::collections::HashMap<&str, Vec<&str>> =
        std::collections::HashMap::new();
    for edge in &tree.edges {
        adjacency.entry(&edge.from).or_default().push(&edge.to);
        adjacency.entry(&edge.to).or_default().push(&edge.from);
    }
    let mut reached = std::collections::HashSet::new();
    let mut frontier = vec![start];
    while let Some(node) = frontier.pop() {
        if reached.insert(node.to_owned())
            && let Some(next) = adjacency.get(node)
        {
            frontier.extend(next);
        }
    }
    reached
}

/// Brute-force minimum simple-path cost via exhaustive DFS.
fn brute_force_cost(graph: &Graph, start: &str, goal: &str) -> f64 {
    fn walk(graph: &Graph, node: usize, goal: usize, visited: &mut Vec<bool>, cost: f64) -> f64 {
        if node == goal {
            return cost;
        }
        let mut best = f64::INFINITY;
        for &(next, weight) in graph.neighbours(node) {
            if !visited[next] {
                visited[next] = true;
                best = best.min(walk(graph, next, goal, visited, cost + weight));
                visited[next] = false;
            }
        }
        best
    }

    let (Some(start_idx), Some(goal_idx)) = (graph.index_of(start), graph.index_of(goal)) else {
        return f64::INFINITY;
    };
    let mut visited = vec![false; graph.len()];
    visited[start_idx] = true;
    walk(graph, start_idx, goal_idx, &mut visited, 0.0)
}

/// Brute-force optimal tour cost over the shortest-path closure.
///
/// Legs between requested nodes cost their pairwise shortest-path distance,
/// matching the closure the solver searches over.
fn brute_force_tour(graph: &Graph, nodes: &[String]) -> f64 {
    fn permute(
        graph: &Graph,
        nodes: &[String],
        current: usize,
        remaining: &mut Vec<usize>,
        cost: f64,
    ) -> f64 {
        if remaining.is_empty() {
            return cost + shortest_path(graph, &nodes[current], &nodes[0]).cost;
        }
        let mut best = f64::INFINITY;
        for slot in 0..remaining.len() {
            let next = remaining.remove(slot);
            let leg = shortest_path(graph, &nodes[current], &nodes[next]).cost;
            if leg.is_finite() {
                best = best.min(permute(graph, nodes, next, remaining, cost + leg));
            }
            remaining.insert(slot, next);
        }
        best
    }

    if nodes.len() < 2 {
        return 0.0;
    }
    let mut remaining: Vec<usize> = (1..nodes.len()).collect();
    permute(graph, nodes, 0, &mut remaining, 0.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: Dijkstra returns the brute-force minimum cost for every
    /// node pair, and infinite cost exactly when no path exists.
    #[test]
    fn dijkstra_matches_brute_force(graph in graph_strategy()) {
        let nodes: Vec<String> = graph.nodes().to_vec();
        for start in &nodes {
            for goal in &nodes {
                let result = shortest_path(&graph, start, goal);
                let expected = brute_force_cost(&graph, start, goal);
                prop_assert_eq!(result.cost, expected, "pair {}-{}", start, goal);
                prop_assert_eq!(result.found(), expected.is_finite());
            }
        }
    }

    /// Property: the returned path is a real walk whose weights sum to the
    /// reported cost.
    #[test]
    fn dijkstra_path_is_consistent(graph in graph_strategy()) {
        let nodes: Vec<String> = graph.nodes().to_vec();
        for start in &nodes {
            for goal in &nodes {
                let result = shortest_path(&graph, start, goal);
                if !result.found() {
                    prop_assert!(result.path.is_empty());
                    continue;
                }
                prop_assert_eq!(result.path.first(), Some(start));
                prop_assert_eq!(result.path.last(), Some(goal));
                let mut total = 0.0;
                for pair in result.path.windows(2) {
                    let [from, to] = pair else { continue };
                    let from_idx = graph.index_of(from).expect("path node interned");
                    let to_idx = graph.index_of(to).expect("path node interned");
                    let leg = graph
                        .neighbours(from_idx)
                        .iter()
                        .filter(|&&(next, _)| next == to_idx)
                        .map(|&(_, weight)| weight)
                        .fold(f64::INFINITY, f64::min);
                    prop_assert!(leg.is_finite(), "{}-{} is not an edge", from, to);
                    total += leg;
                }
                prop_assert!(total <= result.cost + 1e-9);
            }
        }
    }

    /// Property: Kruskal and Prim agree on MST weight and size, and the
    /// edges each returns connect every node of a connected subset.
    #[test]
    fn mst_algorithms_agree(graph in graph_strategy()) {
        let nodes: Vec<String> = graph.nodes().to_vec();
        let by_kruskal = kruskal(&graph, &nodes);
        let by_prim = prim(&graph, &nodes);
        prop_assert_eq!(by_kruskal.total_weight, by_prim.total_weight);
        prop_assert_eq!(by_kruskal.edges.len(), by_prim.edges.len());

        let connected = nodes
            .iter()
            .all(|goal| shortest_path(&graph, &nodes[0], goal).found());
        if connected {
            prop_assert!(by_kruskal.spans(nodes.len()));
            prop_assert!(by_prim.spans(nodes.len()));
            for tree in [&by_kruskal, &by_prim] {
                let reached = tree_reach(tree, &nodes[0]);
                prop_assert!(nodes.iter().all(|id| reached.contains(id)));
                prop_assert_eq!(reached.len(), nodes.len());
            }
        }
    }

    /// Property: branch and bound returns the brute-force optimal tour, or
    /// `None` exactly when the subset is not mutually reachable.
    #[test]
    fn tour_matches_brute_force(graph in graph_strategy()) {
        let nodes: Vec<String> = graph.nodes().iter().take(5).cloned().collect();
        let expected = brute_force_tour(&graph, &nodes);
        match solve_tour(&graph, &nodes) {
            Some(tour) => prop_assert_eq!(tour.total_distance, expected),
            None => prop_assert!(expected.is_infinite()),
        }
    }

    /// Property: every returned tour is a Hamiltonian cycle over the
    /// requested nodes.
    #[test]
    fn tour_is_a_hamiltonian_cycle(graph in graph_strategy()) {
        let nodes: Vec<String> = graph.nodes().iter().take(5).cloned().collect();
        let Some(tour) = solve_tour(&graph, &nodes) else {
            return Ok(());
        };
        if nodes.len() < 2 {
            prop_assert_eq!(tour.route.len(), nodes.len());
            return Ok(());
        }
        prop_assert_eq!(tour.route.len(), nodes.len() + 1);
        prop_assert_eq!(tour.route.first(), tour.route.last());
        let mut inner = tour.route.clone();
        inner.pop();
        inner.sort();
        let mut expected_nodes = nodes.clone();
        expected_nodes.sort();
        prop_assert_eq!(inner, expected_nodes);
    }
}
