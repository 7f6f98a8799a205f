//! Unweighted traversal: fewest-hops (BFS) and any-path (DFS) queries.

use std::collections::VecDeque;

use homeward_core::Graph;

/// Fewest-hops path between two facilities, ignoring edge weights.
///
/// Returns the node identifiers from `from` to `to` inclusive, or an empty
/// vector when either id is unknown or no path exists. `from == to` yields
/// the single node.
#[must_use]
pub fn bfs_path(graph: &Graph, from: &str, to: &str) -> Vec<String> {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        return Vec::new();
    };
    if start == goal {
        return vec![from.to_owned()];
    }

    let mut prev: Vec<Option<usize>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();
    if let Some(seen) = visited.get_mut(start) {
        *seen = true;
    }
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == goal {
            break;
        }
        for &(next, _) in graph.neighbours(node) {
            if let Some(seen) = visited.get_mut(next)
                && !*seen
            {
                *seen = true;
                if let Some(slot) = prev.get_mut(next) {
                    *slot = Some(node);
                }
                queue.push_back(next);
            }
        }
    }

    if !visited.get(goal).copied().unwrap_or(false) {
        return Vec::new();
    }
    rebuild(graph, &prev, start, goal)
}

/// Some path between two facilities found depth-first.
///
/// No minimality guarantee; useful for existence checks. Empty when either
/// id is unknown or no path exists.
#[must_use]
pub fn dfs_path(graph: &Graph, from: &str, to: &str) -> Vec<String> {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        return Vec::new();
    };

    let mut visited = vec![false; graph.len()];
    let mut path = Vec::new();
    if dfs(graph, start, goal, &mut visited, &mut path) {
        path.iter()
            .filter_map(|&index| graph.node(index).map(str::to_owned))
            .collect()
    } else {
        Vec::new()
    }
}

fn dfs(graph: &Graph, node: usize, goal: usize, visited: &mut [bool], path: &mut Vec<usize>) -> bool {
    path.push(node);
    if node == goal {
        return true;
    }
    if let Some(seen) = visited.get_mut(node) {
        *seen = true;
    }
    for &(next, _) in graph.neighbours(node) {
        if !visited.get(next).copied().unwrap_or(true) && dfs(graph, next, goal, visited, path) {
            return true;
        }
    }
    path.pop();
    false
}

fn rebuild(graph: &Graph, prev: &[Option<usize>], start: usize, goal: usize) -> Vec<String> {
    let mut indices = vec![goal];
    let mut cursor = goal;
    while cursor != start {
        match prev.get(cursor).copied().flatten() {
            Some(parent) => {
                indices.push(parent);
                cursor = parent;
            }
            None => return Vec::new(),
        }
    }
    indices.reverse();
    indices
        .into_iter()
        .filter_map(|index| graph.node(index).map(str::to_owned))
        .collect()
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]
mod tests {
    use super::*;
    use homeward_core::test_support::{diamond_graph, hub_cluster_graph, split_graph};
    use rstest::rstest;

    #[rstest]
    fn bfs_finds_fewest_hops() {
        // A-D has a 2-hop route both ways round the diamond; either is fine,
        // but the hop count must be minimal.
        let path = bfs_path(&diamond_graph(), "A", "D");
        assert_eq!(path.len(), 3);
        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last().map(String::as_str), Some("D"));
    }

    #[rstest]
    fn bfs_prefers_direct_hop() {
        let path = bfs_path(&hub_cluster_graph(), "H", "C");
        assert_eq!(path, ["H", "C"]);
    }

    #[rstest]
    fn bfs_same_node_is_trivial() {
        assert_eq!(bfs_path(&diamond_graph(), "A", "A"), ["A"]);
    }

    #[rstest]
    #[case("A", "C")]
    #[case("D", "B")]
    fn bfs_disconnected_is_empty(#[case] from: &str, #[case] to: &str) {
        assert!(bfs_path(&split_graph(), from, to).is_empty());
    }

    #[rstest]
    fn dfs_returns_a_valid_walk() {
        let graph = diamond_graph();
        let path = dfs_path(&graph, "A", "D");
        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last().map(String::as_str), Some("D"));
        for pair in path.windows(2) {
            let [from, to] = pair else { continue };
            let from_idx = graph.index_of(from).expect("node interned");
            let to_idx = graph.index_of(to).expect("node interned");
            assert!(
                graph.neighbours(from_idx).iter().any(|&(next, _)| next == to_idx),
                "{from}-{to} is not an edge"
            );
        }
    }

    #[rstest]
    fn dfs_unknown_node_is_empty() {
        assert!(dfs_path(&diamond_graph(), "A", "Z").is_empty());
    }
}
