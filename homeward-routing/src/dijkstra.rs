//! Single-source single-target shortest paths (Dijkstra).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use homeward_core::Graph;

/// Outcome of a shortest-path query.
///
/// An unreachable goal (or an identifier absent from the graph) is reported
/// as infinite cost with an empty path, not as an error.
///
/// # Examples
/// ```
/// use homeward_routing::PathResult;
///
/// let missing = PathResult::unreachable();
/// assert!(!missing.found());
/// assert!(missing.path.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Total weight of the cheapest path, or `f64::INFINITY`.
    pub cost: f64,
    /// Node identifiers from start to goal inclusive; empty when unreachable.
    pub path: Vec<String>,
}

impl PathResult {
    /// Sentinel for "no path exists".
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether a path was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Heap entry ordered so the `BinaryHeap` max-heap pops the smallest
/// tentative distance first.
#[derive(Debug, Copy, Clone, PartialEq)]
struct QueueEntry {
    dist: f64,
    node: usize,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path between two facilities.
///
/// Classic binary-heap Dijkstra with relaxation at pop time and an early
/// exit once the goal is settled. Ties between equal-cost paths resolve
/// arbitrarily; only the cost is guaranteed minimal.
///
/// Membership is checked before the degenerate case, so an identifier
/// absent from the graph is always unreachable even when `start == goal`.
///
/// # Examples
/// ```
/// use homeward_core::{Edge, Graph};
/// use homeward_routing::shortest_path;
///
/// let graph = Graph::from_edges(&[
///     Edge::new("A", "B", 5.0)?,
///     Edge::new("B", "D", 3.0)?,
/// ]);
/// let result = shortest_path(&graph, "A", "D");
/// assert_eq!(result.cost, 8.0);
/// assert_eq!(result.path, ["A", "B", "D"]);
/// # Ok::<(), homeward_core::EdgeError>(())
/// ```
#[must_use]
#[expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "dense per-node arrays are sized to the node count; edge relaxation sums weights"
)]
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> PathResult {
    let (Some(start_idx), Some(goal_idx)) = (graph.index_of(start), graph.index_of(goal)) else {
        return PathResult::unreachable();
    };
    if start_idx == goal_idx {
        return PathResult {
            cost: 0.0,
            path: vec![start.to_owned()],
        };
    }

    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[start_idx] = 0.0;
    heap.push(QueueEntry {
        dist: 0.0,
        node: start_idx,
    });

    while let Some(QueueEntry { dist: d, node }) = heap.pop() {
        if d > dist[node] {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }
        if node == goal_idx {
            break;
        }
        for &(next, weight) in graph.neighbours(node) {
            let candidate = d + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(node);
                heap.push(QueueEntry {
                    dist: candidate,
                    node: next,
                });
            }
        }
    }

    if dist[goal_idx].is_infinite() {
        log::debug!("shortest_path: {goal} unreachable from {start}");
        return PathResult::unreachable();
    }

    let mut path = Vec::new();
    let mut cursor = Some(goal_idx);
    while let Some(index) = cursor {
        if let Some(id) = graph.node(index) {
            path.push(id.to_owned());
        }
        cursor = prev[index];
    }
    path.reverse();

    PathResult {
        cost: dist[goal_idx],
        path,
    }
}
