//! Exact travelling-salesman tours via depth-first branch and bound.
//!
//! The search runs over an all-pairs shortest-path closure of the facility
//! graph, so two requested shelters connected only through intermediates
//! outside the subset still get a finite leg cost. The pruning bound is
//! admissible (never overestimates the remaining cost): cost so far, plus
//! the cheapest edge out of the current node, plus the MST weight of the
//! unvisited set, plus the cheapest edge from the unvisited set back to the
//! start.

use std::collections::VecDeque;

use homeward_core::Graph;

/// A closed route visiting each requested facility exactly once.
///
/// For two or more nodes the route starts and ends at the same facility;
/// the degenerate zero- and one-node tours have no repeated terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Facility identifiers in visiting order.
    pub route: Vec<String>,
    /// Total distance along the route.
    pub total_distance: f64,
}

/// Find the minimum-cost Hamiltonian cycle over the requested facilities.
///
/// Returns `None` when the requested subset is not mutually reachable
/// (including ids absent from the graph). Ties between optimal tours
/// resolve arbitrarily. The search is exponential in the subset size;
/// callers bound the problem by capping the subset, not here.
///
/// # Examples
/// ```
/// use homeward_core::{Edge, Graph};
/// use homeward_routing::solve_tour;
///
/// let graph = Graph::from_edges(&[
///     Edge::new("A", "B", 5.0)?,
///     Edge::new("B", "C", 3.0)?,
///     Edge::new("A", "C", 10.0)?,
/// ]);
/// let nodes: Vec<String> = graph.nodes().to_vec();
/// let tour = solve_tour(&graph, &nodes).expect("triangle is connected");
/// assert_eq!(tour.total_distance, 18.0);
/// # Ok::<(), homeward_core::EdgeError>(())
/// ```
#[must_use]
pub fn solve_tour(graph: &Graph, nodes: &[String]) -> Option<Tour> {
    let requested = dedupe(nodes);
    match requested.len() {
        0 => {
            return Some(Tour {
                route: Vec::new(),
                total_distance: 0.0,
            });
        }
        1 => {
            return Some(Tour {
                route: requested,
                total_distance: 0.0,
            });
        }
        _ => {}
    }

    let matrix = subset_closure(graph, &requested)?;
    if !is_connected(&matrix) {
        log::debug!("solve_tour: requested subset is not mutually reachable");
        return None;
    }

    let search = Search { matrix: &matrix };
    let mut best = Best {
        cost: f64::INFINITY,
        route: Vec::new(),
    };
    let mut path = vec![0];
    let mut visited = vec![false; requested.len()];
    if let Some(flag) = visited.first_mut() {
        *flag = true;
    }
    search.explore(0, &mut path, &mut visited, 0.0, &mut best);

    if best.cost.is_infinite() {
        return None;
    }
    let route = best
        .route
        .iter()
        .filter_map(|&index| requested.get(index).cloned())
        .collect();
    Some(Tour {
        route,
        total_distance: best.cost,
    })
}

fn dedupe(nodes: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    nodes
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// All-pairs shortest-path distances restricted to the requested subset.
///
/// Floyd–Warshall runs over the full graph before restriction, so
/// intermediates outside the subset contribute to the closure. `None` when
/// a requested id is not a graph node (it can never be reached).
#[expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "dense distance matrix sized to the node count; relaxation sums distances"
)]
fn subset_closure(graph: &Graph, requested: &[String]) -> Option<Vec<Vec<f64>>> {
    let n = graph.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (index, row) in dist.iter_mut().enumerate() {
        row[index] = 0.0;
    }
    for from in 0..n {
        for &(to, weight) in graph.neighbours(from) {
            if weight < dist[from][to] {
                dist[from][to] = weight;
                dist[to][from] = weight;
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            if dist[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    let indices: Vec<usize> = requested
        .iter()
        .map(|id| graph.index_of(id))
        .collect::<Option<Vec<_>>>()?;
    Some(
        indices
            .iter()
            .map(|&i| indices.iter().map(|&j| dist[i][j]).collect())
            .collect(),
    )
}

/// Breadth-first reachability over the finite entries of the closed matrix.
#[expect(
    clippy::indexing_slicing,
    reason = "the matrix is square over the subset"
)]
fn is_connected(matrix: &[Vec<f64>]) -> bool {
    let k = matrix.len();
    if k <= 1 {
        return true;
    }
    let mut visited = vec![false; k];
    let mut queue = VecDeque::from([0_usize]);
    visited[0] = true;
    while let Some(node) = queue.pop_front() {
        for next in 0..k {
            if next != node && !visited[next] && matrix[node][next].is_finite() {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    visited.into_iter().all(|seen| seen)
}

struct Search<'a> {
    matrix: &'a [Vec<f64>],
}

/// Best complete tour found so far; local to one solve call.
struct Best {
    cost: f64,
    route: Vec<usize>,
}

impl Search<'_> {
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.matrix
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour costs and pruning bounds accumulate leg distances"
    )]
    fn explore(
        &self,
        current: usize,
        path: &mut Vec<usize>,
        visited: &mut [bool],
        cost: f64,
        best: &mut Best,
    ) {
        let k = self.matrix.len();
        if path.len() == k {
            let closing = self.distance(current, 0);
            if closing.is_finite() {
                let total = cost + closing;
                if total < best.cost {
                    best.cost = total;
                    best.route = path.clone();
                    best.route.push(0);
                }
            }
            return;
        }

        if cost + self.lower_bound(current, visited) >= best.cost {
            return;
        }

        for next in 0..k {
            if visited.get(next).copied().unwrap_or(true) {
                continue;
            }
            let leg = self.distance(current, next);
            if leg.is_infinite() {
                continue;
            }
            path.push(next);
            if let Some(flag) = visited.get_mut(next) {
                *flag = true;
            }
            self.explore(next, path, visited, cost + leg, best);
            path.pop();
            if let Some(flag) = visited.get_mut(next) {
                *flag = false;
            }
        }
    }

    /// Admissible estimate of the cost still needed to close the tour.
    #[expect(
        clippy::float_arithmetic,
        reason = "the bound is a sum of minimum leg distances"
    )]
    fn lower_bound(&self, current: usize, visited: &[bool]) -> f64 {
        let unvisited: Vec<usize> = (0..self.matrix.len())
            .filter(|&index| !visited.get(index).copied().unwrap_or(true))
            .collect();
        if unvisited.is_empty() {
            return self.distance(current, 0);
        }

        let mut bound = f64::INFINITY;
        for &node in &unvisited {
            bound = bound.min(self.distance(current, node));
        }
        if bound.is_infinite() {
            return bound;
        }

        bound += self.spanning_cost(&unvisited);

        let mut closing = f64::INFINITY;
        for &node in &unvisited {
            closing = closing.min(self.distance(node, 0));
        }
        if closing.is_finite() {
            bound += closing;
        }
        bound
    }

    /// Prim MST weight of the unvisited set under matrix distances.
    #[expect(
        clippy::float_arithmetic,
        reason = "MST weight accumulates leg distances"
    )]
    fn spanning_cost(&self, nodes: &[usize]) -> f64 {
        let Some(&first) = nodes.first() else {
            return 0.0;
        };
        if nodes.len() == 1 {
            return 0.0;
        }

        let mut in_tree = std::collections::HashSet::from([first]);
        let mut total = 0.0;
        while in_tree.len() < nodes.len() {
            let mut lightest = f64::INFINITY;
            let mut chosen = None;
            for &inside in &in_tree {
                for &outside in nodes {
                    if !in_tree.contains(&outside) {
                        let leg = self.distance(inside, outside);
                        if leg < lightest {
                            lightest = leg;
                            chosen = Some(outside);
                        }
                    }
                }
            }
            match chosen {
                Some(node) if lightest.is_finite() => {
                    in_tree.insert(node);
                    total += lightest;
                }
                // Unvisited set is itself disconnected; the partial weight
                // is still a valid lower bound.
                _ => break,
            }
        }
        total
    }
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

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|&value| value.to_owned()).collect()
    }

    #[rstest]
    fn empty_request_is_an_empty_tour() {
        let tour = solve_tour(&diamond_graph(), &[]).expect("degenerate tour");
        assert!(tour.route.is_empty());
        assert_eq!(tour.total_distance, 0.0);
    }

    #[rstest]
    fn single_node_tour_has_zero_distance() {
        let tour = solve_tour(&diamond_graph(), &names(&["B"])).expect("degenerate tour");
        assert_eq!(tour.route, ["B"]);
        assert_eq!(tour.total_distance, 0.0);
    }

    #[rstest]
    fn triangle_tour_costs_eighteen() {
        let graph = homeward_core::Graph::from_edges(&[
            homeward_core::Edge::new("A", "B", 5.0).expect("valid edge"),
            homeward_core::Edge::new("B", "C", 3.0).expect("valid edge"),
            homeward_core::Edge::new("A", "C", 10.0).expect("valid edge"),
        ]);
        let tour = solve_tour(&graph, &names(&["A", "B", "C"])).expect("connected");
        assert_eq!(tour.total_distance, 18.0);
        assert_eq!(tour.route.len(), 4);
        assert_eq!(tour.route.first(), tour.route.last());
    }

    #[rstest]
    fn tour_visits_each_node_once() {
        let graph = hub_cluster_graph();
        let nodes: Vec<String> = graph.nodes().to_vec();
        let tour = solve_tour(&graph, &nodes).expect("connected");
        let mut inner = tour.route.clone();
        inner.pop();
        inner.sort();
        let mut expected = nodes;
        expected.sort();
        assert_eq!(inner, expected);
    }

    #[rstest]
    fn closure_routes_through_non_subset_intermediates() {
        // A and D share no direct edge; the leg costs close over B.
        let tour = solve_tour(&diamond_graph(), &names(&["A", "D"])).expect("connected");
        assert_eq!(tour.total_distance, 16.0);
        assert_eq!(tour.route.len(), 3);
    }

    #[rstest]
    fn disconnected_subset_is_infeasible() {
        assert!(solve_tour(&split_graph(), &names(&["A", "C"])).is_none());
    }

    #[rstest]
    fn unknown_identifier_is_infeasible() {
        assert!(solve_tour(&diamond_graph(), &names(&["A", "Z"])).is_none());
    }

    #[rstest]
    fn duplicate_requests_collapse() {
        let tour = solve_tour(&diamond_graph(), &names(&["A", "A"])).expect("degenerate tour");
        assert_eq!(tour.route, ["A"]);
    }
}
