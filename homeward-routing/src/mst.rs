//! Minimum spanning trees over a facility subset (Kruskal and Prim).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use homeward_core::{Edge, Graph};
use thiserror::Error;

/// A spanning structure over a node subset.
///
/// For a connected subset this holds `nodes - 1` edges forming a tree of
/// minimum total weight. Disconnected subsets silently yield a partial
/// forest covering the component reached; callers detect that case with
/// [`SpanningTree::spans`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanningTree {
    /// Edges of the tree (or partial forest).
    pub edges: Vec<Edge>,
    /// Sum of the edge weights.
    pub total_weight: f64,
}

impl SpanningTree {
    /// Whether the structure spans a subset of `node_count` nodes.
    #[must_use]
    pub fn spans(&self, node_count: usize) -> bool {
        node_count <= 1 || self.edges.len() == node_count - 1
    }
}

/// Selector for the spanning-tree construction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    /// Sorted-edge union-find construction.
    Kruskal,
    /// Frontier-expansion construction from an arbitrary start.
    Prim,
}

impl MstAlgorithm {
    /// Return the selector as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// Run the selected algorithm.
    #[must_use]
    pub fn run(self, graph: &Graph, nodes: &[String]) -> SpanningTree {
        match self {
            Self::Kruskal => kruskal(graph, nodes),
            Self::Prim => prim(graph, nodes),
        }
    }
}

impl std::fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`MstAlgorithm`] selector fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown spanning-tree algorithm '{0}', expected 'kruskal' or 'prim'")]
pub struct MstAlgorithmParseError(String);

impl std::str::FromStr for MstAlgorithm {
    type Err = MstAlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(MstAlgorithmParseError(s.to_owned())),
        }
    }
}

/// Candidate edge inside the requested subset, by dense node index.
#[derive(Debug, Copy, Clone)]
struct Candidate {
    a: usize,
    b: usize,
    weight: f64,
}

/// Collect each undirected edge of the induced subgraph exactly once.
///
/// The adjacency stores two arcs per edge, so keeping only `a < b` pairs
/// deduplicates them while preserving parallel edges and dropping
/// self-loops, which never belong in a tree.
fn induced_edges(graph: &Graph, members: &HashSet<usize>) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for &a in members {
        for &(b, weight) in graph.neighbours(a) {
            if a < b && members.contains(&b) {
                candidates.push(Candidate { a, b, weight });
            }
        }
    }
    candidates
}

fn subset_indices(graph: &Graph, nodes: &[String]) -> (Vec<usize>, HashSet<usize>) {
    let mut ordered = Vec::new();
    let mut members = HashSet::new();
    for id in nodes {
        if let Some(index) = graph.index_of(id)
            && members.insert(index)
        {
            ordered.push(index);
        }
    }
    (ordered, members)
}

fn to_edge(graph: &Graph, candidate: Candidate) -> Option<Edge> {
    let from = graph.node(candidate.a)?.to_owned();
    let to = graph.node(candidate.b)?.to_owned();
    Some(Edge {
        from,
        to,
        weight: candidate.weight,
    })
}

/// Kruskal's algorithm over the subgraph induced by `nodes`.
///
/// Sorts the candidate edges ascending by weight and adds each edge whose
/// endpoints are still in different union-find components, stopping once the
/// tree is complete.
///
/// # Examples
/// ```
/// use homeward_core::{Edge, Graph};
/// use homeward_routing::kruskal;
///
/// let graph = Graph::from_edges(&[
///     Edge::new("A", "B", 5.0)?,
///     Edge::new("A", "C", 10.0)?,
///     Edge::new("B", "D", 3.0)?,
///     Edge::new("C", "D", 2.0)?,
/// ]);
/// let nodes: Vec<String> = graph.nodes().to_vec();
/// let tree = kruskal(&graph, &nodes);
/// assert_eq!(tree.total_weight, 10.0);
/// assert_eq!(tree.edges.len(), 3);
/// # Ok::<(), homeward_core::EdgeError>(())
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "tree weight accumulates edge weights"
)]
pub fn kruskal(graph: &Graph, nodes: &[String]) -> SpanningTree {
    let (ordered, members) = subset_indices(graph, nodes);
    if ordered.len() <= 1 {
        return SpanningTree::default();
    }

    let mut candidates = induced_edges(graph, &members);
    candidates.sort_by(|lhs, rhs| lhs.weight.total_cmp(&rhs.weight));

    let mut forest = UnionFind::new(graph.len());
    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    for candidate in candidates {
        if edges.len() == ordered.len() - 1 {
            break;
        }
        if forest.union(candidate.a, candidate.b)
            && let Some(edge) = to_edge(graph, candidate)
        {
            total_weight += candidate.weight;
            edges.push(edge);
        }
    }

    SpanningTree {
        edges,
        total_weight,
    }
}

/// Prim's algorithm over the subgraph induced by `nodes`.
///
/// Grows the tree from the first requested node, repeatedly popping the
/// lightest frontier edge whose far endpoint is still outside the tree.
/// Agrees with [`kruskal`] on total weight for any connected subset; the
/// edge sets may differ when weights tie.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "tree weight accumulates edge weights"
)]
pub fn prim(graph: &Graph, nodes: &[String]) -> SpanningTree {
    let (ordered, members) = subset_indices(graph, nodes);
    if ordered.len() <= 1 {
        return SpanningTree::default();
    }
    let Some(&start) = ordered.first() else {
        return SpanningTree::default();
    };

    let mut in_tree = HashSet::from([start]);
    let mut frontier = BinaryHeap::new();
    push_frontier(graph, &members, &in_tree, start, &mut frontier);

    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    while let Some(FrontierEdge(candidate)) = frontier.pop() {
        if in_tree.len() == ordered.len() {
            break;
        }
        if in_tree.contains(&candidate.b) {
            continue;
        }
        in_tree.insert(candidate.b);
        total_weight += candidate.weight;
        if let Some(edge) = to_edge(graph, candidate) {
            edges.push(edge);
        }
        push_frontier(graph, &members, &in_tree, candidate.b, &mut frontier);
    }

    SpanningTree {
        edges,
        total_weight,
    }
}

fn push_frontier(
    graph: &Graph,
    members: &HashSet<usize>,
    in_tree: &HashSet<usize>,
    from: usize,
    frontier: &mut BinaryHeap<FrontierEdge>,
) {
    for &(to, weight) in graph.neighbours(from) {
        if members.contains(&to) && !in_tree.contains(&to) {
            frontier.push(FrontierEdge(Candidate {
                a: from,
                b: to,
                weight,
            }));
        }
    }
}

/// Min-heap wrapper ordering frontier edges by ascending weight.
#[derive(Debug, Copy, Clone)]
struct FrontierEdge(Candidate);

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .weight
            .total_cmp(&self.0.weight)
            .then_with(|| other.0.b.cmp(&self.0.b))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Union-find with union by rank and path halving.
#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while let Some(&p) = self.parent.get(x) {
            if p == x {
                break;
            }
            let grandparent = self.parent.get(p).copied().unwrap_or(p);
            if let Some(slot) = self.parent.get_mut(x) {
                *slot = grandparent;
            }
            x = grandparent;
        }
        x
    }

    /// Merge the sets of `a` and `b`; false when already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let rank_a = self.rank.get(ra).copied().unwrap_or(0);
        let rank_b = self.rank.get(rb).copied().unwrap_or(0);
        let (child, parent) = if rank_a < rank_b { (ra, rb) } else { (rb, ra) };
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if rank_a == rank_b
            && let Some(rank) = self.rank.get_mut(parent)
        {
            *rank += 1;
        }
        true
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
    use std::str::FromStr;

    fn all_nodes(graph: &Graph) -> Vec<String> {
        graph.nodes().to_vec()
    }

    #[rstest]
    #[case(MstAlgorithm::Kruskal)]
    #[case(MstAlgorithm::Prim)]
    fn diamond_tree_weighs_ten(#[case] algorithm: MstAlgorithm) {
        let graph = diamond_graph();
        let tree = algorithm.run(&graph, &all_nodes(&graph));
        assert_eq!(tree.total_weight, 10.0);
        assert_eq!(tree.edges.len(), 3);
        assert!(tree.spans(4));
    }

    #[rstest]
    fn kruskal_and_prim_agree_on_weight() {
        let graph = hub_cluster_graph();
        let nodes = all_nodes(&graph);
        let by_kruskal = kruskal(&graph, &nodes);
        let by_prim = prim(&graph, &nodes);
        assert_eq!(by_kruskal.total_weight, by_prim.total_weight);
        assert_eq!(by_kruskal.edges.len(), by_prim.edges.len());
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec!["A".to_owned()])]
    fn degenerate_subsets_yield_empty_tree(#[case] nodes: Vec<String>) {
        let tree = kruskal(&diamond_graph(), &nodes);
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight, 0.0);
    }

    #[rstest]
    #[case(MstAlgorithm::Kruskal)]
    #[case(MstAlgorithm::Prim)]
    fn disconnected_subset_yields_partial_forest(#[case] algorithm: MstAlgorithm) {
        let graph = split_graph();
        let tree = algorithm.run(&graph, &all_nodes(&graph));
        assert!(!tree.spans(4));
        assert!(tree.edges.len() < 3);
    }

    #[rstest]
    fn subset_excludes_outside_edges() {
        let graph = diamond_graph();
        let nodes = vec!["A".to_owned(), "B".to_owned(), "D".to_owned()];
        let tree = kruskal(&graph, &nodes);
        assert_eq!(tree.edges.len(), 2);
        assert_eq!(tree.total_weight, 8.0);
        assert!(
            tree.edges
                .iter()
                .all(|edge| edge.from != "C" && edge.to != "C")
        );
    }

    #[rstest]
    fn selector_parses_known_names() {
        assert_eq!(MstAlgorithm::from_str("Kruskal"), Ok(MstAlgorithm::Kruskal));
        assert_eq!(MstAlgorithm::from_str("prim"), Ok(MstAlgorithm::Prim));
    }

    #[rstest]
    fn selector_rejects_unknown_names() {
        let err = MstAlgorithm::from_str("boruvka").expect_err("unknown selector");
        assert!(err.to_string().contains("boruvka"));
    }

    #[rstest]
    fn unknown_subset_ids_are_ignored() {
        let graph = diamond_graph();
        let nodes = vec!["A".to_owned(), "B".to_owned(), "Z".to_owned()];
        let tree = prim(&graph, &nodes);
        assert_eq!(tree.edges.len(), 1);
        assert_eq!(tree.total_weight, 5.0);
    }

    #[rstest]
    #[case(MstAlgorithm::Kruskal)]
    #[case(MstAlgorithm::Prim)]
    fn duplicate_subset_ids_collapse_to_one_node(#[case] algorithm: MstAlgorithm) {
        let graph = diamond_graph();
        let nodes = vec![
            "A".to_owned(),
            "B".to_owned(),
            "B".to_owned(),
            "D".to_owned(),
        ];
        let tree = algorithm.run(&graph, &nodes);
        assert_eq!(tree.edges.len(), 2);
        assert_eq!(tree.total_weight, 8.0);
        assert!(tree.spans(3));
    }
}
