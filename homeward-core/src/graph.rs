//! Undirected weighted graph over facility identifiers.
//!
//! The adjacency is built once per request from a flat edge list. Every edge
//! contributes two directed arcs of equal weight, so traversal code never
//! needs to special-case direction.

use std::collections::HashMap;

use thiserror::Error;

/// A weighted, logically undirected link between two facilities.
///
/// # Examples
/// ```
/// use homeward_core::Edge;
///
/// let edge = Edge::new("A", "B", 5.0)?;
/// assert_eq!(edge.from, "A");
/// assert_eq!(edge.weight, 5.0);
/// # Ok::<(), homeward_core::EdgeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// One endpoint of the link.
    pub from: String,
    /// The other endpoint of the link.
    pub to: String,
    /// Non-negative traversal cost, e.g. distance in kilometres.
    pub weight: f64,
}

/// Errors returned by [`Edge::new`].
#[derive(Debug, Error, PartialEq)]
pub enum EdgeError {
    /// The weight was negative or not a number.
    #[error("edge weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),
}

impl Edge {
    /// Validate and construct an [`Edge`].
    ///
    /// The routing algorithms assume non-negative weights (Dijkstra's
    /// correctness depends on it), so negative and NaN weights are rejected
    /// here, at the boundary.
    ///
    /// # Errors
    /// Returns [`EdgeError::InvalidWeight`] when `weight` is negative or NaN.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        weight: f64,
    ) -> Result<Self, EdgeError> {
        if weight.is_nan() || weight < 0.0 {
            return Err(EdgeError::InvalidWeight(weight));
        }
        Ok(Self {
            from: from.into(),
            to: to.into(),
            weight,
        })
    }
}

/// Index-based adjacency over a set of facility identifiers.
///
/// Node identifiers are interned into dense indices at construction so the
/// engines can work with `usize` handles and `Vec` storage instead of
/// string-keyed maps on every hop.
///
/// # Examples
/// ```
/// use homeward_core::{Edge, Graph};
///
/// let edges = vec![Edge::new("A", "B", 5.0)?, Edge::new("B", "C", 3.0)?];
/// let graph = Graph::from_edges(&edges);
/// assert_eq!(graph.len(), 3);
/// assert!(graph.contains("C"));
/// # Ok::<(), homeward_core::EdgeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Build a graph over an explicit node set.
    ///
    /// Edges whose endpoints are not both in `nodes` are ignored, mirroring
    /// how the engines restrict themselves to a requested facility subset.
    /// Duplicate node identifiers collapse to the first occurrence.
    pub fn new<I, S>(nodes: I, edges: &[Edge]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::default();
        for node in nodes {
            graph.intern(node.into());
        }
        for edge in edges {
            let (Some(a), Some(b)) = (graph.index_of(&edge.from), graph.index_of(&edge.to)) else {
                continue;
            };
            graph.connect(a, b, edge.weight);
        }
        graph
    }

    /// Build a graph whose node set is collected from the edge list itself.
    ///
    /// Nodes appear in first-seen order, which keeps traversal output
    /// deterministic for a fixed edge ordering.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            let a = graph.intern(edge.from.clone());
            let b = graph.intern(edge.to.clone());
            graph.connect(a, b, edge.weight);
        }
        graph
    }

    fn intern(&mut self, id: String) -> usize {
        if let Some(&existing) = self.index.get(&id) {
            return existing;
        }
        let next = self.nodes.len();
        self.index.insert(id.clone(), next);
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        next
    }

    fn connect(&mut self, a: usize, b: usize, weight: f64) {
        if let Some(list) = self.adjacency.get_mut(a) {
            list.push((b, weight));
        }
        if a != b
            && let Some(list) = self.adjacency.get_mut(b)
        {
            list.push((a, weight));
        }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node identifiers in interning order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Whether `id` names a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Dense index of a node identifier, if present.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Identifier of the node at `index`, if in range.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(String::as_str)
    }

    /// Neighbours of the node at `index` as `(index, weight)` pairs.
    ///
    /// Out-of-range indices yield an empty slice rather than panicking.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> &[(usize, f64)] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn edge(from: &str, to: &str, weight: f64) -> Edge {
        Edge::new(from, to, weight).expect("valid edge")
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn edge_rejects_invalid_weight(#[case] weight: f64) {
        assert!(Edge::new("A", "B", weight).is_err());
    }

    #[rstest]
    fn edge_accepts_zero_weight() {
        assert!(Edge::new("A", "B", 0.0).is_ok());
    }

    #[rstest]
    fn from_edges_interns_in_first_seen_order() {
        let graph = Graph::from_edges(&[edge("B", "A", 1.0), edge("A", "C", 2.0)]);
        assert_eq!(graph.nodes(), ["B", "A", "C"]);
    }

    #[rstest]
    fn edges_are_bidirectional() {
        let graph = Graph::from_edges(&[edge("A", "B", 5.0)]);
        let a = graph.index_of("A").expect("A interned");
        let b = graph.index_of("B").expect("B interned");
        assert_eq!(graph.neighbours(a), [(b, 5.0)]);
        assert_eq!(graph.neighbours(b), [(a, 5.0)]);
    }

    #[rstest]
    fn explicit_node_set_filters_foreign_edges() {
        let edges = [edge("A", "B", 1.0), edge("B", "X", 2.0)];
        let graph = Graph::new(["A", "B"], &edges);
        assert_eq!(graph.len(), 2);
        let b = graph.index_of("B").expect("B interned");
        assert_eq!(graph.neighbours(b).len(), 1);
    }

    #[rstest]
    fn self_loop_adds_single_arc() {
        let graph = Graph::from_edges(&[edge("A", "A", 1.0)]);
        let a = graph.index_of("A").expect("A interned");
        assert_eq!(graph.neighbours(a).len(), 1);
    }

    #[rstest]
    fn out_of_range_neighbours_are_empty() {
        let graph = Graph::default();
        assert!(graph.neighbours(7).is_empty());
        assert!(graph.node(7).is_none());
    }
}
