//! Routing engines over the Homeward facility graph.
//!
//! Four pure, synchronous engines:
//! - [`shortest_path`]: single-pair Dijkstra.
//! - [`bfs_path`] / [`dfs_path`]: unweighted traversal.
//! - [`kruskal`] / [`prim`]: minimum-spanning-tree construction over a node
//!   subset.
//! - [`solve_tour`]: exact travelling-salesman search with branch-and-bound
//!   pruning over a shortest-path distance closure.
//!
//! Every engine is a pure function of its inputs; concurrent calls with
//! independent data need no coordination. Infeasible queries come back as
//! sentinel values (infinite cost, empty path, `None`), never as errors.

#![forbid(unsafe_code)]

mod dijkstra;
mod mst;
mod traversal;
mod tsp;

pub use dijkstra::{PathResult, shortest_path};
pub use mst::{MstAlgorithm, MstAlgorithmParseError, SpanningTree, kruskal, prim};
pub use traversal::{bfs_path, dfs_path};
pub use tsp::{Tour, solve_tour};
