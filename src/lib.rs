//! Facade crate for the Homeward shelter-network engine.
//!
//! This crate re-exports the core domain types and exposes the routing and
//! matching engines behind feature flags.

#![forbid(unsafe_code)]

pub use homeward_core::{
    Adopter, CostModel, Dog, Edge, EdgeError, Energy, EnergyParseError, Graph, Shelter, Size,
    SizeParseError,
};

#[cfg(feature = "routing")]
pub use homeward_routing::{
    MstAlgorithm, MstAlgorithmParseError, PathResult, SpanningTree, Tour, bfs_path, dfs_path,
    kruskal, prim, shortest_path, solve_tour,
};

#[cfg(feature = "matching")]
pub use homeward_matching::{
    AdopterMatch, MatchConfig, MatchPlan, ScoreWeights, SortAlgorithm, SortAlgorithmParseError,
    SortCriteria, SortCriteriaParseError, TransportPlan, assign_all, assign_greedy,
    compatibility_score, plan_transport, sort_dogs,
};
