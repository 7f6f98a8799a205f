//! Adoption matching, transport allocation, and herd ordering.
//!
//! Three solvers plus a shared scoring model:
//! - [`compatibility_score`]: weighted dog/adopter affinity.
//! - [`assign_greedy`]: rank-and-take matching for a single adopter.
//! - [`assign_all`]: exhaustive backtracking assignment across adopters.
//! - [`plan_transport`]: 0/1 knapsack selection for a bounded payload.
//! - [`sort_dogs`]: criteria-driven herd ordering.
//!
//! All solvers are pure functions of their inputs; concurrent calls with
//! independent data need no coordination. Infeasible pairings are simply
//! left out of the result, never reported as errors. The only typed errors
//! here are the [`FromStr`](std::str::FromStr) selector parsers.

#![forbid(unsafe_code)]

mod backtracking;
mod greedy;
mod knapsack;
mod score;
mod sort;

pub use backtracking::{MatchPlan, assign_all};
pub use greedy::{AdopterMatch, assign_greedy};
pub use knapsack::{TransportPlan, plan_transport};
pub use score::{MatchConfig, ScoreWeights, compatibility_score};
pub use sort::{
    SortAlgorithm, SortAlgorithmParseError, SortCriteria, SortCriteriaParseError, sort_dogs,
};
