//! Test-only fixtures shared by the engine crates' unit and behaviour tests.
//!
//! The network and herd mirror the seed data the production service loads
//! into its graph store, trimmed to the sizes exhaustive solvers can chew
//! through in a test run.

use crate::{Adopter, Dog, Edge, Energy, Graph, Size};

fn edge(from: &str, to: &str, weight: f64) -> Edge {
    Edge::new(from, to, weight).unwrap_or(Edge {
        from: from.to_owned(),
        to: to.to_owned(),
        weight: 0.0,
    })
}

/// Edge list of the diamond network A-B=5, A-C=10, B-D=3, C-D=2.
///
/// Small enough to verify optimal costs by hand: the A-to-D shortest path
/// costs 8 via B, and the MST weighs 10.
#[must_use]
pub fn diamond_edges() -> Vec<Edge> {
    vec![
        edge("A", "B", 5.0),
        edge("A", "C", 10.0),
        edge("B", "D", 3.0),
        edge("C", "D", 2.0),
    ]
}

/// Graph over [`diamond_edges`].
#[must_use]
pub fn diamond_graph() -> Graph {
    Graph::from_edges(&diamond_edges())
}

/// The central shelter cluster of the seeded network: hub `H` plus `A`-`C`.
///
/// Includes the parallel `C`/`H` link from the seed data, so code that
/// assumes simple graphs gets exercised against multi-edges.
#[must_use]
pub fn hub_cluster_graph() -> Graph {
    Graph::from_edges(&[
        edge("H", "A", 5.0),
        edge("H", "B", 7.0),
        edge("H", "C", 9.0),
        edge("A", "B", 6.0),
        edge("B", "C", 8.0),
        edge("A", "C", 10.0),
        edge("C", "H", 14.0),
    ])
}

/// Two disjoint components, for unreachability cases.
#[must_use]
pub fn split_graph() -> Graph {
    Graph::from_edges(&[edge("A", "B", 1.0), edge("C", "D", 1.0)])
}

/// A small herd with varied sizes, energies, and constraint flags.
#[must_use]
pub fn sample_dogs() -> Vec<Dog> {
    vec![
        Dog::new("D1", "Luna", Size::Small, Energy::Low)
            .with_weight_kg(8)
            .with_age(2)
            .with_priority(4)
            .good_with_kids(),
        Dog::new("D2", "Toto", Size::Medium, Energy::High)
            .with_weight_kg(18)
            .with_age(3)
            .with_priority(6)
            .good_with_kids(),
        Dog::new("D3", "Rex", Size::Large, Energy::Medium)
            .with_weight_kg(25)
            .with_age(5)
            .with_priority(8)
            .special_needs(),
        Dog::new("D4", "Miranda", Size::Small, Energy::High)
            .with_weight_kg(10)
            .with_age(1)
            .with_priority(5)
            .good_with_kids(),
        Dog::new("D5", "Perchita", Size::Medium, Energy::Medium)
            .with_weight_kg(15)
            .with_age(4)
            .with_priority(3)
            .good_with_kids(),
        Dog::new("D6", "Lina", Size::Large, Energy::Low)
            .with_weight_kg(30)
            .with_age(6)
            .with_priority(7)
            .special_needs(),
    ]
}

/// Adopter profiles covering the constraint corners.
#[must_use]
pub fn sample_adopters() -> Vec<Adopter> {
    vec![
        Adopter::new("P1", "Ana").with_budget(20_000).with_max_dogs(2).with_kids(),
        Adopter::new("P2", "Bruno")
            .with_budget(35_000)
            .with_max_dogs(2)
            .with_garden()
            .with_preferred_energy(7),
        Adopter::new("P3", "Carla").with_budget(7_500).with_preferred_energy(3),
    ]
}
