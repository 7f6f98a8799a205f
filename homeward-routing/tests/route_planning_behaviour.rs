//! Behaviour-driven tests for route planning.

#![expect(
    clippy::expect_used,
    reason = "behaviour steps use expect for readable failures"
)]

use std::cell::RefCell;

use homeward_core::Graph;
use homeward_core::test_support::{diamond_graph, split_graph};
use homeward_routing::{MstAlgorithm, PathResult, SpanningTree, Tour, shortest_path, solve_tour};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn graph() -> RefCell<Graph> {
    RefCell::new(Graph::default())
}

#[fixture]
fn path() -> RefCell<PathResult> {
    RefCell::new(PathResult::unreachable())
}

#[fixture]
fn tree() -> RefCell<SpanningTree> {
    RefCell::new(SpanningTree::default())
}

#[fixture]
fn tour() -> RefCell<Option<Tour>> {
    RefCell::new(None)
}

#[given("the diamond shelter network")]
fn given_diamond(#[from(graph)] graph: &RefCell<Graph>) {
    *graph.borrow_mut() = diamond_graph();
}

#[given("a network split into two camps")]
fn given_split(#[from(graph)] graph: &RefCell<Graph>) {
    *graph.borrow_mut() = split_graph();
}

#[when("I plan the cheapest route from A to D")]
fn when_route_a_d(#[from(graph)] graph: &RefCell<Graph>, #[from(path)] path: &RefCell<PathResult>) {
    *path.borrow_mut() = shortest_path(&graph.borrow(), "A", "D");
}

#[when("I plan the cheapest route from A to C")]
fn when_route_a_c(#[from(graph)] graph: &RefCell<Graph>, #[from(path)] path: &RefCell<PathResult>) {
    *path.borrow_mut() = shortest_path(&graph.borrow(), "A", "C");
}

#[when("I build the minimum spanning network with kruskal")]
fn when_spanning(#[from(graph)] graph: &RefCell<Graph>, #[from(tree)] tree: &RefCell<SpanningTree>) {
    let graph = graph.borrow();
    let nodes: Vec<String> = graph.nodes().to_vec();
    *tree.borrow_mut() = MstAlgorithm::Kruskal.run(&graph, &nodes);
}

#[when("I plan a round trip over every shelter")]
fn when_round_trip(#[from(graph)] graph: &RefCell<Graph>, #[from(tour)] tour: &RefCell<Option<Tour>>) {
    let graph = graph.borrow();
    let nodes: Vec<String> = graph.nodes().to_vec();
    *tour.borrow_mut() = solve_tour(&graph, &nodes);
}

#[then("the route costs 8")]
fn then_route_cost(#[from(path)] path: &RefCell<PathResult>) {
    assert_eq!(path.borrow().cost, 8.0);
}

#[then("the route passes through B")]
fn then_route_via_b(#[from(path)] path: &RefCell<PathResult>) {
    assert!(path.borrow().path.iter().any(|id| id == "B"));
}

#[then("no route is found")]
fn then_no_route(#[from(path)] path: &RefCell<PathResult>) {
    let path = path.borrow();
    assert!(!path.found());
    assert!(path.path.is_empty());
}

#[then("the spanning network weighs 10")]
fn then_tree_weight(#[from(tree)] tree: &RefCell<SpanningTree>) {
    assert_eq!(tree.borrow().total_weight, 10.0);
}

#[then("the round trip returns to its starting shelter")]
fn then_round_trip_closed(#[from(tour)] tour: &RefCell<Option<Tour>>) {
    let tour = tour.borrow();
    let tour = tour.as_ref().expect("diamond network is connected");
    assert_eq!(tour.route.first(), tour.route.last());
    assert_eq!(tour.route.len(), 5);
}

#[scenario(path = "tests/features/route_planning.feature", index = 0)]
fn cheapest_transfer_route(
    graph: RefCell<Graph>,
    path: RefCell<PathResult>,
    tree: RefCell<SpanningTree>,
    tour: RefCell<Option<Tour>>,
) {
    let _ = (graph, path, tree, tour);
}

#[scenario(path = "tests/features/route_planning.feature", index = 1)]
fn unreachable_transfer(
    graph: RefCell<Graph>,
    path: RefCell<PathResult>,
    tree: RefCell<SpanningTree>,
    tour: RefCell<Option<Tour>>,
) {
    let _ = (graph, path, tree, tour);
}

#[scenario(path = "tests/features/route_planning.feature", index = 2)]
fn minimum_spanning_network(
    graph: RefCell<Graph>,
    path: RefCell<PathResult>,
    tree: RefCell<SpanningTree>,
    tour: RefCell<Option<Tour>>,
) {
    let _ = (graph, path, tree, tour);
}

#[scenario(path = "tests/features/route_planning.feature", index = 3)]
fn supply_round_trip(
    graph: RefCell<Graph>,
    path: RefCell<PathResult>,
    tree: RefCell<SpanningTree>,
    tour: RefCell<Option<Tour>>,
) {
    let _ = (graph, path, tree, tour);
}
