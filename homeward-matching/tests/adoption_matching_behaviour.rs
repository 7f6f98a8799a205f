//! Behaviour-driven tests for adoption matching.

#![expect(
    clippy::expect_used,
    reason = "behaviour steps use expect for readable failures"
)]

use std::cell::RefCell;

use homeward_core::Dog;
use homeward_core::test_support::{sample_adopters, sample_dogs};
use homeward_matching::{
    AdopterMatch, MatchConfig, MatchPlan, TransportPlan, assign_all, assign_greedy, plan_transport,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn herd() -> RefCell<Vec<Dog>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn matched() -> RefCell<AdopterMatch> {
    RefCell::new(AdopterMatch::default())
}

#[fixture]
fn plan() -> RefCell<MatchPlan> {
    RefCell::new(MatchPlan::default())
}

#[fixture]
fn transport() -> RefCell<TransportPlan> {
    RefCell::new(TransportPlan::default())
}

#[given("the sample herd")]
fn given_herd(#[from(herd)] herd: &RefCell<Vec<Dog>>) {
    *herd.borrow_mut() = sample_dogs();
}

#[when("Ana is matched greedily")]
fn when_greedy(#[from(herd)] herd: &RefCell<Vec<Dog>>, #[from(matched)] matched: &RefCell<AdopterMatch>) {
    let ana = sample_adopters()
        .into_iter()
        .find(|adopter| adopter.id == "P1")
        .expect("Ana is part of the sample pool");
    *matched.borrow_mut() = assign_greedy(&herd.borrow(), &ana, &MatchConfig::default());
}

#[when("the whole adopter pool is matched")]
fn when_assign_all(#[from(herd)] herd: &RefCell<Vec<Dog>>, #[from(plan)] plan: &RefCell<MatchPlan>) {
    *plan.borrow_mut() = assign_all(&herd.borrow(), &sample_adopters(), &MatchConfig::default());
}

#[when("a 40 kilogram transport is planned")]
fn when_transport(
    #[from(herd)] herd: &RefCell<Vec<Dog>>,
    #[from(transport)] transport: &RefCell<TransportPlan>,
) {
    *transport.borrow_mut() = plan_transport(&herd.borrow(), 40);
}

#[then("every matched dog is good with kids")]
fn then_kid_safe(#[from(herd)] herd: &RefCell<Vec<Dog>>, #[from(matched)] matched: &RefCell<AdopterMatch>) {
    let herd = herd.borrow();
    for id in &matched.borrow().dogs {
        let dog = herd
            .iter()
            .find(|dog| &dog.id == id)
            .expect("matched dog comes from the herd");
        assert!(dog.good_with_kids);
    }
}

#[then("the match stays within her budget")]
fn then_within_budget(#[from(matched)] matched: &RefCell<AdopterMatch>) {
    assert!(matched.borrow().total_cost <= 20_000);
}

#[then("no dog is assigned to two adopters")]
fn then_exclusive(#[from(plan)] plan: &RefCell<MatchPlan>) {
    let plan = plan.borrow();
    let mut seen = std::collections::HashSet::new();
    for entry in &plan.matches {
        for id in &entry.dogs {
            assert!(seen.insert(id.clone()), "dog {id} assigned twice");
        }
    }
}

#[then("the payload stays within capacity")]
fn then_within_capacity(#[from(transport)] transport: &RefCell<TransportPlan>) {
    assert!(transport.borrow().total_weight <= 40);
}

#[then("the van is not empty")]
fn then_van_loaded(#[from(transport)] transport: &RefCell<TransportPlan>) {
    assert!(!transport.borrow().selected.is_empty());
}

#[scenario(path = "tests/features/adoption_matching.feature", index = 0)]
fn family_with_kids(
    herd: RefCell<Vec<Dog>>,
    matched: RefCell<AdopterMatch>,
    plan: RefCell<MatchPlan>,
    transport: RefCell<TransportPlan>,
) {
    let _ = (herd, matched, plan, transport);
}

#[scenario(path = "tests/features/adoption_matching.feature", index = 1)]
fn exclusive_assignment(
    herd: RefCell<Vec<Dog>>,
    matched: RefCell<AdopterMatch>,
    plan: RefCell<MatchPlan>,
    transport: RefCell<TransportPlan>,
) {
    let _ = (herd, matched, plan, transport);
}

#[scenario(path = "tests/features/adoption_matching.feature", index = 2)]
fn transport_by_priority(
    herd: RefCell<Vec<Dog>>,
    matched: RefCell<AdopterMatch>,
    plan: RefCell<MatchPlan>,
    transport: RefCell<TransportPlan>,
) {
    let _ = (herd, matched, plan, transport);
}
